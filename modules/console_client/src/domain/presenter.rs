//! Fallback presentation state machine
//!
//! Decides, per page, whether to show live data, cached data, or the demo
//! dataset when the network call fails. Transitions are driven solely by
//! fetch outcomes - no timers, no automatic retry. Demo data is always
//! marked as such and never presented as live.

use crate::contract::ApiError;

/// What the page should render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// First fetch in flight, nothing to show yet
    Loading,
    /// Last fetch succeeded
    Live(T),
    /// Cached (possibly outdated) value while a refetch is in flight or
    /// after a refetch failed
    Stale(T),
    /// Fetch failed with no cache; rendering the demo dataset
    FallbackDefault(T),
    /// Fetch failed, no cache, no sensible default
    Error(ApiError),
}

impl<T> ViewState<T> {
    /// True when the rendered data is the demo dataset - pages show the
    /// "demo data" indicator off this flag.
    pub fn is_demo(&self) -> bool {
        matches!(self, Self::FallbackDefault(_))
    }

    /// The renderable data, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Live(data) | Self::Stale(data) | Self::FallbackDefault(data) => Some(data),
            Self::Loading | Self::Error(_) => None,
        }
    }
}

/// Per-page fallback policy
pub struct FallbackPresenter<T> {
    state: ViewState<T>,
    default_data: Option<T>,
}

impl<T: Clone> FallbackPresenter<T> {
    /// New presenter in `Loading`, with the page's demo dataset if it has one
    pub fn new(default_data: Option<T>) -> Self {
        Self {
            state: ViewState::Loading,
            default_data,
        }
    }

    /// A fetch is starting. With a cached value the page keeps rendering it
    /// (`Stale`) instead of blocking on a spinner.
    pub fn on_fetch_started(&mut self, cached: Option<T>) -> &ViewState<T> {
        self.state = match cached {
            Some(value) => ViewState::Stale(value),
            None => ViewState::Loading,
        };
        &self.state
    }

    /// The fetch succeeded
    pub fn on_success(&mut self, data: T) -> &ViewState<T> {
        self.state = ViewState::Live(data);
        &self.state
    }

    /// The fetch failed. Cached data wins over the demo dataset; the demo
    /// dataset wins over a bare error; writes and other resources without a
    /// default surface the error.
    pub fn on_failure(&mut self, error: ApiError, cached: Option<T>) -> &ViewState<T> {
        self.state = match (cached, &self.default_data) {
            (Some(value), _) => ViewState::Stale(value),
            (None, Some(default)) => ViewState::FallbackDefault(default.clone()),
            (None, None) => ViewState::Error(error),
        };
        &self.state
    }

    /// Current state
    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_500() -> ApiError {
        ApiError::HttpStatus { status: 500 }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let presenter: FallbackPresenter<Vec<u32>> = FallbackPresenter::new(None);
        assert_eq!(*presenter.state(), ViewState::Loading);
    }

    #[test]
    fn test_success_goes_live() {
        let mut presenter = FallbackPresenter::new(Some(vec![0u32]));
        presenter.on_fetch_started(None);
        let state = presenter.on_success(vec![1, 2, 3]);
        assert_eq!(*state, ViewState::Live(vec![1, 2, 3]));
        assert!(!state.is_demo());
    }

    #[test]
    fn test_failure_without_cache_falls_back_to_demo_never_live() {
        let mut presenter = FallbackPresenter::new(Some(vec![9u32]));
        presenter.on_fetch_started(None);
        let state = presenter.on_failure(http_500(), None);
        assert_eq!(*state, ViewState::FallbackDefault(vec![9]));
        assert!(state.is_demo());
    }

    #[test]
    fn test_failure_with_cache_stays_stale() {
        let mut presenter = FallbackPresenter::new(Some(vec![9u32]));
        presenter.on_fetch_started(Some(vec![1]));
        let state = presenter.on_failure(http_500(), Some(vec![1]));
        assert_eq!(*state, ViewState::Stale(vec![1]));
    }

    #[test]
    fn test_failure_without_default_surfaces_error() {
        let mut presenter: FallbackPresenter<Vec<u32>> = FallbackPresenter::new(None);
        presenter.on_fetch_started(None);
        let state = presenter.on_failure(http_500(), None);
        assert_eq!(*state, ViewState::Error(http_500()));
        assert!(state.data().is_none());
    }

    #[test]
    fn test_refetch_renders_cached_while_in_flight() {
        let mut presenter = FallbackPresenter::new(None);
        presenter.on_success(vec![1u32]);
        let state = presenter.on_fetch_started(Some(vec![1]));
        assert_eq!(*state, ViewState::Stale(vec![1]));
        assert_eq!(state.data(), Some(&vec![1]));
    }
}

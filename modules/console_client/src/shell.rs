//! Page shell - the composition root every console page goes through
//!
//! Wires SessionStore -> ConsoleApi -> QueryCache -> FallbackPresenter.
//! Pages call `load` for reads and `mutate` for writes; the shell owns the
//! policy the pages used to copy-paste: redirect when signed out, serve a
//! fresh cache hit without I/O, invalidate before any refetch can run, and
//! drop results that arrive after the page unmounted.

use crate::config::ClientConfig;
use crate::contract::{ApiError, Company, ConsoleApi, Credentials};
use crate::domain::cache::{QueryCache, QueryKey, Resource};
use crate::domain::presenter::{FallbackPresenter, ViewState};
use crate::domain::session::SessionStore;
use crate::infra::http::{HttpConsoleClient, RestTransport};
use crate::infra::storage::FileSessionPersistence;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Result of a page load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome<T> {
    /// No current company - go to the auth entry point
    Redirect,
    /// The page unmounted while the fetch was in flight; result discarded
    Cancelled,
    /// Render this
    View(ViewState<T>),
}

/// Result of a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome<T> {
    /// No current company, or the server rejected the stored identity
    Redirect,
    /// The page unmounted while the call was in flight; result discarded
    Cancelled,
    /// The mutation finished
    Done(Result<T, ApiError>),
}

/// Composition root shared by every page
pub struct PageShell {
    api: Arc<dyn ConsoleApi>,
    session: Arc<SessionStore>,
    cache: Arc<QueryCache>,
}

impl PageShell {
    /// Build the full stack from configuration
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let transport = RestTransport::new(config)?;
        let api: Arc<dyn ConsoleApi> = Arc::new(HttpConsoleClient::new(transport));
        let cache = Arc::new(QueryCache::new());
        let persistence = Arc::new(FileSessionPersistence::new(config.session_file.clone()));
        let session = Arc::new(SessionStore::new(persistence, cache.clone()));
        tracing::info!(base_url = %config.base_url, "console client initialized");
        Ok(Self::with_parts(api, session, cache))
    }

    /// Assemble from parts - tests substitute fakes here
    pub fn with_parts(
        api: Arc<dyn ConsoleApi>,
        session: Arc<SessionStore>,
        cache: Arc<QueryCache>,
    ) -> Self {
        Self {
            api,
            session,
            cache,
        }
    }

    pub fn api(&self) -> Arc<dyn ConsoleApi> {
        self.api.clone()
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    /// Authenticate and make the returned company current
    pub async fn login(&self, credentials: &Credentials) -> Result<Company, ApiError> {
        let company = self.api.login(credentials).await?;
        tracing::info!(company = %company.id, "signed in");
        self.session.set_current(company.clone());
        Ok(company)
    }

    /// Sign out and purge everything tenant-scoped
    pub fn logout(&self) {
        tracing::info!("signed out");
        self.session.clear();
    }

    /// Load a resource for the current company.
    ///
    /// A fresh cache hit is served without network I/O. Otherwise the fetch
    /// runs against the current company id; while it is in flight a stale
    /// cache entry keeps rendering. A result arriving after `liveness` was
    /// cancelled is discarded without touching cache or session.
    pub async fn load<T, F, Fut>(
        &self,
        resource: Resource,
        params: &[(String, String)],
        default_data: Option<T>,
        liveness: &CancellationToken,
        fetch: F,
    ) -> PageOutcome<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce(Uuid) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let Some(company) = self.session.current() else {
            return PageOutcome::Redirect;
        };
        let key = QueryKey::new(resource, company.id, params);

        if let Some(cached) = self.cache.get::<T>(&key) {
            return PageOutcome::View(ViewState::Live(cached.value));
        }

        let stale = self.cache.peek::<T>(&key).map(|c| c.value);
        let mut presenter = FallbackPresenter::new(default_data);
        presenter.on_fetch_started(stale.clone());

        let result = fetch(company.id).await;
        if liveness.is_cancelled() {
            return PageOutcome::Cancelled;
        }

        match result {
            Ok(data) => {
                self.cache.set(key, data.clone());
                PageOutcome::View(presenter.on_success(data).clone())
            }
            Err(e) if e.invalidates_session() => {
                tracing::warn!(company = %company.id, error = %e, "stored company rejected by server");
                self.session.clear();
                PageOutcome::Redirect
            }
            Err(e) => PageOutcome::View(presenter.on_failure(e, stale).clone()),
        }
    }

    /// Run a mutation for the current company.
    ///
    /// On success the (resource, company) cache slice is invalidated before
    /// this returns, so a refetch issued afterwards can never observe
    /// pre-mutation cache state.
    pub async fn mutate<T, F, Fut>(
        &self,
        resource: Resource,
        liveness: &CancellationToken,
        mutate_fn: F,
    ) -> MutationOutcome<T>
    where
        F: FnOnce(Uuid) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let Some(company) = self.session.current() else {
            return MutationOutcome::Redirect;
        };

        let result = mutate_fn(company.id).await;
        if liveness.is_cancelled() {
            return MutationOutcome::Cancelled;
        }

        match result {
            Ok(value) => {
                self.cache.invalidate_resource(resource, company.id);
                MutationOutcome::Done(Ok(value))
            }
            Err(e) if e.invalidates_session() => {
                tracing::warn!(company = %company.id, error = %e, "stored company rejected by server");
                self.session.clear();
                MutationOutcome::Redirect
            }
            Err(e) => MutationOutcome::Done(Err(e)),
        }
    }
}

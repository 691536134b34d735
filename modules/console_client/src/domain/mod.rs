//! Domain layer - session, cache, forms and presentation policy

pub mod cache;
pub mod defaults;
pub mod forms;
pub mod presenter;
pub mod session;
pub mod validation;

pub use cache::{Cached, QueryCache, QueryKey, Resource};
pub use forms::{FormController, FormSnapshot};
pub use presenter::{FallbackPresenter, ViewState};
pub use session::{MemorySessionPersistence, SessionPersistence, SessionStore};
pub use validation::FieldRule;

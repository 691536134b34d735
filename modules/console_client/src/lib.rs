//! Console Client Core
//!
//! Tenant-scoped client core for the ReplyDesk admin console. Every console
//! page composes the same pieces: the current-company session, a REST client
//! scoped to that company, a query cache, form orchestration for the add/edit
//! dialogs, and a fallback presenter that decides between live, cached and
//! demo data.

// Public exports
pub mod contract;
pub use contract::{
    client::ConsoleApi, error::ApiError, Category, Channel, Company, CompanyStatus, Conversation,
    Invitation, InvitationStatus, Order, OrderStatus, Product, SubscriptionPlan,
};

pub mod shell;
pub use shell::PageShell;

pub mod config;
pub use config::ClientConfig;

pub mod domain;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod infra;

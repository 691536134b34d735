//! Contract layer - public API shared by every console page
//!
//! This layer contains transport-agnostic models and the client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::ConsoleApi;
pub use error::{ApiError, FieldErrors};
pub use model::{
    Category, CategoryDraft, Channel, Company, CompanyStatus, Conversation, ConversationQuery,
    Credentials, Invitation, InvitationDraft, InvitationStatus, Order, OrderStatus, Product,
    ProductDraft, SubscriptionPlan,
};

//! Contract models for the console client
//!
//! These models are transport-agnostic and shared by every page.
//! NO serde derives - wire DTOs live in the HTTP layer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Company (tenant) identity held by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Company ID - the tenant scope for every request
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Account email
    pub email: String,
    /// Account status
    pub status: CompanyStatus,
}

/// Company account status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyStatus {
    Active,
    Inactive,
    Suspended,
}

/// Messaging channel a conversation arrived on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Facebook,
    Whatsapp,
}

/// A customer conversation with auto-reply state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: Uuid,
    /// Owning company
    pub company_id: Uuid,
    pub channel: Channel,
    /// Customer display name
    pub contact_name: String,
    /// Last message preview
    pub last_message: String,
    /// Whether the bot answers this conversation
    pub auto_reply_enabled: bool,
    pub updated_at: DateTime<Utc>,
}

/// Catalog product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: Uuid,
    /// Owning company
    pub company_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    /// Optional catalog category
    pub category_id: Option<Uuid>,
    /// Hidden from the storefront when false
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Catalog category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    /// Owning company
    pub company_id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

/// Customer order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: Uuid,
    /// Owning company
    pub company_id: Uuid,
    pub customer_name: String,
    pub total: Decimal,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

/// Subscription plan offered on the billing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionPlan {
    pub id: Uuid,
    pub name: String,
    pub price_monthly: Decimal,
    /// Auto-reply messages included per month
    pub message_quota: u32,
    pub features: Vec<String>,
}

/// Team invitation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Expired,
}

/// Team member invitation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invitation {
    pub id: Uuid,
    /// Owning company
    pub company_id: Uuid,
    pub email: String,
    pub status: InvitationStatus,
    pub created_at: DateTime<Utc>,
}

/// Login credentials submitted by the auth form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Payload for creating or updating a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    pub category_id: Option<Uuid>,
}

/// Payload for creating or updating a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

/// Payload for inviting a team member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationDraft {
    pub email: String,
}

/// Query parameters for the conversations list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversationQuery {
    /// Maximum number of conversations to return
    pub limit: Option<u32>,
    /// Only conversations active in the last 24h
    pub recent_only: bool,
}

impl ConversationQuery {
    /// Render as query-string pairs, sorted for deterministic cache keys
    pub fn as_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if self.recent_only {
            pairs.push(("recent_only".to_string(), "true".to_string()));
        }
        pairs
    }
}

impl CompanyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
        }
    }
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

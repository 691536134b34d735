//! Wire DTOs with serde derives for the console REST API
//!
//! Every endpoint answers the same envelope; `success`/`data`/`error` are
//! the contract, `message` is a legacy alias some endpoints still use.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response envelope every endpoint must satisfy
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Absent means the body is not a valid envelope
    pub success: Option<bool>,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
}

// ===== Response DTOs =====

#[derive(Debug, Clone, Deserialize)]
pub struct CompanyDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversationDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub channel: String,
    pub contact_name: String,
    #[serde(default)]
    pub last_message: String,
    pub auto_reply_enabled: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    pub category_id: Option<Uuid>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub customer_name: String,
    pub total: Decimal,
    pub status: String,
    pub placed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionPlanDto {
    pub id: Uuid,
    pub name: String,
    pub price_monthly: Decimal,
    pub message_quota: u32,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvitationDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub email: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// ===== Request payloads =====

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvitationPayload {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AutoReplyPayload {
    pub auto_reply_enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderStatusPayload {
    pub status: String,
}

//! Client trait every console page depends on
//!
//! Pages never talk to the transport directly; they hold an
//! `Arc<dyn ConsoleApi>` so tests can substitute an in-memory fake.

use super::error::ApiError;
use super::model::{
    Category, CategoryDraft, Company, Conversation, ConversationQuery, Credentials, Invitation,
    InvitationDraft, Order, OrderStatus, Product, ProductDraft, SubscriptionPlan,
};
use async_trait::async_trait;
use uuid::Uuid;

/// Tenant-scoped console API
#[async_trait]
pub trait ConsoleApi: Send + Sync {
    // ===== Auth =====

    /// Authenticate and return the company for this account.
    /// The only unscoped call - everything else requires a company id.
    async fn login(&self, credentials: &Credentials) -> Result<Company, ApiError>;

    // ===== Conversations =====

    /// List conversations for a company
    async fn list_conversations(
        &self,
        company_id: Uuid,
        query: &ConversationQuery,
    ) -> Result<Vec<Conversation>, ApiError>;

    /// Enable or disable auto-reply on a conversation
    async fn set_auto_reply(
        &self,
        company_id: Uuid,
        conversation_id: Uuid,
        enabled: bool,
    ) -> Result<Conversation, ApiError>;

    // ===== Products =====

    /// List catalog products
    async fn list_products(&self, company_id: Uuid) -> Result<Vec<Product>, ApiError>;

    /// Create a product
    async fn create_product(
        &self,
        company_id: Uuid,
        draft: &ProductDraft,
    ) -> Result<Product, ApiError>;

    /// Update a product
    async fn update_product(
        &self,
        company_id: Uuid,
        product_id: Uuid,
        draft: &ProductDraft,
    ) -> Result<Product, ApiError>;

    /// Delete a product
    async fn delete_product(&self, company_id: Uuid, product_id: Uuid) -> Result<(), ApiError>;

    // ===== Categories =====

    /// List catalog categories
    async fn list_categories(&self, company_id: Uuid) -> Result<Vec<Category>, ApiError>;

    /// Create a category
    async fn create_category(
        &self,
        company_id: Uuid,
        draft: &CategoryDraft,
    ) -> Result<Category, ApiError>;

    /// Update a category
    async fn update_category(
        &self,
        company_id: Uuid,
        category_id: Uuid,
        draft: &CategoryDraft,
    ) -> Result<Category, ApiError>;

    /// Delete a category
    async fn delete_category(&self, company_id: Uuid, category_id: Uuid) -> Result<(), ApiError>;

    // ===== Orders =====

    /// List orders
    async fn list_orders(&self, company_id: Uuid) -> Result<Vec<Order>, ApiError>;

    /// Advance an order to a new status
    async fn update_order_status(
        &self,
        company_id: Uuid,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, ApiError>;

    // ===== Subscription plans =====

    /// List available subscription plans
    async fn list_plans(&self, company_id: Uuid) -> Result<Vec<SubscriptionPlan>, ApiError>;

    // ===== Invitations =====

    /// List team invitations
    async fn list_invitations(&self, company_id: Uuid) -> Result<Vec<Invitation>, ApiError>;

    /// Invite a team member
    async fn create_invitation(
        &self,
        company_id: Uuid,
        draft: &InvitationDraft,
    ) -> Result<Invitation, ApiError>;

    /// Revoke a pending invitation
    async fn revoke_invitation(
        &self,
        company_id: Uuid,
        invitation_id: Uuid,
    ) -> Result<(), ApiError>;
}

//! HTTP implementation of the console API trait
//!
//! Thin per-method delegation to the transport: build the path and payload,
//! decode the DTO, map into the contract model.

use super::dto::{
    AutoReplyPayload, CategoryDto, CategoryPayload, CompanyDto, ConversationDto, InvitationDto,
    InvitationPayload, LoginRequest, OrderDto, OrderStatusPayload, ProductDto, ProductPayload,
    SubscriptionPlanDto,
};
use super::mapper::collect_models;
use super::transport::RestTransport;
use crate::contract::{
    ApiError, Category, CategoryDraft, Company, ConsoleApi, Conversation, ConversationQuery,
    Credentials, Invitation, InvitationDraft, Order, OrderStatus, Product, ProductDraft,
    SubscriptionPlan,
};
use crate::domain::cache::Resource;
use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

/// Console API over REST
pub struct HttpConsoleClient {
    transport: RestTransport,
}

impl HttpConsoleClient {
    pub fn new(transport: RestTransport) -> Self {
        Self { transport }
    }
}

fn json_body<T: serde::Serialize>(payload: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Network {
        message: format!("failed to encode request body: {}", e),
    })
}

#[async_trait]
impl ConsoleApi for HttpConsoleClient {
    async fn login(&self, credentials: &Credentials) -> Result<Company, ApiError> {
        let body = json_body(&LoginRequest::from(credentials))?;
        let dto: CompanyDto = self
            .transport
            .request_unscoped(Method::POST, "auth/login", Some(body))
            .await?;
        dto.try_into()
    }

    async fn list_conversations(
        &self,
        company_id: Uuid,
        query: &ConversationQuery,
    ) -> Result<Vec<Conversation>, ApiError> {
        let dtos: Vec<ConversationDto> = self
            .transport
            .request(
                Method::GET,
                &company_id.to_string(),
                Resource::Conversations,
                None,
                &query.as_pairs(),
                None,
            )
            .await?;
        collect_models(dtos)
    }

    async fn set_auto_reply(
        &self,
        company_id: Uuid,
        conversation_id: Uuid,
        enabled: bool,
    ) -> Result<Conversation, ApiError> {
        let suffix = format!("{}/auto-reply", conversation_id);
        let body = json_body(&AutoReplyPayload {
            auto_reply_enabled: enabled,
        })?;
        let dto: ConversationDto = self
            .transport
            .request(
                Method::PUT,
                &company_id.to_string(),
                Resource::Conversations,
                Some(&suffix),
                &[],
                Some(body),
            )
            .await?;
        dto.try_into()
    }

    async fn list_products(&self, company_id: Uuid) -> Result<Vec<Product>, ApiError> {
        let dtos: Vec<ProductDto> = self
            .transport
            .request(
                Method::GET,
                &company_id.to_string(),
                Resource::Products,
                None,
                &[],
                None,
            )
            .await?;
        collect_models(dtos)
    }

    async fn create_product(
        &self,
        company_id: Uuid,
        draft: &ProductDraft,
    ) -> Result<Product, ApiError> {
        let body = json_body(&ProductPayload::from(draft))?;
        let dto: ProductDto = self
            .transport
            .request(
                Method::POST,
                &company_id.to_string(),
                Resource::Products,
                None,
                &[],
                Some(body),
            )
            .await?;
        dto.try_into()
    }

    async fn update_product(
        &self,
        company_id: Uuid,
        product_id: Uuid,
        draft: &ProductDraft,
    ) -> Result<Product, ApiError> {
        let suffix = product_id.to_string();
        let body = json_body(&ProductPayload::from(draft))?;
        let dto: ProductDto = self
            .transport
            .request(
                Method::PUT,
                &company_id.to_string(),
                Resource::Products,
                Some(&suffix),
                &[],
                Some(body),
            )
            .await?;
        dto.try_into()
    }

    async fn delete_product(&self, company_id: Uuid, product_id: Uuid) -> Result<(), ApiError> {
        let suffix = product_id.to_string();
        self.transport
            .request_unit(
                Method::DELETE,
                &company_id.to_string(),
                Resource::Products,
                Some(&suffix),
                None,
            )
            .await
    }

    async fn list_categories(&self, company_id: Uuid) -> Result<Vec<Category>, ApiError> {
        let dtos: Vec<CategoryDto> = self
            .transport
            .request(
                Method::GET,
                &company_id.to_string(),
                Resource::Categories,
                None,
                &[],
                None,
            )
            .await?;
        collect_models(dtos)
    }

    async fn create_category(
        &self,
        company_id: Uuid,
        draft: &CategoryDraft,
    ) -> Result<Category, ApiError> {
        let body = json_body(&CategoryPayload::from(draft))?;
        let dto: CategoryDto = self
            .transport
            .request(
                Method::POST,
                &company_id.to_string(),
                Resource::Categories,
                None,
                &[],
                Some(body),
            )
            .await?;
        dto.try_into()
    }

    async fn update_category(
        &self,
        company_id: Uuid,
        category_id: Uuid,
        draft: &CategoryDraft,
    ) -> Result<Category, ApiError> {
        let suffix = category_id.to_string();
        let body = json_body(&CategoryPayload::from(draft))?;
        let dto: CategoryDto = self
            .transport
            .request(
                Method::PUT,
                &company_id.to_string(),
                Resource::Categories,
                Some(&suffix),
                &[],
                Some(body),
            )
            .await?;
        dto.try_into()
    }

    async fn delete_category(&self, company_id: Uuid, category_id: Uuid) -> Result<(), ApiError> {
        let suffix = category_id.to_string();
        self.transport
            .request_unit(
                Method::DELETE,
                &company_id.to_string(),
                Resource::Categories,
                Some(&suffix),
                None,
            )
            .await
    }

    async fn list_orders(&self, company_id: Uuid) -> Result<Vec<Order>, ApiError> {
        let dtos: Vec<OrderDto> = self
            .transport
            .request(
                Method::GET,
                &company_id.to_string(),
                Resource::Orders,
                None,
                &[],
                None,
            )
            .await?;
        collect_models(dtos)
    }

    async fn update_order_status(
        &self,
        company_id: Uuid,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let suffix = format!("{}/status", order_id);
        let body = json_body(&OrderStatusPayload {
            status: status.as_str().to_string(),
        })?;
        let dto: OrderDto = self
            .transport
            .request(
                Method::PUT,
                &company_id.to_string(),
                Resource::Orders,
                Some(&suffix),
                &[],
                Some(body),
            )
            .await?;
        dto.try_into()
    }

    async fn list_plans(&self, company_id: Uuid) -> Result<Vec<SubscriptionPlan>, ApiError> {
        let dtos: Vec<SubscriptionPlanDto> = self
            .transport
            .request(
                Method::GET,
                &company_id.to_string(),
                Resource::Plans,
                None,
                &[],
                None,
            )
            .await?;
        collect_models(dtos)
    }

    async fn list_invitations(&self, company_id: Uuid) -> Result<Vec<Invitation>, ApiError> {
        let dtos: Vec<InvitationDto> = self
            .transport
            .request(
                Method::GET,
                &company_id.to_string(),
                Resource::Invitations,
                None,
                &[],
                None,
            )
            .await?;
        collect_models(dtos)
    }

    async fn create_invitation(
        &self,
        company_id: Uuid,
        draft: &InvitationDraft,
    ) -> Result<Invitation, ApiError> {
        let body = json_body(&InvitationPayload::from(draft))?;
        let dto: InvitationDto = self
            .transport
            .request(
                Method::POST,
                &company_id.to_string(),
                Resource::Invitations,
                None,
                &[],
                Some(body),
            )
            .await?;
        dto.try_into()
    }

    async fn revoke_invitation(
        &self,
        company_id: Uuid,
        invitation_id: Uuid,
    ) -> Result<(), ApiError> {
        let suffix = invitation_id.to_string();
        self.transport
            .request_unit(
                Method::DELETE,
                &company_id.to_string(),
                Resource::Invitations,
                Some(&suffix),
                None,
            )
            .await
    }
}

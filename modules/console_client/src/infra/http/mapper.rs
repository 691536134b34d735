//! Mappers between wire DTOs and contract models
//!
//! DTO -> model conversions are fallible: an enum string the client does not
//! know maps to `InvalidEnvelope`, never a panic. Model -> payload
//! conversions are infallible.

use super::dto::{
    CategoryDto, CategoryPayload, CompanyDto, ConversationDto, InvitationDto, InvitationPayload,
    LoginRequest, OrderDto, ProductDto, ProductPayload, SubscriptionPlanDto,
};
use crate::contract::{
    ApiError, Category, CategoryDraft, Channel, Company, CompanyStatus, Conversation, Credentials,
    Invitation, InvitationDraft, InvitationStatus, Order, OrderStatus, Product, ProductDraft,
    SubscriptionPlan,
};

fn unknown_variant(field: &str, value: &str) -> ApiError {
    ApiError::InvalidEnvelope {
        details: format!("unknown {} '{}'", field, value),
    }
}

fn parse_company_status(value: &str) -> Result<CompanyStatus, ApiError> {
    match value {
        "active" => Ok(CompanyStatus::Active),
        "inactive" => Ok(CompanyStatus::Inactive),
        "suspended" => Ok(CompanyStatus::Suspended),
        other => Err(unknown_variant("company status", other)),
    }
}

fn parse_channel(value: &str) -> Result<Channel, ApiError> {
    match value {
        "facebook" => Ok(Channel::Facebook),
        "whatsapp" => Ok(Channel::Whatsapp),
        other => Err(unknown_variant("channel", other)),
    }
}

fn parse_order_status(value: &str) -> Result<OrderStatus, ApiError> {
    match value {
        "pending" => Ok(OrderStatus::Pending),
        "paid" => Ok(OrderStatus::Paid),
        "shipped" => Ok(OrderStatus::Shipped),
        "delivered" => Ok(OrderStatus::Delivered),
        "cancelled" => Ok(OrderStatus::Cancelled),
        other => Err(unknown_variant("order status", other)),
    }
}

fn parse_invitation_status(value: &str) -> Result<InvitationStatus, ApiError> {
    match value {
        "pending" => Ok(InvitationStatus::Pending),
        "accepted" => Ok(InvitationStatus::Accepted),
        "expired" => Ok(InvitationStatus::Expired),
        other => Err(unknown_variant("invitation status", other)),
    }
}

impl TryFrom<CompanyDto> for Company {
    type Error = ApiError;

    fn try_from(dto: CompanyDto) -> Result<Self, Self::Error> {
        Ok(Company {
            id: dto.id,
            name: dto.name,
            email: dto.email,
            status: parse_company_status(&dto.status)?,
        })
    }
}

impl TryFrom<ConversationDto> for Conversation {
    type Error = ApiError;

    fn try_from(dto: ConversationDto) -> Result<Self, Self::Error> {
        Ok(Conversation {
            id: dto.id,
            company_id: dto.company_id,
            channel: parse_channel(&dto.channel)?,
            contact_name: dto.contact_name,
            last_message: dto.last_message,
            auto_reply_enabled: dto.auto_reply_enabled,
            updated_at: dto.updated_at,
        })
    }
}

impl TryFrom<ProductDto> for Product {
    type Error = ApiError;

    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        Ok(Product {
            id: dto.id,
            company_id: dto.company_id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            stock: dto.stock,
            category_id: dto.category_id,
            active: dto.active,
            created_at: dto.created_at,
        })
    }
}

impl TryFrom<CategoryDto> for Category {
    type Error = ApiError;

    fn try_from(dto: CategoryDto) -> Result<Self, Self::Error> {
        Ok(Category {
            id: dto.id,
            company_id: dto.company_id,
            name: dto.name,
            description: dto.description,
            created_at: dto.created_at,
        })
    }
}

impl TryFrom<OrderDto> for Order {
    type Error = ApiError;

    fn try_from(dto: OrderDto) -> Result<Self, Self::Error> {
        Ok(Order {
            id: dto.id,
            company_id: dto.company_id,
            customer_name: dto.customer_name,
            total: dto.total,
            status: parse_order_status(&dto.status)?,
            placed_at: dto.placed_at,
        })
    }
}

impl TryFrom<SubscriptionPlanDto> for SubscriptionPlan {
    type Error = ApiError;

    fn try_from(dto: SubscriptionPlanDto) -> Result<Self, Self::Error> {
        Ok(SubscriptionPlan {
            id: dto.id,
            name: dto.name,
            price_monthly: dto.price_monthly,
            message_quota: dto.message_quota,
            features: dto.features,
        })
    }
}

impl TryFrom<InvitationDto> for Invitation {
    type Error = ApiError;

    fn try_from(dto: InvitationDto) -> Result<Self, Self::Error> {
        Ok(Invitation {
            id: dto.id,
            company_id: dto.company_id,
            email: dto.email,
            status: parse_invitation_status(&dto.status)?,
            created_at: dto.created_at,
        })
    }
}

/// Map a whole listing, failing on the first malformed record
pub fn collect_models<D, M>(dtos: Vec<D>) -> Result<Vec<M>, ApiError>
where
    M: TryFrom<D, Error = ApiError>,
{
    dtos.into_iter().map(M::try_from).collect()
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        LoginRequest {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        }
    }
}

impl From<&ProductDraft> for ProductPayload {
    fn from(draft: &ProductDraft) -> Self {
        ProductPayload {
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price,
            stock: draft.stock,
            category_id: draft.category_id,
        }
    }
}

impl From<&CategoryDraft> for CategoryPayload {
    fn from(draft: &CategoryDraft) -> Self {
        CategoryPayload {
            name: draft.name.clone(),
            description: draft.description.clone(),
        }
    }
}

impl From<&InvitationDraft> for InvitationPayload {
    fn from(draft: &InvitationDraft) -> Self {
        InvitationPayload {
            email: draft.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_company_status_roundtrip() {
        let dto = CompanyDto {
            id: Uuid::new_v4(),
            name: "Acme".to_string(),
            email: "owner@acme.test".to_string(),
            status: "active".to_string(),
        };
        let company = Company::try_from(dto).unwrap();
        assert_eq!(company.status, CompanyStatus::Active);
    }

    #[test]
    fn test_unknown_enum_string_is_invalid_envelope() {
        let dto = OrderDto {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            customer_name: "Jo".to_string(),
            total: rust_decimal::Decimal::ZERO,
            status: "teleported".to_string(),
            placed_at: Utc::now(),
        };
        let err = Order::try_from(dto).unwrap_err();
        assert!(matches!(err, ApiError::InvalidEnvelope { .. }));
    }

    #[test]
    fn test_collect_models_fails_on_first_bad_record() {
        let good = ConversationDto {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            channel: "whatsapp".to_string(),
            contact_name: "Sam".to_string(),
            last_message: String::new(),
            auto_reply_enabled: true,
            updated_at: Utc::now(),
        };
        let mut bad = good.clone();
        bad.channel = "carrier-pigeon".to_string();

        let result: Result<Vec<Conversation>, _> = collect_models(vec![good, bad]);
        assert!(result.is_err());
    }
}

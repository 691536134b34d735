//! Demo datasets for list pages
//!
//! Rendered only through `ViewState::FallbackDefault` when a fetch fails and
//! nothing is cached. Every record is self-evidently demo content; the
//! presenter's `is_demo()` flag drives the visible indicator.

use crate::contract::{
    Category, Channel, Conversation, Order, OrderStatus, Product, SubscriptionPlan,
};
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Demo conversations for the inbox page
pub fn demo_conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: Uuid::new_v4(),
            company_id: Uuid::nil(),
            channel: Channel::Whatsapp,
            contact_name: "Demo Customer".to_string(),
            last_message: "Hi! Is the blue one still in stock?".to_string(),
            auto_reply_enabled: true,
            updated_at: Utc::now(),
        },
        Conversation {
            id: Uuid::new_v4(),
            company_id: Uuid::nil(),
            channel: Channel::Facebook,
            contact_name: "Demo Shopper".to_string(),
            last_message: "What are your opening hours?".to_string(),
            auto_reply_enabled: false,
            updated_at: Utc::now(),
        },
    ]
}

/// Demo products for the catalog page
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: Uuid::new_v4(),
            company_id: Uuid::nil(),
            name: "Demo Product - Classic Tee".to_string(),
            description: "Sample catalog item".to_string(),
            price: Decimal::new(1999, 2),
            stock: 25,
            category_id: None,
            active: true,
            created_at: Utc::now(),
        },
        Product {
            id: Uuid::new_v4(),
            company_id: Uuid::nil(),
            name: "Demo Product - Canvas Tote".to_string(),
            description: "Sample catalog item".to_string(),
            price: Decimal::new(1250, 2),
            stock: 40,
            category_id: None,
            active: true,
            created_at: Utc::now(),
        },
        Product {
            id: Uuid::new_v4(),
            company_id: Uuid::nil(),
            name: "Demo Product - Enamel Mug".to_string(),
            description: "Sample catalog item".to_string(),
            price: Decimal::new(899, 2),
            stock: 0,
            category_id: None,
            active: false,
            created_at: Utc::now(),
        },
    ]
}

/// Demo categories for the catalog page
pub fn demo_categories() -> Vec<Category> {
    vec![
        Category {
            id: Uuid::new_v4(),
            company_id: Uuid::nil(),
            name: "Demo Apparel".to_string(),
            description: "Sample category".to_string(),
            created_at: Utc::now(),
        },
        Category {
            id: Uuid::new_v4(),
            company_id: Uuid::nil(),
            name: "Demo Accessories".to_string(),
            description: "Sample category".to_string(),
            created_at: Utc::now(),
        },
    ]
}

/// Demo orders for the orders page
pub fn demo_orders() -> Vec<Order> {
    vec![
        Order {
            id: Uuid::new_v4(),
            company_id: Uuid::nil(),
            customer_name: "Demo Customer".to_string(),
            total: Decimal::new(3248, 2),
            status: OrderStatus::Paid,
            placed_at: Utc::now(),
        },
        Order {
            id: Uuid::new_v4(),
            company_id: Uuid::nil(),
            customer_name: "Demo Shopper".to_string(),
            total: Decimal::new(899, 2),
            status: OrderStatus::Pending,
            placed_at: Utc::now(),
        },
    ]
}

/// Demo subscription plans for the billing page
pub fn demo_plans() -> Vec<SubscriptionPlan> {
    vec![
        SubscriptionPlan {
            id: Uuid::new_v4(),
            name: "Starter (demo)".to_string(),
            price_monthly: Decimal::ZERO,
            message_quota: 100,
            features: vec!["1 channel".to_string(), "Basic auto-reply".to_string()],
        },
        SubscriptionPlan {
            id: Uuid::new_v4(),
            name: "Growth (demo)".to_string(),
            price_monthly: Decimal::new(2900, 2),
            message_quota: 5_000,
            features: vec![
                "All channels".to_string(),
                "Auto-reply rules".to_string(),
                "Order notifications".to_string(),
            ],
        },
        SubscriptionPlan {
            id: Uuid::new_v4(),
            name: "Scale (demo)".to_string(),
            price_monthly: Decimal::new(9900, 2),
            message_quota: 50_000,
            features: vec![
                "All channels".to_string(),
                "Priority support".to_string(),
                "Team seats".to_string(),
            ],
        },
    ]
}

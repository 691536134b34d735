//! Common test utilities and shared company fixtures

use chrono::Utc;
use console_client::contract::{
    Channel, Company, CompanyStatus, Conversation, Product,
};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Two unrelated companies for tenant isolation tests
#[derive(Debug, Clone)]
pub struct TestCompanies {
    pub acme: Company,
    pub globex: Company,
}

impl TestCompanies {
    pub fn new() -> Self {
        Self {
            acme: Company {
                id: Uuid::new_v4(),
                name: "Acme Outfitters".to_string(),
                email: "owner@acme.test".to_string(),
                status: CompanyStatus::Active,
            },
            globex: Company {
                id: Uuid::new_v4(),
                name: "Globex Trading".to_string(),
                email: "admin@globex.test".to_string(),
                status: CompanyStatus::Active,
            },
        }
    }
}

impl Default for TestCompanies {
    fn default() -> Self {
        Self::new()
    }
}

/// A product owned by the given company
pub fn product(company_id: Uuid, name: &str) -> Product {
    Product {
        id: Uuid::new_v4(),
        company_id,
        name: name.to_string(),
        description: String::new(),
        price: Decimal::new(1999, 2),
        stock: 10,
        category_id: None,
        active: true,
        created_at: Utc::now(),
    }
}

/// A conversation owned by the given company
pub fn conversation(company_id: Uuid, contact: &str) -> Conversation {
    Conversation {
        id: Uuid::new_v4(),
        company_id,
        channel: Channel::Whatsapp,
        contact_name: contact.to_string(),
        last_message: "Hello!".to_string(),
        auto_reply_enabled: true,
        updated_at: Utc::now(),
    }
}

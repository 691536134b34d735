//! Integration tests for form orchestration: the double-submit guard and
//! the full validate-then-submit round trip.

use console_client::contract::ApiError;
use console_client::domain::forms::{FieldMap, FormController};
use console_client::domain::validation::FieldRule;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

fn product_form() -> FormController {
    let mut defaults = FieldMap::new();
    defaults.insert("name".to_string(), String::new());
    defaults.insert("price".to_string(), String::new());
    defaults.insert("stock".to_string(), "0".to_string());
    FormController::new(
        defaults,
        vec![
            FieldRule::required("name"),
            FieldRule::min_length("name", 3),
            FieldRule::required("price"),
            FieldRule::required("stock"),
        ],
    )
}

#[tokio::test]
async fn test_overlapping_submits_issue_exactly_one_call() {
    let form = Arc::new(product_form());
    form.set_field("name", "Anvil");
    form.set_field("price", "19.99");

    let calls = Arc::new(AtomicUsize::new(0));
    let entered = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());

    let first = {
        let form = form.clone();
        let calls = calls.clone();
        let entered = entered.clone();
        let release = release.clone();
        tokio::spawn(async move {
            form.submit(|_values| async move {
                calls.fetch_add(1, Ordering::SeqCst);
                entered.notify_one();
                release.notified().await;
                Ok::<_, ApiError>(())
            })
            .await
        })
    };

    // Wait until the first submit is inside its network call
    entered.notified().await;
    assert!(form.snapshot().submitting);

    // The double-click: must be a no-op, no validation, no I/O
    let second = {
        let calls = calls.clone();
        form.submit(|_values| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, ApiError>(()) }
        })
        .await
    };
    assert!(second.is_none());

    release.notify_one();
    let first = first.await.unwrap();
    assert!(matches!(first, Some(Ok(()))));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Guard released: a later submit goes through
    form.set_field("name", "Anvil");
    form.set_field("price", "19.99");
    let third = form
        .submit(|_values| async { Ok::<_, ApiError>(()) })
        .await;
    assert!(matches!(third, Some(Ok(()))));
}

#[tokio::test]
async fn test_validation_round_trip() {
    let form = product_form();

    // Nothing filled in: every required rule fires
    let errors = form.validate();
    assert_eq!(errors.len(), 2);
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("price"));

    // Filling every required field clears the violations
    form.set_field("name", "Anvil");
    form.set_field("price", "19.99");
    assert!(form.validate().is_empty());

    // A rule violation on a filled field still reports
    form.set_field("name", "Ax");
    let errors = form.validate();
    assert_eq!(
        errors.get("name").map(String::as_str),
        Some("name must be at least 3 characters")
    );
}

#[tokio::test]
async fn test_invalid_form_never_reaches_the_network() {
    let form = product_form();
    let calls = AtomicUsize::new(0);

    let result = form
        .submit(|_values| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, ApiError>(()) }
        })
        .await
        .unwrap();

    assert!(matches!(result, Err(ApiError::Validation { .. })));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!form.snapshot().submitting);
}

#[tokio::test]
async fn test_registration_style_password_confirmation() {
    let mut defaults = FieldMap::new();
    for field in ["company_name", "email", "password", "confirm_password"] {
        defaults.insert(field.to_string(), String::new());
    }
    let form = FormController::new(
        defaults,
        vec![
            FieldRule::required("company_name"),
            FieldRule::required("email"),
            FieldRule::email("email"),
            FieldRule::required("password"),
            FieldRule::min_length("password", 8),
            FieldRule::equals_field("confirm_password", "password"),
        ],
    );

    form.set_field("company_name", "Acme Outfitters");
    form.set_field("email", "owner@acme.test");
    form.set_field("password", "s3cret!!");
    form.set_field("confirm_password", "s3cret!");

    let errors = form.validate();
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("confirm_password"));

    form.set_field("confirm_password", "s3cret!!");
    assert!(form.validate().is_empty());
}

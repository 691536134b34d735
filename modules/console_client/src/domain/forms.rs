//! Controlled-form state and submit orchestration
//!
//! One controller backs every add/edit dialog: field values, aggregated
//! validation errors, and a guarded submit. The guard makes an overlapping
//! second submit a no-op so a double-clicked button produces exactly one
//! network call.

use crate::contract::{ApiError, FieldErrors};
use crate::domain::validation::{apply_rules, FieldRule};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

/// Field name used for the dialog-level error row
pub const FORM_ERROR_FIELD: &str = "_form";

/// Form field values, keyed by field name
pub type FieldMap = BTreeMap<String, String>;

/// Point-in-time view of the form for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub values: FieldMap,
    pub errors: FieldErrors,
    pub submitting: bool,
}

struct FormState {
    values: FieldMap,
    errors: FieldErrors,
}

/// Controller for one dialog's lifetime: created when the dialog opens,
/// discarded when it closes. Nothing is persisted.
pub struct FormController {
    defaults: FieldMap,
    rules: Vec<FieldRule>,
    state: RwLock<FormState>,
    submitting: AtomicBool,
}

impl FormController {
    /// Open a form with initial values and its rule set
    pub fn new(defaults: FieldMap, rules: Vec<FieldRule>) -> Self {
        Self {
            state: RwLock::new(FormState {
                values: defaults.clone(),
                errors: FieldErrors::new(),
            }),
            defaults,
            rules,
            submitting: AtomicBool::new(false),
        }
    }

    /// Set one field, clearing any error recorded against it
    pub fn set_field(&self, name: &str, value: &str) {
        let mut state = self.state.write();
        state.values.insert(name.to_string(), value.to_string());
        state.errors.remove(name);
    }

    /// Current values, errors and submit flag for rendering
    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.state.read();
        FormSnapshot {
            values: state.values.clone(),
            errors: state.errors.clone(),
            submitting: self.submitting.load(Ordering::SeqCst),
        }
    }

    /// Run the rule set against current values, returning every violation
    pub fn validate(&self) -> FieldErrors {
        apply_rules(&self.state.read().values, &self.rules)
    }

    /// Validate, then run the submit function with the current values.
    ///
    /// Returns `None` when a submit is already in flight - the overlapping
    /// call performs no validation and no I/O. On success the values reset
    /// to their defaults and errors clear; on failure the values are kept so
    /// the user does not lose input, and the error lands on the dialog-level
    /// row.
    pub async fn submit<T, F, Fut>(&self, submit_fn: F) -> Option<Result<T, ApiError>>
    where
        F: FnOnce(FieldMap) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if self.submitting.swap(true, Ordering::SeqCst) {
            return None;
        }

        let violations = self.validate();
        if !violations.is_empty() {
            let mut state = self.state.write();
            state.errors = violations.clone();
            drop(state);
            self.submitting.store(false, Ordering::SeqCst);
            return Some(Err(ApiError::Validation { errors: violations }));
        }

        let values = self.state.read().values.clone();
        let result = submit_fn(values).await;

        {
            let mut state = self.state.write();
            match &result {
                Ok(_) => {
                    state.values = self.defaults.clone();
                    state.errors.clear();
                }
                Err(e) => {
                    state
                        .errors
                        .insert(FORM_ERROR_FIELD.to_string(), e.to_string());
                }
            }
        }
        self.submitting.store(false, Ordering::SeqCst);
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_form() -> FormController {
        let mut defaults = FieldMap::new();
        defaults.insert("email".to_string(), String::new());
        defaults.insert("password".to_string(), String::new());
        FormController::new(
            defaults,
            vec![
                FieldRule::required("email"),
                FieldRule::email("email"),
                FieldRule::required("password"),
            ],
        )
    }

    #[tokio::test]
    async fn test_validation_failure_populates_errors_without_calling_submit_fn() {
        let form = login_form();
        form.set_field("email", "not-an-email");

        let result = form
            .submit(|_| async { Ok::<_, ApiError>(()) })
            .await
            .unwrap();

        assert!(matches!(result, Err(ApiError::Validation { .. })));
        let snapshot = form.snapshot();
        assert!(snapshot.errors.contains_key("email"));
        assert!(snapshot.errors.contains_key("password"));
        // Input preserved
        assert_eq!(
            snapshot.values.get("email").map(String::as_str),
            Some("not-an-email")
        );
    }

    #[tokio::test]
    async fn test_success_resets_to_defaults() {
        let form = login_form();
        form.set_field("email", "owner@acme.test");
        form.set_field("password", "s3cret!!");

        let result = form
            .submit(|values| async move {
                assert_eq!(
                    values.get("email").map(String::as_str),
                    Some("owner@acme.test")
                );
                Ok::<_, ApiError>(())
            })
            .await
            .unwrap();

        assert!(result.is_ok());
        let snapshot = form.snapshot();
        assert_eq!(snapshot.values.get("email").map(String::as_str), Some(""));
        assert!(snapshot.errors.is_empty());
        assert!(!snapshot.submitting);
    }

    #[tokio::test]
    async fn test_failure_keeps_values_and_sets_form_error() {
        let form = login_form();
        form.set_field("email", "owner@acme.test");
        form.set_field("password", "s3cret!!");

        let result = form
            .submit(|_| async {
                Err::<(), _>(ApiError::Business {
                    message: "Invalid credentials".to_string(),
                })
            })
            .await
            .unwrap();

        assert!(result.is_err());
        let snapshot = form.snapshot();
        assert_eq!(
            snapshot.values.get("email").map(String::as_str),
            Some("owner@acme.test")
        );
        assert_eq!(
            snapshot.errors.get(FORM_ERROR_FIELD).map(String::as_str),
            Some("Invalid credentials")
        );
    }

    #[tokio::test]
    async fn test_set_field_clears_that_fields_error() {
        let form = login_form();
        let _ = form.submit(|_| async { Ok::<_, ApiError>(()) }).await;
        assert!(form.snapshot().errors.contains_key("email"));

        form.set_field("email", "owner@acme.test");
        assert!(!form.snapshot().errors.contains_key("email"));
    }
}

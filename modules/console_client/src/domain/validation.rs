//! Declarative field validation for console forms
//!
//! Rules are evaluated all at once - the caller gets every violation in a
//! single pass, one aggregated message per field, matching how the console
//! dialogs surface errors inline.

use crate::contract::FieldErrors;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    re
});

/// A single validation rule bound to a field
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: String,
    kind: RuleKind,
}

#[derive(Debug, Clone)]
enum RuleKind {
    /// Field must be present and non-blank
    Required,
    /// Minimum length after trimming
    MinLength(usize),
    /// Value must match the pattern
    Pattern { regex: Regex, message: String },
    /// Value must equal another field (password confirmation)
    EqualsField(String),
}

impl FieldRule {
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: RuleKind::Required,
        }
    }

    pub fn min_length(field: &str, min: usize) -> Self {
        Self {
            field: field.to_string(),
            kind: RuleKind::MinLength(min),
        }
    }

    pub fn pattern(field: &str, regex: Regex, message: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: RuleKind::Pattern {
                regex,
                message: message.to_string(),
            },
        }
    }

    /// Convenience email rule
    pub fn email(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: RuleKind::Pattern {
                regex: EMAIL_RE.clone(),
                message: "must be a valid email address".to_string(),
            },
        }
    }

    pub fn equals_field(field: &str, other: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: RuleKind::EqualsField(other.to_string()),
        }
    }

    /// Field this rule is bound to
    pub fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, values: &BTreeMap<String, String>) -> Option<String> {
        let value = values.get(&self.field).map(String::as_str).unwrap_or("");
        match &self.kind {
            RuleKind::Required => {
                if value.trim().is_empty() {
                    Some(format!("{} is required", self.field))
                } else {
                    None
                }
            }
            RuleKind::MinLength(min) => {
                // Blank values are Required's concern
                if !value.trim().is_empty() && value.trim().len() < *min {
                    Some(format!("{} must be at least {} characters", self.field, min))
                } else {
                    None
                }
            }
            RuleKind::Pattern { regex, message } => {
                if !value.trim().is_empty() && !regex.is_match(value.trim()) {
                    Some(format!("{} {}", self.field, message))
                } else {
                    None
                }
            }
            RuleKind::EqualsField(other) => {
                let other_value = values.get(other).map(String::as_str).unwrap_or("");
                if value != other_value {
                    Some(format!("{} must match {}", self.field, other))
                } else {
                    None
                }
            }
        }
    }
}

/// Evaluate every rule and collect all violations, first violation per field
/// wins. Never fail-fast.
pub fn apply_rules(values: &BTreeMap<String, String>, rules: &[FieldRule]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for rule in rules {
        if errors.contains_key(rule.field()) {
            continue;
        }
        if let Some(message) = rule.check(values) {
            errors.insert(rule.field().to_string(), message);
        }
    }
    errors
}

//! Contract error types for the console client
//!
//! These errors are transport-agnostic; the fetch layer never recovers them
//! silently - fallback policy belongs to the presenter and page shell.

use std::collections::BTreeMap;

/// Field-scoped validation messages, keyed by field name
pub type FieldErrors = BTreeMap<String, String>;

/// Console client errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request issued without a current company scope
    MissingTenant,
    /// Transport failure (connect, DNS, timeout)
    Network {
        /// Underlying failure description
        message: String,
    },
    /// Non-2xx response without a usable envelope
    HttpStatus {
        /// HTTP status code
        status: u16,
    },
    /// Malformed response body or missing `success` field
    InvalidEnvelope {
        /// Parse failure details
        details: String,
    },
    /// Server answered `success: false` with a message
    Business {
        /// Server-supplied error message
        message: String,
    },
    /// Client-side form validation failed; never sent to the server
    Validation {
        /// Violations per field
        errors: FieldErrors,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTenant => {
                write!(f, "No current company selected")
            }
            Self::Network { message } => {
                write!(f, "Network error: {}", message)
            }
            Self::HttpStatus { status } => {
                write!(f, "Server returned HTTP {}", status)
            }
            Self::InvalidEnvelope { details } => {
                write!(f, "Invalid response envelope: {}", details)
            }
            Self::Business { message } => {
                write!(f, "{}", message)
            }
            Self::Validation { errors } => {
                let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
                write!(f, "Validation failed for: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Whether this error means the stored company identity is no longer
    /// accepted by the server. Client-stored identity is a convenience cache
    /// only; a rejection is fatal for the session, never retryable.
    ///
    /// The wire contract carries no structured error codes, so detection is
    /// by message class.
    pub fn invalidates_session(&self) -> bool {
        match self {
            Self::Business { message } => {
                let lowered = message.to_lowercase();
                (lowered.contains("company") || lowered.contains("tenant"))
                    && (lowered.contains("not found")
                        || lowered.contains("unknown")
                        || lowered.contains("suspended"))
            }
            _ => false,
        }
    }
}

//! REST transport: URL templating, envelope decoding, error mapping
//!
//! Policy-free by design: every failure surfaces as a typed `ApiError` and
//! the caller decides fallback. No retries. Tenant-scoped paths fail fast
//! with `MissingTenant` before any I/O is issued.

use super::dto::Envelope;
use crate::config::ClientConfig;
use crate::contract::ApiError;
use crate::domain::cache::Resource;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// HTTP transport for the console API
pub struct RestTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl RestTransport {
    /// Build a transport from configuration. The request timeout turns a
    /// hung request into `Network` instead of an indefinite `Loading` page.
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        // A trailing slash keeps Url::join from eating the last path segment
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;
        Ok(Self { http, base_url })
    }

    /// Tenant-scoped request expecting a data payload:
    /// `{base}/companies/{tenant}/{resource}[/{suffix}]`
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        tenant_id: &str,
        resource: Resource,
        suffix: Option<&str>,
        query: &[(String, String)],
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let url = self.scoped_url(tenant_id, resource, suffix)?;
        let data = self.execute::<T>(method, url, query, body).await?;
        data.ok_or_else(|| ApiError::InvalidEnvelope {
            details: "success without data".to_string(),
        })
    }

    /// Tenant-scoped request where the server legitimately answers
    /// `success: true` with no data (deletes, revokes).
    pub async fn request_unit(
        &self,
        method: Method,
        tenant_id: &str,
        resource: Resource,
        suffix: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<(), ApiError> {
        let url = self.scoped_url(tenant_id, resource, suffix)?;
        self.execute::<serde_json::Value>(method, url, &[], body)
            .await?;
        Ok(())
    }

    /// Unscoped request for the auth endpoints
    pub async fn request_unscoped<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let url = self.join(path)?;
        let data = self.execute::<T>(method, url, &[], body).await?;
        data.ok_or_else(|| ApiError::InvalidEnvelope {
            details: "success without data".to_string(),
        })
    }

    fn scoped_url(
        &self,
        tenant_id: &str,
        resource: Resource,
        suffix: Option<&str>,
    ) -> Result<Url, ApiError> {
        if tenant_id.trim().is_empty() {
            return Err(ApiError::MissingTenant);
        }
        let mut path = format!("companies/{}/{}", tenant_id, resource.as_str());
        if let Some(suffix) = suffix {
            path.push('/');
            path.push_str(suffix);
        }
        self.join(&path)
    }

    fn join(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::Network {
            message: format!("invalid request url '{}': {}", path, e),
        })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        query: &[(String, String)],
        body: Option<serde_json::Value>,
    ) -> Result<Option<T>, ApiError> {
        tracing::debug!(%method, %url, "console api request");

        let mut request = self.http.request(method, url.clone());
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| ApiError::Network {
            message: e.to_string(),
        })?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| ApiError::Network {
            message: e.to_string(),
        })?;

        let outcome = decode_envelope::<T>(status, &bytes);
        if let Err(e) = &outcome {
            tracing::warn!(%url, status = status.as_u16(), error = %e, "console api request failed");
        }
        outcome
    }
}

/// Map (status, body) to a typed outcome.
///
/// A well-formed `success: false` envelope beats the HTTP status - the
/// server-supplied message is strictly more specific. Bodies that do not
/// parse fall back to `HttpStatus` on non-2xx and `InvalidEnvelope` on 2xx.
fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    bytes: &[u8],
) -> Result<Option<T>, ApiError> {
    let envelope: Envelope<T> = match serde_json::from_slice(bytes) {
        Ok(envelope) => envelope,
        Err(e) => {
            if !status.is_success() {
                return Err(ApiError::HttpStatus {
                    status: status.as_u16(),
                });
            }
            return Err(ApiError::InvalidEnvelope {
                details: e.to_string(),
            });
        }
    };

    match envelope.success {
        Some(true) => {
            if !status.is_success() {
                return Err(ApiError::HttpStatus {
                    status: status.as_u16(),
                });
            }
            Ok(envelope.data)
        }
        Some(false) => match envelope.error.or(envelope.message) {
            Some(message) => Err(ApiError::Business { message }),
            None => Err(ApiError::InvalidEnvelope {
                details: "success=false without an error message".to_string(),
            }),
        },
        None => {
            if !status.is_success() {
                Err(ApiError::HttpStatus {
                    status: status.as_u16(),
                })
            } else {
                Err(ApiError::InvalidEnvelope {
                    details: "missing success field".to_string(),
                })
            }
        }
    }
}

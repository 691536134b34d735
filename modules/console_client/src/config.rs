//! Configuration for the console client

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration load failure
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),
}

/// Console client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base API URL; every request path is joined onto this
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout; a hung request surfaces as a network error
    #[serde(with = "humantime_serde", default = "default_request_timeout")]
    pub request_timeout: Duration,

    /// Where the current session is persisted between reloads
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout: default_request_timeout(),
            session_file: default_session_file(),
        }
    }
}

impl ClientConfig {
    /// Load configuration: defaults, then an optional YAML file, then
    /// `CONSOLE_`-prefixed environment variables. Env wins.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(ClientConfig::default()));
        if let Some(file) = file {
            figment = figment.merge(Yaml::file(file));
        }
        let config = figment.merge(Env::prefixed("CONSOLE_")).extract()?;
        Ok(config)
    }
}

fn default_base_url() -> String {
    // Development backend; deployments override via config or CONSOLE_BASE_URL
    "http://localhost:8000/api/v1".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_session_file() -> PathBuf {
    PathBuf::from(".console/session.json")
}

//! Data API connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "http://localhost:4050".to_string()
}

/// Per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Root URL of the data API; sections are fetched from
    /// `{base_url}/api/data/section/{name}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for each section fetch. `0` leaves requests unbounded.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceConfig {
    /// Check that `base_url` is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty, unparsable, or
    /// non-http(s) base URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            field: "source.base_url".to_string(),
            reason,
        };

        if self.base_url.trim().is_empty() {
            return Err(invalid("must not be empty".to_string()));
        }
        let url = url::Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }

    /// `base_url` without trailing slashes.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

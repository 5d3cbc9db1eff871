//! Client configuration.

use serde::{Deserialize, Serialize};

/// Environment variable selecting the service base URL.
pub const API_URL_ENV: &str = "REVIEWER_API_URL";

/// Base URL used when `REVIEWER_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Configuration for [`crate::ReviewClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the analysis service, without a trailing path.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Creates a configuration from `REVIEWER_API_URL`, falling back to the
    /// compiled default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self { base_url }
    }

    /// Full URL of the analysis endpoint.
    pub fn analyze_url(&self) -> String {
        format!("{}/api/analyze", self.base_url.trim_end_matches('/'))
    }

    /// Full URL of the health endpoint.
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.analyze_url(), "http://localhost:8000/api/analyze");
        assert_eq!(config.health_url(), "http://localhost:8000/health");
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let config = ClientConfig::new("http://reviews.internal:9000/");
        assert_eq!(
            config.analyze_url(),
            "http://reviews.internal:9000/api/analyze"
        );
    }
}

//! The analysis service client.

use reviewer_models::{AnalysisRequest, AnalysisResult, ServiceHealth};
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Client for the remote code-review service.
#[derive(Debug, Clone)]
pub struct ReviewClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ReviewClient {
    /// Creates a client with the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Creates a client configured from the environment.
    ///
    /// Uses `REVIEWER_API_URL`, falling back to the compiled default.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submits a snippet for analysis.
    ///
    /// Exactly one POST is made per call. Any failure mode (transport,
    /// non-2xx status, unparseable body) becomes a [`ClientError`]; absent
    /// fields in a well-formed body are defaulted by the model layer and
    /// are not an error.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        trace!(
            "submitting {} bytes of {} for analysis",
            request.code.len(),
            request.language
        );

        let response = self
            .client
            .post(self.config.analyze_url())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let result: AnalysisResult = serde_json::from_str(&body)?;

        debug!(
            "analysis settled: {} issues reported",
            result.metrics.total_issues
        );

        Ok(result)
    }

    /// Checks whether the service is up.
    pub async fn health(&self) -> Result<ServiceHealth> {
        let response = self.client.get(self.config.health_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let health: ServiceHealth = serde_json::from_str(&body)?;
        Ok(health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewer_models::Language;

    #[test]
    fn test_client_keeps_config() {
        let client = ReviewClient::new(ClientConfig::new("http://reviews.internal:9000"));
        assert_eq!(client.config().base_url, "http://reviews.internal:9000");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_a_transport_error() {
        // Nothing listens on port 1.
        let client = ReviewClient::new(ClientConfig::new("http://127.0.0.1:1"));
        let request = AnalysisRequest::new("print(1)", Language::Python);

        let err = client.analyze(&request).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(
            err.user_message(),
            "Failed to analyze code. Make sure the backend is running."
        );
    }
}

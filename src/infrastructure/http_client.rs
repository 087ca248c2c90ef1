use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::DomainError;

/// Default bound on a single outbound provider call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    /// POST a JSON body and decode the JSON response.
    ///
    /// Non-2xx answers become [`DomainError::ProviderRejected`] carrying the
    /// raw upstream body. Connect, timeout and read failures become
    /// [`DomainError::Transport`].
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, DomainError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|e| {
                warn!(status = status.as_u16(), error = %e, "Failed to read provider error body");
                String::new()
            });
            return Err(DomainError::provider_rejected(
                "http",
                status.as_u16(),
                error_body,
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DomainError::transport(format!("Failed to read response: {}", e)))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| DomainError::provider("http", format!("Failed to parse response: {}", e)))
    }
}

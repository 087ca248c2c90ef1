//! OpenAI-compatible embedding provider implementation

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::embedding::{Embedding, EmbeddingProvider, EmbeddingRequest};
use crate::domain::DomainError;
use crate::infrastructure::http_client::HttpClientTrait;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// OpenAI embedding provider
#[derive(Debug)]
pub struct OpenAiEmbeddingProvider<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    base_url: String,
}

impl<C: HttpClientTrait> OpenAiEmbeddingProvider<C> {
    /// Create a new OpenAI embedding provider
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_OPENAI_BASE_URL)
    }

    /// Create a new provider with custom base URL
    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let auth_header = format!("Bearer {}", api_key.into());
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            auth_header,
            base_url,
        }
    }

    fn embeddings_url(&self) -> String {
        format!("{}/v1/embeddings", self.base_url)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn build_request(&self, request: &EmbeddingRequest) -> serde_json::Value {
        serde_json::json!({
            "input": request.input(),
            "model": request.model(),
        })
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<Embedding, DomainError> {
        let response: OpenAiEmbeddingResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("openai", format!("Failed to parse embedding response: {}", e))
        })?;

        response
            .data
            .into_iter()
            .next()
            .map(|d| Embedding::new(d.embedding))
            .ok_or_else(|| DomainError::provider("openai", "Embedding response contained no data"))
    }
}

#[async_trait]
impl<C: HttpClientTrait> EmbeddingProvider for OpenAiEmbeddingProvider<C> {
    async fn embed(&self, request: EmbeddingRequest) -> Result<Embedding, DomainError> {
        let url = self.embeddings_url();
        let body = self.build_request(&request);

        let response = self
            .client
            .post_json(&url, self.headers(), &body)
            .await
            .map_err(|e| e.with_provider(self.provider_name()))?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn default_model(&self) -> &'static str {
        DEFAULT_EMBEDDING_MODEL
    }
}

// OpenAI API types for embeddings

#[derive(Debug, Deserialize)]
struct OpenAiEmbeddingResponse {
    data: Vec<OpenAiEmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct OpenAiEmbeddingData {
    embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http_client::HttpClient;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_mock_response(vector: &[f32]) -> serde_json::Value {
        serde_json::json!({
            "object": "list",
            "model": "text-embedding-3-small",
            "data": [{ "object": "embedding", "index": 0, "embedding": vector }],
            "usage": { "prompt_tokens": 3, "total_tokens": 3 }
        })
    }

    fn provider_for(server: &MockServer) -> OpenAiEmbeddingProvider<HttpClient> {
        OpenAiEmbeddingProvider::with_base_url(HttpClient::new().unwrap(), "test-api-key", server.uri())
    }

    #[tokio::test]
    async fn test_embed_single_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/embeddings"))
            .and(header("Authorization", "Bearer test-api-key"))
            .and(body_json(serde_json::json!({
                "input": "Hello world",
                "model": "text-embedding-3-small"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(create_mock_response(&[0.1, 0.2, 0.3])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let request = EmbeddingRequest::new("text-embedding-3-small", "Hello world");
        let embedding = provider.embed(request).await.unwrap();

        assert_eq!(embedding.vector(), &[0.1, 0.2, 0.3]);
    }

    #[tokio::test]
    async fn test_embed_rejected_by_provider() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("Rate limit exceeded"))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let err = provider
            .embed(EmbeddingRequest::new("text-embedding-3-small", "Hello"))
            .await
            .unwrap_err();

        match err {
            DomainError::ProviderRejected {
                provider,
                status,
                body,
            } => {
                assert_eq!(provider, "openai");
                assert_eq!(status, 429);
                assert_eq!(body, "Rate limit exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_embed_empty_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
            )
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let err = provider
            .embed(EmbeddingRequest::new("text-embedding-3-small", "Hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Provider { .. }));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let provider = OpenAiEmbeddingProvider::with_base_url(
            HttpClient::new().unwrap(),
            "test-key",
            "http://localhost:8080/",
        );

        assert_eq!(provider.embeddings_url(), "http://localhost:8080/v1/embeddings");
    }

    #[test]
    fn test_provider_info() {
        let provider = OpenAiEmbeddingProvider::new(HttpClient::new().unwrap(), "test-key");

        assert_eq!(provider.provider_name(), "openai");
        assert_eq!(provider.default_model(), "text-embedding-3-small");
    }
}

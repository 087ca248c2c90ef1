use std::sync::Arc;

use tracing::info;

use super::{DirectSimilarityProvider, EmbeddingCosineProvider};
use crate::config::{ProviderConfig, ProviderKind};
use crate::domain::{DomainError, SimilarityProvider};
use crate::infrastructure::embedding::OpenAiEmbeddingProvider;
use crate::infrastructure::http_client::HttpClient;

/// Factory for creating the configured similarity provider
#[derive(Debug)]
pub struct SimilarityProviderFactory;

impl SimilarityProviderFactory {
    /// Create a similarity provider from configuration
    pub fn create(config: &ProviderConfig) -> Result<Arc<dyn SimilarityProvider>, DomainError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| DomainError::configuration("Provider API key is not set"))?;
        let http_client = HttpClient::with_timeout(config.timeout())?;

        let provider: Arc<dyn SimilarityProvider> = match config.kind {
            ProviderKind::Direct => {
                let mut provider = match &config.base_url {
                    Some(base_url) => {
                        DirectSimilarityProvider::with_base_url(http_client, api_key, base_url)
                    }
                    None => DirectSimilarityProvider::new(http_client, api_key),
                };

                if let Some(model) = &config.model {
                    provider = provider.with_model(model);
                }

                Arc::new(provider)
            }

            ProviderKind::Embedding => {
                let embedder = match &config.base_url {
                    Some(base_url) => {
                        OpenAiEmbeddingProvider::with_base_url(http_client, api_key, base_url)
                    }
                    None => OpenAiEmbeddingProvider::new(http_client, api_key),
                };

                let mut provider = EmbeddingCosineProvider::new(embedder);

                if let Some(model) = &config.model {
                    provider = provider.with_model(model);
                }

                Arc::new(provider)
            }
        };

        info!(
            provider = provider.provider_name(),
            kind = ?config.kind,
            timeout_secs = config.timeout_secs,
            "Similarity provider configured"
        );

        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(kind: ProviderKind, base_url: Option<String>) -> ProviderConfig {
        ProviderConfig {
            kind,
            api_key: Some("test-key".to_string()),
            base_url,
            ..ProviderConfig::default()
        }
    }

    #[test]
    fn test_create_requires_api_key() {
        let config = ProviderConfig::default();
        let err = SimilarityProviderFactory::create(&config).unwrap_err();

        assert!(matches!(err, DomainError::Configuration { .. }));
    }

    #[test]
    fn test_create_selects_variant() {
        let direct = SimilarityProviderFactory::create(&config(ProviderKind::Direct, None)).unwrap();
        assert_eq!(direct.provider_name(), "huggingface");

        let embedding =
            SimilarityProviderFactory::create(&config(ProviderKind::Embedding, None)).unwrap();
        assert_eq!(embedding.provider_name(), "openai");
    }

    #[tokio::test]
    async fn test_created_embedding_provider_uses_base_url_and_model() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/embeddings"))
            .and(wiremock::matchers::body_partial_json(
                serde_json::json!({ "model": "custom-embedder" }),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "embedding": [0.6, 0.8] }]
            })))
            .expect(2)
            .mount(&server)
            .await;

        let mut config = config(ProviderKind::Embedding, Some(server.uri()));
        config.model = Some("custom-embedder".to_string());

        let provider = SimilarityProviderFactory::create(&config).unwrap();
        let score = provider.similarity("guess", "answer").await.unwrap();

        assert!((score - 1.0).abs() < 1e-6);
    }
}

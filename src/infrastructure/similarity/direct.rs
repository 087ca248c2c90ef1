//! Sentence-similarity provider (Hugging Face inference API)

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{DomainError, SimilarityProvider};
use crate::infrastructure::http_client::HttpClientTrait;

pub const DEFAULT_HUGGINGFACE_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_SIMILARITY_MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Provider that scores the pair remotely and returns one score per
/// comparison sentence. Only one comparison sentence is ever sent.
#[derive(Debug)]
pub struct DirectSimilarityProvider<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    base_url: String,
    model: String,
}

impl<C: HttpClientTrait> DirectSimilarityProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_HUGGINGFACE_BASE_URL)
    }

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
            model: DEFAULT_SIMILARITY_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    // wait_for_model makes the provider hold the request while a cold model loads
    fn similarity_url(&self) -> String {
        format!("{}/models/{}?wait_for_model=true", self.base_url, self.model)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn build_request(&self, guess: &str, answer: &str) -> serde_json::Value {
        serde_json::json!({
            "inputs": {
                "source_sentence": guess,
                "sentences": [answer],
            }
        })
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<f64, DomainError> {
        let scores: Vec<f64> = serde_json::from_value(json).map_err(|e| {
            DomainError::provider(
                self.provider_name(),
                format!("Failed to parse similarity response: {}", e),
            )
        })?;

        scores.first().copied().ok_or_else(|| {
            DomainError::provider(self.provider_name(), "Similarity response contained no scores")
        })
    }
}

#[async_trait]
impl<C: HttpClientTrait> SimilarityProvider for DirectSimilarityProvider<C> {
    async fn similarity(&self, guess: &str, answer: &str) -> Result<f64, DomainError> {
        let url = self.similarity_url();
        let body = self.build_request(guess, answer);

        debug!(model = %self.model, "Requesting sentence similarity");

        let response = self
            .client
            .post_json(&url, self.headers(), &body)
            .await
            .map_err(|e| e.with_provider(self.provider_name()))?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "huggingface"
    }
}

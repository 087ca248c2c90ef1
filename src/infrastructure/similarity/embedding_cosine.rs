//! Embed-then-compare similarity provider

use async_trait::async_trait;
use tracing::debug;

use crate::domain::embedding::{Embedding, EmbeddingProvider, EmbeddingRequest};
use crate::domain::{DomainError, SimilarityProvider};

/// Fetches one embedding per string and compares them with cosine similarity.
#[derive(Debug)]
pub struct EmbeddingCosineProvider<E: EmbeddingProvider> {
    embedder: E,
    model: String,
}

impl<E: EmbeddingProvider> EmbeddingCosineProvider<E> {
    /// Create a provider using the embedder's default model
    pub fn new(embedder: E) -> Self {
        let model = embedder.default_model().to_string();
        Self { embedder, model }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn embed(&self, text: &str) -> Result<Embedding, DomainError> {
        self.embedder
            .embed(EmbeddingRequest::new(&self.model, text))
            .await
    }
}

#[async_trait]
impl<E: EmbeddingProvider> SimilarityProvider for EmbeddingCosineProvider<E> {
    async fn similarity(&self, guess: &str, answer: &str) -> Result<f64, DomainError> {
        // The two fetches are independent; both must finish before comparing.
        let (guess_embedding, answer_embedding) =
            futures::try_join!(self.embed(guess), self.embed(answer))?;

        debug!(
            model = %self.model,
            dimensions = guess_embedding.dimensions(),
            "Comparing embeddings"
        );

        guess_embedding.cosine_similarity(&answer_embedding)
    }

    fn provider_name(&self) -> &'static str {
        self.embedder.provider_name()
    }
}

//! Embedding provider trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use super::{Embedding, EmbeddingRequest};
use crate::domain::DomainError;

/// Trait for embedding providers (OpenAI-compatible endpoints, etc.)
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Generate the embedding for a single text
    async fn embed(&self, request: EmbeddingRequest) -> Result<Embedding, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Get the default model for this provider
    fn default_model(&self) -> &'static str;
}

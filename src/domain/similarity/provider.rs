//! Similarity provider trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Scores how close a guess is to an answer.
///
/// Implemented either by a provider that computes sentence similarity
/// remotely or by fetching two embeddings and comparing them locally.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SimilarityProvider: Send + Sync + Debug {
    /// Score `guess` against `answer`
    async fn similarity(&self, guess: &str, answer: &str) -> Result<f64, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

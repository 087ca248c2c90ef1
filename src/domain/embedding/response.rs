//! Embedding response types

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::domain::similarity::cosine_similarity;

/// A single embedding vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Embedding(Vec<f32>);

impl Embedding {
    /// Create a new embedding
    pub fn new(vector: Vec<f32>) -> Self {
        Self(vector)
    }

    /// Get the embedding vector
    pub fn vector(&self) -> &[f32] {
        &self.0
    }

    /// Get the embedding dimensions
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// Calculate cosine similarity with another embedding
    pub fn cosine_similarity(&self, other: &Embedding) -> Result<f64, DomainError> {
        cosine_similarity(&self.0, &other.0)
    }
}

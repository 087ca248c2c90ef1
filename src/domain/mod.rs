//! Domain layer - Core types, traits and scoring logic

pub mod embedding;
pub mod error;
pub mod similarity;

pub use embedding::{Embedding, EmbeddingProvider, EmbeddingRequest};
pub use error::DomainError;
pub use similarity::{
    cosine_similarity, SimilarityProvider, SimilarityRequest, SimilarityResult,
};

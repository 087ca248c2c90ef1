//! Similarity scoring domain models and traits

mod cosine;
mod provider;
mod request;
mod result;

pub use cosine::cosine_similarity;
pub use provider::SimilarityProvider;
pub use request::{SimilarityRequest, MISSING_FIELDS_MESSAGE};
pub use result::SimilarityResult;

#[cfg(test)]
pub use provider::MockSimilarityProvider;

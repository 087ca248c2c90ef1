//! Similarity result types

use serde::{Deserialize, Serialize};

/// Score returned to the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub similarity: f64,
}

impl SimilarityResult {
    pub fn new(similarity: f64) -> Self {
        Self { similarity }
    }
}

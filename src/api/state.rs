//! Application state for shared services

use std::sync::Arc;

use crate::domain::SimilarityProvider;

/// Application state shared across handlers.
///
/// Holds no per-request data; every request runs independently against
/// the same provider.
#[derive(Clone)]
pub struct AppState {
    pub similarity_provider: Arc<dyn SimilarityProvider>,
}

impl AppState {
    pub fn new(similarity_provider: Arc<dyn SimilarityProvider>) -> Self {
        Self {
            similarity_provider,
        }
    }
}

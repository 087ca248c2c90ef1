//! Similarity endpoint handler

use axum::extract::State;
use tracing::{debug, error, info, warn};

use crate::api::middleware::truncate_for_log;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{DomainError, SimilarityRequest, SimilarityResult};

const MAX_LOGGED_DETAILS: usize = 512;

/// POST /api/embedding
pub async fn score_similarity(
    State(state): State<AppState>,
    Json(request): Json<SimilarityRequest>,
) -> Result<Json<SimilarityResult>, ApiError> {
    let (guess, answer) = request.validate().map_err(|e| {
        debug!(error = %e, "Rejecting similarity request");
        ApiError::from(e)
    })?;

    let provider = state.similarity_provider.provider_name();

    let similarity = state
        .similarity_provider
        .similarity(guess, answer)
        .await
        .map_err(|e| {
            log_failure(provider, &e);
            ApiError::from(e)
        })?;

    info!(provider, similarity, "Similarity score computed");

    Ok(Json(SimilarityResult::new(similarity)))
}

fn log_failure(provider: &str, err: &DomainError) {
    match err {
        DomainError::ProviderRejected { status, body, .. } => warn!(
            provider,
            status = *status,
            details = %truncate_for_log(body, MAX_LOGGED_DETAILS),
            "Provider rejected similarity request"
        ),
        other => error!(provider, error = %other, "Server error while scoring similarity"),
    }
}

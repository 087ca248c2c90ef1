//! Error responses returned to callers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Message used for every failure that must not leak internals
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Message used when the provider rejects a call
pub const UPSTREAM_ERROR_MESSAGE: &str = "Failed to fetch embedding";

/// JSON error body: `{"error": ..., "details"?: ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: message.into(),
                details: None,
            },
        }
    }

    /// Attach diagnostic details
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.response.details = Some(details.into());
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Generic internal error; carries no detail
    pub fn server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
    }

    /// Provider rejection, mirroring the upstream status
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        let status = StatusCode::from_u16(status)
            .ok()
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        Self::new(status, UPSTREAM_ERROR_MESSAGE).with_details(body)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::ProviderRejected { status, body, .. } => Self::upstream(status, body),
            DomainError::Provider { .. }
            | DomainError::Transport { .. }
            | DomainError::InvalidVector { .. }
            | DomainError::Configuration { .. } => Self::server_error(),
        }
    }
}

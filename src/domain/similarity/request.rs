//! Similarity request types

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Message returned when either side of the comparison is absent
pub const MISSING_FIELDS_MESSAGE: &str = "Missing guess or answer";

/// Inbound request to score a guess against an answer
///
/// Both fields are optional at the wire level so that absent or `null`
/// values reach [`SimilarityRequest::validate`] instead of failing
/// deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimilarityRequest {
    #[serde(default)]
    pub guess: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl SimilarityRequest {
    /// Create a request with both sides present
    pub fn new(guess: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            guess: Some(guess.into()),
            answer: Some(answer.into()),
        }
    }

    /// Check that both strings are present and non-empty.
    ///
    /// The strings are handed back untouched: no trimming, case folding or
    /// length limits.
    pub fn validate(&self) -> Result<(&str, &str), DomainError> {
        match (self.guess.as_deref(), self.answer.as_deref()) {
            (Some(guess), Some(answer)) if !guess.is_empty() && !answer.is_empty() => {
                Ok((guess, answer))
            }
            _ => Err(DomainError::validation(MISSING_FIELDS_MESSAGE)),
        }
    }
}

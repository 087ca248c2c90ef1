//! Local cosine similarity

use crate::domain::DomainError;

/// Calculate cosine similarity between two vectors.
///
/// Accumulates in `f64` regardless of the `f32` storage. Vectors that cannot
/// be compared (different lengths, empty, non-finite components, or zero
/// norm) are rejected instead of producing NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, DomainError> {
    if a.len() != b.len() {
        return Err(DomainError::invalid_vector(format!(
            "dimension mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    if a.is_empty() {
        return Err(DomainError::invalid_vector("vectors are empty"));
    }

    if a.iter().chain(b).any(|x| !x.is_finite()) {
        return Err(DomainError::invalid_vector("non-finite component"));
    }

    let (dot, norm_a, norm_b) = a.iter().zip(b).fold(
        (0.0f64, 0.0f64, 0.0f64),
        |(dot, na, nb), (&x, &y)| {
            let (x, y) = (f64::from(x), f64::from(y));
            (dot + x * y, na + x * x, nb + y * y)
        },
    );

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(DomainError::invalid_vector("zero-norm vector"));
    }

    let similarity = dot / (norm_a.sqrt() * norm_b.sqrt());
    if !similarity.is_finite() {
        return Err(DomainError::invalid_vector("similarity is not finite"));
    }

    Ok(similarity)
}

//! Shared vector scoring utilities.

use crate::errors::{CorticaError, CorticaResult};

/// Added to the denominator so all-zero vectors score 0.0 instead of
/// dividing by zero.
pub const NORM_EPSILON: f64 = 1e-8;

/// Cosine similarity between two equal-length vectors: `dot / (|a|·|b| + ε)`.
///
/// Fails with `DimensionMismatch` when the lengths differ rather than
/// silently truncating to the shorter vector. Result lies in [-1, 1].
pub fn cosine(a: &[f64], b: &[f64]) -> CorticaResult<f64> {
    if a.len() != b.len() {
        return Err(CorticaError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    Ok(dot / (norm_a.sqrt() * norm_b.sqrt() + NORM_EPSILON))
}

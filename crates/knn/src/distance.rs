//! Euclidean distance computation.

use crate::error::KnnError;

/// Returns the Euclidean distance between two attribute vectors.
///
/// ```text
/// d(a, b) = sqrt(Σᵢ (aᵢ − bᵢ)²)
/// ```
///
/// # Errors
///
/// Returns [`KnnError::DimensionMismatch`] if the vectors differ in length,
/// with `expected = a.len()`.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64, KnnError> {
    if a.len() != b.len() {
        return Err(KnnError::DimensionMismatch {
            expected: a.len(),
            got: b.len(),
        });
    }
    Ok(sq_euclidean(a, b).sqrt())
}

/// Squared Euclidean distance, dispatching to specialised 1D and 2D loops.
///
/// # Panics
///
/// Debug-asserts that `a.len() == b.len()`.
pub(crate) fn sq_euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    match a.len() {
        1 => sq_dist_1d(a[0], b[0]),
        2 => sq_dist_2d(a, b),
        _ => sq_dist_nd(a, b),
    }
}

#[inline]
fn sq_dist_1d(a: f64, b: f64) -> f64 {
    let d = a - b;
    d * d
}

#[inline]
fn sq_dist_2d(a: &[f64], b: &[f64]) -> f64 {
    let d0 = a[0] - b[0];
    let d1 = a[1] - b[1];
    d0 * d0 + d1 * d1
}

#[inline]
fn sq_dist_nd(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

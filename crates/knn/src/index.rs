//! Distance ranking of a reference set against one query.

use std::cmp::Ordering;

use crate::distance::sq_euclidean;
use crate::error::KnnError;
use crate::point::DataPoint;

/// A reference point paired with its distance to a query.
///
/// Borrowed from the reference set; lives only as long as one query's
/// ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborDistance<'a> {
    /// Position of the point in the reference set.
    index: usize,
    point: &'a DataPoint,
    /// Euclidean distance to the query (non-negative).
    distance: f64,
}

impl<'a> NeighborDistance<'a> {
    /// Returns the position of the point in the reference set.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the reference point.
    pub fn point(&self) -> &'a DataPoint {
        self.point
    }

    /// Returns the Euclidean distance to the query.
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// Ranks every point of `reference` by Euclidean distance to `query`.
///
/// The result has exactly `reference.len()` entries in ascending distance
/// order. Equal distances keep reference-set order, which decides who votes
/// when several points tie at the k-th position.
///
/// Brute force: O(n·d) distances plus an O(n log n) stable sort.
///
/// # Errors
///
/// - [`KnnError::EmptyReferenceSet`] if `reference` is empty.
/// - [`KnnError::DimensionMismatch`] if any reference point's attribute
///   count differs from the query's.
pub fn rank_neighbors<'a>(
    reference: &'a [DataPoint],
    query: &DataPoint,
) -> Result<Vec<NeighborDistance<'a>>, KnnError> {
    if reference.is_empty() {
        return Err(KnnError::EmptyReferenceSet);
    }

    let target = query.attributes();
    let mut ranked = Vec::with_capacity(reference.len());
    for (index, point) in reference.iter().enumerate() {
        if point.dim() != target.len() {
            return Err(KnnError::DimensionMismatch {
                expected: point.dim(),
                got: target.len(),
            });
        }
        ranked.push(NeighborDistance {
            index,
            point,
            distance: sq_euclidean(point.attributes(), target).sqrt(),
        });
    }

    // `sort_by` is stable. NaN (e.g. from inf - inf) ranks after every number
    // whatever its sign bit, and NaNs keep reference order among themselves
    ranked.sort_by(|a, b| {
        a.distance.is_nan().cmp(&b.distance.is_nan()).then_with(|| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        })
    });
    Ok(ranked)
}

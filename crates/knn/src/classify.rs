//! Single-query classification.

use crate::config::check_k;
use crate::error::KnnError;
use crate::index::{NeighborDistance, rank_neighbors};
use crate::point::{DataPoint, Label};
use crate::vote::VoteTally;

/// Outcome of classifying one query: the winning label and the neighbors
/// that voted for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction<'a> {
    label: Label,
    /// The k nearest neighbors, ascending by distance.
    neighbors: Vec<NeighborDistance<'a>>,
}

impl<'a> Prediction<'a> {
    /// Returns the predicted class label.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Returns the k nearest neighbors that voted, ascending by distance.
    pub fn neighbors(&self) -> &[NeighborDistance<'a>] {
        &self.neighbors
    }

    /// Returns the distances of the voting neighbors, ascending.
    pub fn distances(&self) -> Vec<f64> {
        self.neighbors.iter().map(|n| n.distance()).collect()
    }
}

/// Predicts the class of `query` by majority vote of its `k` nearest
/// reference points.
///
/// # Algorithm
///
/// 1. Rank every reference point by Euclidean distance ([`rank_neighbors`]).
/// 2. Keep the first `k` entries.
/// 3. Tally their labels; the label with the strictly greatest count wins,
///    and among tied labels the one that appeared first in the ranking wins.
///
/// # Errors
///
/// - [`KnnError::EmptyReferenceSet`] if `reference` is empty.
/// - [`KnnError::InvalidK`] if `k == 0` or `k > reference.len()`.
/// - [`KnnError::DimensionMismatch`] if the query's attribute count differs
///   from the reference set's.
///
/// # Example
///
/// ```
/// use kvote_knn::{DataPoint, classify};
///
/// let reference = vec![
///     DataPoint::new(vec![0.0, 0.0], 0),
///     DataPoint::new(vec![10.0, 10.0], 1),
/// ];
/// let query = DataPoint::new(vec![1.0, 1.0], 0);
///
/// let prediction = classify(&reference, &query, 1).unwrap();
/// assert_eq!(prediction.label(), 0);
/// assert!((prediction.neighbors()[0].distance() - 2f64.sqrt()).abs() < 1e-12);
/// ```
pub fn classify<'a>(
    reference: &'a [DataPoint],
    query: &DataPoint,
    k: usize,
) -> Result<Prediction<'a>, KnnError> {
    check_k(k, reference.len())?;

    let mut neighbors = rank_neighbors(reference, query)?;
    neighbors.truncate(k);

    let tally: VoteTally = neighbors.iter().map(|n| n.point().label()).collect();
    // check_k guarantees k >= 1 neighbors, hence at least one vote
    let label = tally.winner().ok_or_else(|| KnnError::InvalidK {
        k,
        n_reference: reference.len(),
    })?;

    Ok(Prediction { label, neighbors })
}

//! Output types for batch evaluation.

use crate::point::Label;

/// Per-query outcome of a batch evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    true_label: Label,
    predicted_label: Label,
    /// Distances of the k nearest neighbors (sorted ascending).
    distances: Vec<f64>,
}

impl ClassificationResult {
    /// Creates a new `ClassificationResult`.
    pub fn new(true_label: Label, predicted_label: Label, distances: Vec<f64>) -> Self {
        Self {
            true_label,
            predicted_label,
            distances,
        }
    }

    /// Returns the label the query was loaded with.
    pub fn true_label(&self) -> Label {
        self.true_label
    }

    /// Returns the label chosen by the vote.
    pub fn predicted_label(&self) -> Label {
        self.predicted_label
    }

    /// Returns the k nearest distances, ascending.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Returns `true` when the prediction matches the true label exactly.
    pub fn is_correct(&self) -> bool {
        self.true_label == self.predicted_label
    }
}

/// Correct-prediction count over a batch of queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationSummary {
    correct: usize,
    total: usize,
}

impl EvaluationSummary {
    /// Folds one result into the running counts.
    pub fn record(&mut self, result: &ClassificationResult) {
        self.total += 1;
        if result.is_correct() {
            self.correct += 1;
        }
    }

    /// Combines two partial summaries.
    pub fn merge(self, other: Self) -> Self {
        Self {
            correct: self.correct + other.correct,
            total: self.total + other.total,
        }
    }

    /// Number of correct predictions.
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Number of queries evaluated.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Fraction of correct predictions in `[0, 1]`.
    ///
    /// Returns `None` for an empty summary rather than dividing by zero.
    pub fn accuracy(&self) -> Option<f64> {
        (self.total > 0).then(|| self.correct as f64 / self.total as f64)
    }
}

impl From<&ClassificationResult> for EvaluationSummary {
    fn from(result: &ClassificationResult) -> Self {
        let mut summary = Self::default();
        summary.record(result);
        summary
    }
}

impl<'a> FromIterator<&'a ClassificationResult> for EvaluationSummary {
    fn from_iter<I: IntoIterator<Item = &'a ClassificationResult>>(iter: I) -> Self {
        let mut summary = Self::default();
        for result in iter {
            summary.record(result);
        }
        summary
    }
}

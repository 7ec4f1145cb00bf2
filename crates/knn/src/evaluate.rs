//! Batch evaluation of labeled queries against a reference set.

use rayon::prelude::*;
use tracing::debug;

use crate::classify::classify;
use crate::config::KnnConfig;
use crate::error::KnnError;
use crate::point::DataPoint;
use crate::result::{ClassificationResult, EvaluationSummary};

/// Per-query results plus the aggregate accuracy of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// One result per query, in query order.
    results: Vec<ClassificationResult>,
    summary: EvaluationSummary,
}

impl Evaluation {
    /// Returns the per-query results in query order.
    pub fn results(&self) -> &[ClassificationResult] {
        &self.results
    }

    /// Returns the aggregate counts.
    pub fn summary(&self) -> &EvaluationSummary {
        &self.summary
    }

    /// Returns the fraction of correctly classified queries.
    ///
    /// Always defined: evaluation rejects an empty query set.
    pub fn accuracy(&self) -> f64 {
        self.summary.accuracy().unwrap_or(0.0)
    }
}

/// Checks everything that can fail before any query is classified.
fn validate_inputs(
    reference: &[DataPoint],
    queries: &[DataPoint],
    config: &KnnConfig,
) -> Result<(), KnnError> {
    config.validate_against(reference.len())?;
    if queries.is_empty() {
        return Err(KnnError::EmptyQuerySet);
    }

    // First mismatching query in input order, regardless of parallelism
    let dim = reference[0].dim();
    if let Some(bad) = queries.iter().find(|q| q.dim() != dim) {
        return Err(KnnError::DimensionMismatch {
            expected: dim,
            got: bad.dim(),
        });
    }
    Ok(())
}

fn evaluate_one(
    reference: &[DataPoint],
    query: &DataPoint,
    k: usize,
) -> Result<ClassificationResult, KnnError> {
    let prediction = classify(reference, query, k)?;
    Ok(ClassificationResult::new(
        query.label(),
        prediction.label(),
        prediction.distances(),
    ))
}

/// Classifies every query against `reference` and scores the predictions.
///
/// Each query's label is its true label; a prediction counts as correct on
/// exact label equality. Results come back in query order whether or not
/// [`KnnConfig::parallel`] is set, and both modes produce identical output.
///
/// # Errors
///
/// - [`KnnError::EmptyReferenceSet`] or [`KnnError::InvalidK`] before any
///   query is classified.
/// - [`KnnError::EmptyQuerySet`] if `queries` is empty.
/// - [`KnnError::DimensionMismatch`] for the first query (or reference point)
///   whose attribute count disagrees with the reference set.
///
/// No query is skipped: any error aborts the whole batch.
#[tracing::instrument(
    skip_all,
    fields(n_reference = reference.len(), n_queries = queries.len(), k = config.k())
)]
pub fn evaluate(
    reference: &[DataPoint],
    queries: &[DataPoint],
    config: &KnnConfig,
) -> Result<Evaluation, KnnError> {
    validate_inputs(reference, queries, config)?;
    let k = config.k();

    let (results, summary) = if config.parallel() {
        let results: Vec<ClassificationResult> = queries
            .par_iter()
            .map(|q| evaluate_one(reference, q, k))
            .collect::<Result<_, _>>()?;
        // Per-shard correct-counts, summed
        let summary = results
            .par_iter()
            .map(EvaluationSummary::from)
            .reduce(EvaluationSummary::default, EvaluationSummary::merge);
        (results, summary)
    } else {
        let results: Vec<ClassificationResult> = queries
            .iter()
            .map(|q| evaluate_one(reference, q, k))
            .collect::<Result<_, _>>()?;
        let summary: EvaluationSummary = results.iter().collect();
        (results, summary)
    };
    debug!(
        correct = summary.correct(),
        total = summary.total(),
        parallel = config.parallel(),
        "evaluation complete"
    );

    Ok(Evaluation { results, summary })
}

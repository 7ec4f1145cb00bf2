//! Accuracy summary: console line and JSON document.

use std::path::Path;

use kvote_knn::EvaluationSummary;
use serde::Serialize;
use tracing::info;

use crate::error::IoError;

/// Machine-readable summary of one classification run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub k: usize,
    pub n_reference: usize,
    pub n_queries: usize,
    pub correct: usize,
    /// Fraction of correct predictions in `[0, 1]`.
    pub accuracy: f64,
    pub accuracy_percent: f64,
}

impl SummaryReport {
    /// Builds a report from an evaluation summary.
    pub fn new(summary: &EvaluationSummary, k: usize, n_reference: usize) -> Self {
        let accuracy = summary.accuracy().unwrap_or(0.0);
        Self {
            k,
            n_reference,
            n_queries: summary.total(),
            correct: summary.correct(),
            accuracy,
            accuracy_percent: accuracy * 100.0,
        }
    }
}

/// Renders `Accuracy: <percent>%`.
///
/// The percentage uses `Display`, so whole numbers carry no decimal point:
/// `Accuracy: 100%`, not `Accuracy: 100.0%`.
pub fn format_accuracy(summary: &EvaluationSummary) -> String {
    let percent = summary.accuracy().unwrap_or(0.0) * 100.0;
    format!("Accuracy: {percent}%")
}

/// Serialize a summary report to a JSON string.
pub fn to_json(report: &SummaryReport) -> Result<String, IoError> {
    serde_json::to_string_pretty(report).map_err(|e| IoError::Serialization {
        reason: e.to_string(),
    })
}

/// Writes the JSON summary to `path`.
pub fn write_summary(path: &Path, report: &SummaryReport) -> Result<(), IoError> {
    let json = to_json(report)?;
    std::fs::write(path, json).map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), "summary written");
    Ok(())
}

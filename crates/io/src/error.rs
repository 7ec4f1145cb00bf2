//! Error types for kvote-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the kvote-io crate.
///
/// Covers file access, delimited-text decoding, numeric parse failures and
/// record-shape problems found while loading, plus failures while writing
/// the report and summary.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an operating-system I/O failure on a named file.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error originating from the csv library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying csv failure.
        reason: String,
    },

    /// Returned when a field is not a valid number.
    #[error("line {line}, column {column}: cannot parse '{value}' as {expected}")]
    Parse {
        /// 1-based line number in the source.
        line: u64,
        /// 1-based field position in the record.
        column: usize,
        /// The offending field text.
        value: String,
        /// What the field should have been.
        expected: &'static str,
    },

    /// Returned when an attribute parses to NaN or infinity.
    #[error("line {line}, column {column}: non-finite attribute value")]
    NonFinite {
        /// 1-based line number in the source.
        line: u64,
        /// 1-based field position in the record.
        column: usize,
    },

    /// Returned when a record has fewer than two fields.
    #[error("line {line}: expected at least one attribute and a label, got {fields} field(s)")]
    RecordTooShort {
        /// 1-based line number in the source.
        line: u64,
        /// Number of fields found.
        fields: usize,
    },

    /// Returned when a record's attribute count differs from the first record's.
    #[error("line {line}: expected {expected} attribute(s), got {got}")]
    InconsistentRecord {
        /// 1-based line number in the source.
        line: u64,
        /// Attribute count of the first record.
        expected: usize,
        /// Attribute count of this record.
        got: usize,
    },

    /// Returned when a result does not carry exactly k distances.
    #[error("report row {row}: expected {expected} distance(s), got {got}")]
    ReportShape {
        /// 0-based index of the result.
        row: usize,
        /// Number of distance columns in the header.
        expected: usize,
        /// Number of distances in the result.
        got: usize,
    },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the serializer failure.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

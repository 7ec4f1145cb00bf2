//! Delimited-text loader for labeled data points.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use kvote_knn::{DataPoint, Label};
use tracing::{debug, info};

use crate::error::IoError;

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading data points from delimited text.
///
/// The [`Default`] implementation expects comma-separated records preceded
/// by one header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Field separator byte.
    delimiter: u8,
    /// Whether the first line is a header to skip.
    has_header: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
        }
    }
}

impl ReaderConfig {
    /// Sets the field separator.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether the first line is a header.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Returns the field separator.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns whether the first line is a header.
    pub fn has_header(&self) -> bool {
        self.has_header
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Reads every record of the file at `path` into a [`DataPoint`].
///
/// See [`parse_points`] for the record format.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Io`] if it cannot be opened, or any error of [`parse_points`].
pub fn read_points(path: &Path, config: &ReaderConfig) -> Result<Vec<DataPoint>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let points = parse_points(BufReader::new(file), config)?;
    info!(
        path = %path.display(),
        n_points = points.len(),
        n_attributes = points.first().map_or(0, DataPoint::dim),
        "data points loaded"
    );
    Ok(points)
}

/// Parses delimited records into data points.
///
/// Each record is `a_1, ..., a_d, label`: `d >= 1` real attributes followed
/// by one integer class label. Fields are trimmed and blank lines skipped.
/// `d` is fixed by the first record; every later record must match it.
///
/// Loading stops at the first bad record; no partial data is returned.
///
/// # Errors
///
/// - [`IoError::Csv`] if the text cannot be decoded.
/// - [`IoError::RecordTooShort`] for a record with fewer than two fields.
/// - [`IoError::Parse`] for an attribute or label that is not a number.
/// - [`IoError::NonFinite`] for a NaN or infinite attribute.
/// - [`IoError::InconsistentRecord`] for a record of the wrong width.
pub fn parse_points<R: Read>(reader: R, config: &ReaderConfig) -> Result<Vec<DataPoint>, IoError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_header)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    let mut n_attributes: Option<usize> = None;

    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let point = parse_record(&record, line)?;

        match n_attributes {
            None => n_attributes = Some(point.dim()),
            Some(expected) if expected != point.dim() => {
                return Err(IoError::InconsistentRecord {
                    line,
                    expected,
                    got: point.dim(),
                });
            }
            Some(_) => {}
        }
        points.push(point);
    }

    debug!(n_points = points.len(), ?n_attributes, "records parsed");
    Ok(points)
}

/// Parses one record; the last field is the label.
fn parse_record(record: &StringRecord, line: u64) -> Result<DataPoint, IoError> {
    let n_fields = record.len();
    if n_fields < 2 {
        return Err(IoError::RecordTooShort {
            line,
            fields: n_fields,
        });
    }

    let mut attributes = Vec::with_capacity(n_fields - 1);
    for (i, field) in record.iter().take(n_fields - 1).enumerate() {
        let value: f64 = field.parse().map_err(|_| IoError::Parse {
            line,
            column: i + 1,
            value: field.to_string(),
            expected: "a real number",
        })?;
        if !value.is_finite() {
            return Err(IoError::NonFinite {
                line,
                column: i + 1,
            });
        }
        attributes.push(value);
    }

    let raw_label = &record[n_fields - 1];
    let label: Label = raw_label.parse().map_err(|_| IoError::Parse {
        line,
        column: n_fields,
        value: raw_label.to_string(),
        expected: "an integer label",
    })?;

    Ok(DataPoint::new(attributes, label))
}

//! Per-query report writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use kvote_knn::ClassificationResult;
use tracing::info;

use crate::error::IoError;

/// Builds the report header: `y,predicted_y,distance1,...,distanceK`.
pub fn report_header(k: usize) -> Vec<String> {
    let mut header = Vec::with_capacity(k + 2);
    header.push("y".to_string());
    header.push("predicted_y".to_string());
    header.extend((1..=k).map(|i| format!("distance{i}")));
    header
}

/// Writes the report to `path`, creating or truncating the file.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created, or any error of
/// [`write_report_to`].
pub fn write_report(
    path: &Path,
    results: &[ClassificationResult],
    k: usize,
) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    write_report_to(BufWriter::new(file), results, k)?;
    info!(path = %path.display(), n_rows = results.len(), "report written");
    Ok(())
}

/// Writes one header line and one comma-separated row per result.
///
/// Rows are `true_label,predicted_label,d1,...,dk` with distances ascending,
/// in the order of `results`. Distances use Rust's shortest round-trip
/// `Display` formatting, which drops a trailing `.0`: a distance of one is
/// written `1`, not `1.0`. Parsed back, the values are identical.
///
/// # Errors
///
/// - [`IoError::ReportShape`] if a result does not carry exactly `k`
///   distances; nothing after the preceding row is written.
/// - [`IoError::Csv`] if writing fails.
pub fn write_report_to<W: Write>(
    writer: W,
    results: &[ClassificationResult],
    k: usize,
) -> Result<(), IoError> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(report_header(k))?;

    for (row, result) in results.iter().enumerate() {
        if result.distances().len() != k {
            return Err(IoError::ReportShape {
                row,
                expected: k,
                got: result.distances().len(),
            });
        }
        wtr.write_field(result.true_label().to_string())?;
        wtr.write_field(result.predicted_label().to_string())?;
        for d in result.distances() {
            wtr.write_field(d.to_string())?;
        }
        wtr.write_record(None::<&[u8]>)?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

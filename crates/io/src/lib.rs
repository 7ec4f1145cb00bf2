//! # kvote-io
//!
//! Load labeled data points from delimited text and write classification
//! reports. Bridges files into the `kvote_knn` types and back.

mod error;
mod reader;
mod summary;
mod writer;

pub use error::IoError;
pub use reader::{ReaderConfig, parse_points, read_points};
pub use summary::{SummaryReport, format_accuracy, to_json, write_summary};
pub use writer::{report_header, write_report, write_report_to};

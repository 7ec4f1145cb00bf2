//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use kvote_io::ReaderConfig;
use kvote_knn::KnnConfig;

use crate::config::{ClassifyToml, IoToml};

/// Parses a delimiter string into a single ASCII byte.
///
/// Accepts `"\t"` and `"tab"` as spellings of the tab character.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    match s {
        "\\t" | "tab" => return Ok(b'\t'),
        _ => {}
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => bail!("delimiter must be a single ASCII character, got {s:?}"),
    }
}

/// Builds a `ReaderConfig` from the TOML `[io]` section.
pub fn build_reader_config(io: &IoToml) -> Result<ReaderConfig> {
    Ok(ReaderConfig::default()
        .with_delimiter(parse_delimiter(&io.delimiter)?)
        .with_header(io.has_header))
}

/// Builds a `KnnConfig` from the `[classify]` section; `--parallel` forces parallel mode.
pub fn build_knn_config(classify: &ClassifyToml, k: usize, parallel_flag: bool) -> KnnConfig {
    KnnConfig::new(k).with_parallel(classify.parallel || parallel_flag)
}

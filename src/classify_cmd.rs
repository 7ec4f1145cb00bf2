//! Classify command: load both data sets, vote, write the report.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kvote_io::{SummaryReport, format_accuracy, read_points, write_report, write_summary};
use kvote_knn::evaluate;

use crate::cli::Cli;
use crate::config::{DEFAULT_CONFIG_FILE, KvoteConfig};
use crate::convert;

/// Loads the TOML config named on the command line, else `./kvote.toml`
/// if it exists, else the built-in defaults.
fn load_config(explicit: Option<&Path>) -> Result<KvoteConfig> {
    let path = match explicit {
        Some(p) => p,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if !fallback.exists() {
                return Ok(KvoteConfig::default());
            }
            fallback
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Run the classification pipeline.
pub fn run(args: Cli) -> Result<()> {
    let _cmd = info_span!("classify").entered();

    // 1. Configuration
    let config = load_config(args.config.as_deref())?;
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let knn_cfg = convert::build_knn_config(&config.classify, args.k, args.parallel);

    // 2. Load both data sets; a malformed record aborts before any voting
    let reference = read_points(&args.reference, &reader_cfg).with_context(|| {
        format!(
            "failed to read reference data: {}",
            args.reference.display()
        )
    })?;
    let queries = read_points(&args.query, &reader_cfg)
        .with_context(|| format!("failed to read query data: {}", args.query.display()))?;

    // 3. Classify every query
    info!(
        n_reference = reference.len(),
        n_queries = queries.len(),
        k = knn_cfg.k(),
        "classifying"
    );
    let eval = evaluate(&reference, &queries, &knn_cfg).context("classification failed")?;

    // 4. Per-query report
    write_report(&args.output, eval.results(), knn_cfg.k())
        .with_context(|| format!("failed to write report: {}", args.output.display()))?;
    println!("Output file created successfully: {}", args.output.display());
    println!("{}", format_accuracy(eval.summary()));

    // 5. Optional JSON summary
    if let Some(path) = &args.summary {
        let report = SummaryReport::new(eval.summary(), knn_cfg.k(), reference.len());
        write_summary(path, &report)
            .with_context(|| format!("failed to write summary: {}", path.display()))?;
    }

    Ok(())
}

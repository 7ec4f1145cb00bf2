use std::path::PathBuf;

use clap::Parser;

/// kvote k-nearest-neighbour classifier.
#[derive(Parser)]
#[command(
    name = "kvote",
    version,
    about = "Classify labeled points by majority vote of their k nearest neighbours"
)]
pub struct Cli {
    /// Reference (training) data: attributes followed by an integer label.
    pub reference: PathBuf,

    /// Query (test) data in the same layout as the reference data.
    pub query: PathBuf,

    /// Path for the per-query report.
    pub output: PathBuf,

    /// Number of nearest neighbours that vote.
    pub k: usize,

    /// Path to TOML configuration file (default: ./kvote.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write a JSON accuracy summary to this path.
    #[arg(short, long)]
    pub summary: Option<PathBuf>,

    /// Classify queries in parallel.
    #[arg(short, long)]
    pub parallel: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

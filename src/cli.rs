use clap::Parser;
use std::path::PathBuf;
use storefront::shop::constants::DEFAULT_TIMING_LOG;

#[derive(Parser, Debug)]
#[command(
    name = "storefront",
    about = "In-memory inventory and shopping cart with a terminal UI",
    version
)]
pub struct Cli {
    /// File that receives the name-sort timing lines
    #[arg(long = "timing-log", default_value = DEFAULT_TIMING_LOG)]
    pub timing_log: PathBuf,

    /// Discard timing lines instead of writing them
    #[arg(long = "no-timing-log")]
    pub no_timing_log: bool,

    /// Write diagnostic tracing output to this file (filter with RUST_LOG)
    #[arg(long = "trace-file")]
    pub trace_file: Option<PathBuf>,

    /// Start with an empty catalog and graph instead of the built-in products
    #[arg(long)]
    pub empty: bool,
}

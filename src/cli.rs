use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_CHUNK_SIZE, DEFAULT_THRESHOLD};

#[derive(Parser, Debug)]
#[command(
    name = "dupegrep",
    version = "0.1.0",
    about = "Find exact, partial, and visually similar duplicate files",
    author = "dupegrep contributors"
)]
pub struct Args {
    /// The file or directory to scan
    #[arg(value_name = "TARGET")]
    pub source: PathBuf,

    /// Minimum shared-chunk similarity, in [0, 1], to report a partial match
    #[arg(short = 't', long = "threshold", value_name = "RATIO", default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Content chunk size in bytes, used for the exact and partial passes
    #[arg(short = 'c', long = "chunk-size", value_name = "BYTES", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Exclude files matching pattern (glob) - can be comma-separated
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Emit the full result as JSON instead of a console summary
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Number of threads for hashing (defaults to number of CPU cores)
    #[arg(long = "threads", value_name = "N")]
    pub threads: Option<usize>,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

//! Command-line interface implementation for htmlify.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for htmlify.
#[derive(Parser, Debug)]
#[command(author, version, about = "htmlify: static demo-page builder", long_about = None)]
pub struct Args {
    /// Page tasks to run; all configured tasks when omitted
    #[arg(value_name = "TASK")]
    pub tasks: Vec<String>,

    /// Path to the configuration file
    /// (defaults to htmlify.json, htmlify.yml or htmlify.yaml)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Abort on the first failing file instead of logging and continuing
    #[arg(long)]
    pub fail_fast: bool,

    /// Skip rendering the packaging metadata files
    #[arg(long)]
    pub skip_metafiles: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}

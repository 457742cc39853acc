use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "wsfix", bin_name = "wsfix", version)]
#[command(about = "Strip trailing whitespace from project files", long_about = None)]
pub struct Cli {
    /// Run as if started in DIR
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Config file (default: .wsfix.json in the working directory, if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory the glob is evaluated against
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// File selector relative to the root (e.g. "**/*.vue")
    #[arg(long = "glob", value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Extra file to include when it exists; repeat for more. Replaces the configured list
    #[arg(long = "extra", value_name = "PATH")]
    pub extra: Vec<PathBuf>,

    /// Report files with trailing whitespace without rewriting them
    #[arg(long, conflicts_with_all = ["list", "init"])]
    pub check: bool,

    /// Print the resolved files and exit
    #[arg(long, conflicts_with = "init")]
    pub list: bool,

    /// Write the effective configuration to .wsfix.json and exit
    #[arg(long)]
    pub init: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Logs go to stderr; stdout carries the report.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "wsfix=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

//! Price Tree - Binary Entry Point
//!
//! Thin wrapper: set up logging, parse arguments, run one command.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use price_tree::cli::{self, Cli};

fn main() -> Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so the book view on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::run(args)?;
    Ok(())
}

//! Command-line interface for repo-prompt.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::pipeline::{self, InvocationOptions};
use crate::process::SystemRunner;

/// Flatten a GitHub repository into a single prompt file with repomix
#[derive(Parser)]
#[command(name = "repo-prompt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GitHub repository URL (HTTPS, optionally with /tree/<ref>, or SSH)
    #[arg(long, value_name = "URL")]
    repo: String,

    /// Output file name
    #[arg(long, value_name = "FILE", default_value = "repo-prompt.txt")]
    output: PathBuf,

    /// Glob of files to include (repeatable)
    #[arg(long, value_name = "GLOB")]
    include: Vec<String>,

    /// Glob of files to ignore (repeatable)
    #[arg(long, value_name = "GLOB")]
    ignore: Vec<String>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,

    /// Additional arguments forwarded verbatim to repomix
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "REPOMIX_ARGS")]
    passthrough: Vec<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let options = InvocationOptions {
        repo: cli.repo,
        output: cli.output,
        include: cli.include,
        ignore: cli.ignore,
        passthrough: cli.passthrough,
    };

    match pipeline::run(&SystemRunner, &options) {
        Ok(output) => {
            println!("Successfully generated prompt in {}", output.display());
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}

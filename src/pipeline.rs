//! Pipeline orchestration: workspace → normalize → clone → package → copy.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::fetch::clone_repository;
use crate::output::copy_artifact;
use crate::package::{build_packaging_args, run_packaging};
use crate::process::ProcessRunner;
use crate::repo_url::parse_repo_reference;
use crate::workspace::Workspace;

/// Everything a single invocation needs, parsed once at entry and read-only
/// from then on.
#[derive(Debug, Clone)]
pub struct InvocationOptions {
    /// Raw `--repo` value, normalized by the pipeline.
    pub repo: String,
    /// Destination for the generated prompt file.
    pub output: PathBuf,
    /// Include globs forwarded to repomix, in user order.
    pub include: Vec<String>,
    /// Ignore globs forwarded to repomix, in user order.
    pub ignore: Vec<String>,
    /// Unrecognized CLI arguments forwarded to repomix verbatim.
    pub passthrough: Vec<String>,
}

/// Run the full pipeline once.
///
/// The workspace is created first and removed when it goes out of scope, so
/// cleanup happens on success and on every failure path alike. Each stage
/// error propagates immediately; there are no retries.
pub fn run(runner: &dyn ProcessRunner, options: &InvocationOptions) -> Result<PathBuf> {
    let workspace = Workspace::create()?;
    debug!(path = %workspace.path().display(), "created workspace");

    let reference = parse_repo_reference(&options.repo)?;
    clone_repository(runner, &reference, workspace.path())?;

    let packaging_args =
        build_packaging_args(&options.include, &options.ignore, &options.passthrough);
    run_packaging(runner, workspace.path(), &packaging_args)?;

    copy_artifact(workspace.path(), &options.output)?;
    Ok(options.output.clone())
}

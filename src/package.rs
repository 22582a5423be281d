//! Packaging tool invocation.
//!
//! repomix does all the real content processing; this module only builds its
//! argument list and runs it inside the workspace through `npx`, so no local
//! install is required.

use std::ffi::OsString;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::process::ProcessRunner;

/// Fixed file name repomix writes into its working directory.
pub const ARTIFACT_FILE: &str = "repomix-output.txt";

/// Build the repomix argument list: `--include` pairs in user order, then
/// `--ignore` pairs in user order, then passthrough arguments verbatim.
pub fn build_packaging_args(
    include: &[String],
    ignore: &[String],
    passthrough: &[String],
) -> Vec<String> {
    let mut args = Vec::with_capacity(2 * (include.len() + ignore.len()) + passthrough.len());
    for pattern in include {
        args.push("--include".to_string());
        args.push(pattern.clone());
    }
    for pattern in ignore {
        args.push("--ignore".to_string());
        args.push(pattern.clone());
    }
    args.extend(passthrough.iter().cloned());
    args
}

/// Run `npx repomix <args...>` with the workspace as working directory and
/// inherited stdio.
///
/// Whether the artifact file actually appeared is checked by the finalizer,
/// not here.
pub fn run_packaging(runner: &dyn ProcessRunner, workdir: &Path, args: &[String]) -> Result<()> {
    let mut npx_args: Vec<OsString> = Vec::with_capacity(args.len() + 1);
    npx_args.push("repomix".into());
    npx_args.extend(args.iter().map(OsString::from));

    debug!(?args, workdir = %workdir.display(), "running repomix");
    let code = runner.run("npx", &npx_args, Some(workdir)).map_err(Error::PackagingProcessError)?;
    if code != 0 {
        return Err(Error::PackagingFailed(code));
    }
    Ok(())
}

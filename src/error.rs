//! Pipeline error taxonomy.

use std::io;
use thiserror::Error;

/// Errors raised by the clone → package → copy pipeline.
///
/// Every variant is caught once at the CLI boundary, printed as a single
/// `Error: <message>` line, and terminates the process with exit code 1.
#[derive(Debug, Error)]
pub enum Error {
    /// The `--repo` value is neither an SSH remote nor a GitHub HTTPS URL.
    #[error("Invalid GitHub repository URL: {0}")]
    InvalidRepoUrl(String),

    /// `git clone` ran but exited with a non-zero status.
    #[error("git clone failed with code {0}")]
    CloneFailed(i32),

    /// `git` could not be started at all.
    #[error("git clone failed to start: {0}")]
    CloneProcessError(#[source] io::Error),

    /// repomix ran but exited with a non-zero status.
    #[error("repomix failed with code {0}")]
    PackagingFailed(i32),

    /// `npx` could not be started at all.
    #[error("repomix failed to start: {0}")]
    PackagingProcessError(#[source] io::Error),

    /// Copying the artifact to the destination failed, including the case
    /// where repomix produced no output file.
    #[error("Failed to copy output file: {0}")]
    OutputCopyFailed(String),
}

/// Convenience alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

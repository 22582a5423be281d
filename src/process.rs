//! Child process execution.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Capability for running external commands to completion.
///
/// The pipeline only ever needs the exit code; streams are inherited from the
/// parent so clone and packaging progress reach the terminal in real time.
/// Arguments are `OsString` so path arguments survive even when they are not
/// valid UTF-8. Tests substitute a recording implementation to avoid real
/// subprocesses.
pub trait ProcessRunner {
    /// Run `program` with `args` (in `cwd` when given), blocking until the
    /// child exits, and return its exit code.
    fn run(&self, program: &str, args: &[OsString], cwd: Option<&Path>) -> io::Result<i32>;
}

/// Spawns real child processes via `std::process::Command`.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString], cwd: Option<&Path>) -> io::Result<i32> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        let status = cmd.status()?;
        // A child killed by a signal has no exit code; report a generic failure.
        Ok(status.code().unwrap_or(-1))
    }
}

//! Repository cloning via the system git client.

use std::ffi::OsString;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::process::ProcessRunner;
use crate::repo_url::RepoReference;

/// Clone `reference` into `dest` with `git clone`, targeting the branch when
/// one was extracted from the URL.
///
/// Stdio is inherited, so clone progress is visible in real time. `dest` must
/// already exist and be empty.
pub fn clone_repository(
    runner: &dyn ProcessRunner,
    reference: &RepoReference,
    dest: &Path,
) -> Result<()> {
    let mut args: Vec<OsString> = vec!["clone".into()];
    if let Some(branch) = &reference.branch {
        args.push("-b".into());
        args.push(branch.into());
    }
    args.push(reference.url.as_str().into());
    args.push(dest.into());

    debug!(url = %reference.url, branch = ?reference.branch, "running git clone");
    let code = runner.run("git", &args, None).map_err(Error::CloneProcessError)?;
    if code != 0 {
        return Err(Error::CloneFailed(code));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::path::PathBuf;

    struct RecordingRunner {
        code: i32,
        calls: RefCell<Vec<(String, Vec<OsString>)>>,
    }

    impl ProcessRunner for RecordingRunner {
        fn run(&self, program: &str, args: &[OsString], _cwd: Option<&Path>) -> io::Result<i32> {
            self.calls.borrow_mut().push((program.to_string(), args.to_vec()));
            Ok(self.code)
        }
    }

    fn reference(branch: Option<&str>) -> RepoReference {
        RepoReference {
            url: "git@github.com:acme/widgets.git".to_string(),
            branch: branch.map(str::to_string),
        }
    }

    #[test]
    fn clone_without_branch_builds_minimal_args() {
        let runner = RecordingRunner { code: 0, calls: RefCell::new(Vec::new()) };
        clone_repository(&runner, &reference(None), &PathBuf::from("/tmp/ws")).unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (program, args) = &calls[0];
        assert_eq!(program, "git");
        assert_eq!(args, &["clone", "git@github.com:acme/widgets.git", "/tmp/ws"]);
    }

    #[test]
    fn clone_with_branch_adds_flag_pair() {
        let runner = RecordingRunner { code: 0, calls: RefCell::new(Vec::new()) };
        clone_repository(&runner, &reference(Some("main")), &PathBuf::from("/tmp/ws")).unwrap();

        let calls = runner.calls.borrow();
        let (_, args) = &calls[0];
        assert_eq!(args, &["clone", "-b", "main", "git@github.com:acme/widgets.git", "/tmp/ws"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_dest_path_is_passed_through_intact() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dest = PathBuf::from(OsStr::from_bytes(b"/tmp/ws-\xff"));
        let runner = RecordingRunner { code: 0, calls: RefCell::new(Vec::new()) };
        clone_repository(&runner, &reference(None), &dest).unwrap();

        let calls = runner.calls.borrow();
        let (_, args) = &calls[0];
        assert_eq!(args.last().unwrap(), dest.as_os_str());
    }

    #[test]
    fn nonzero_exit_maps_to_clone_failed() {
        let runner = RecordingRunner { code: 128, calls: RefCell::new(Vec::new()) };
        let err = clone_repository(&runner, &reference(None), &PathBuf::from("/tmp/ws")).unwrap_err();
        assert!(matches!(err, Error::CloneFailed(128)));
    }

    #[test]
    fn launch_failure_maps_to_process_error() {
        struct FailingRunner;
        impl ProcessRunner for FailingRunner {
            fn run(&self, _: &str, _: &[OsString], _: Option<&Path>) -> io::Result<i32> {
                Err(io::Error::new(io::ErrorKind::NotFound, "git not found"))
            }
        }
        let err =
            clone_repository(&FailingRunner, &reference(None), &PathBuf::from("/tmp/ws")).unwrap_err();
        assert!(matches!(err, Error::CloneProcessError(_)));
    }
}

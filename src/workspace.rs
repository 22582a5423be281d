//! Ephemeral clone workspace.

use std::env;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

/// Uniquely named temporary directory holding the clone and the repomix
/// output for a single invocation.
///
/// Removed recursively on drop, best-effort, so every exit path releases it
/// even when the pipeline fails partway through.
pub struct Workspace {
    path: PathBuf,
}

impl Workspace {
    /// Create a fresh, empty workspace under the OS temp directory.
    pub fn create() -> Result<Self> {
        let path = build_temp_dir();
        std::fs::create_dir_all(&path)
            .with_context(|| format!("Failed creating temp directory: {}", path.display()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        // The directory may already be gone; that's fine.
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

fn build_temp_dir() -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_nanos()).unwrap_or(0);
    let pid = std::process::id();
    env::temp_dir().join(format!("repo-prompt-{pid}-{nanos}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_makes_directory_and_drop_removes_it() {
        let workspace = Workspace::create().unwrap();
        let path = workspace.path().to_path_buf();
        assert!(path.is_dir());

        std::fs::write(path.join("repomix-output.txt"), "packed").unwrap();
        drop(workspace);
        assert!(!path.exists());
    }

    #[test]
    fn drop_tolerates_already_removed_directory() {
        let workspace = Workspace::create().unwrap();
        std::fs::remove_dir_all(workspace.path()).unwrap();
        drop(workspace); // must not panic
    }

    #[test]
    fn workspaces_get_distinct_paths() {
        let a = Workspace::create().unwrap();
        let b = Workspace::create().unwrap();
        assert_ne!(a.path(), b.path());
    }
}

//! Output artifact finalization.

use std::path::Path;

use crate::error::{Error, Result};
use crate::package::ARTIFACT_FILE;

/// Copy the repomix artifact out of the workspace to `output`, overwriting
/// any existing file at the destination.
///
/// A missing artifact (repomix produced no output) surfaces as the same
/// copy failure as any other filesystem error.
pub fn copy_artifact(workspace: &Path, output: &Path) -> Result<()> {
    let source = workspace.join(ARTIFACT_FILE);
    std::fs::copy(&source, output)
        .map_err(|e| Error::OutputCopyFailed(format!("{}: {e}", source.display())))?;
    Ok(())
}

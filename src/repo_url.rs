//! GitHub URL normalization.
//!
//! Converts the user-supplied `--repo` value into a canonical SSH clone URL
//! plus an optional branch extracted from a `/tree/<ref>` or `/blob/<ref>`
//! segment.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// A clone-ready repository reference, built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReference {
    /// Clone target passed verbatim to `git clone`.
    pub url: String,
    /// Ref name from a `/tree/` or `/blob/` URL segment, if any.
    pub branch: Option<String>,
}

// Owner and repo are single path segments; the ref capture also stops at the
// next `/`, so a branch name containing slashes (e.g. `feature/login`) is
// truncated to its first segment. Known limitation, kept as-is.
static GITHUB_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://github\.com/([^/]+)/([^/]+?)(?:/(?:tree|blob)/([^/]+))?(?:/(.+))?$")
        .expect("GitHub URL pattern is valid")
});

/// Parse a raw repository reference into a [`RepoReference`].
///
/// SSH remotes (`git@...`) pass through unchanged with no branch. HTTPS
/// GitHub URLs are recomposed as `git@github.com:<owner>/<repo>.git`, with a
/// trailing `.git` on the repo segment stripped first and any sub-path after
/// the ref discarded. Anything else is rejected.
pub fn parse_repo_reference(raw: &str) -> Result<RepoReference> {
    if raw.starts_with("git@") {
        return Ok(RepoReference { url: raw.to_string(), branch: None });
    }

    let caps = GITHUB_URL.captures(raw).ok_or_else(|| Error::InvalidRepoUrl(raw.to_string()))?;

    let owner = &caps[1];
    let repo = caps[2].strip_suffix(".git").unwrap_or(&caps[2]);
    let branch = caps.get(3).map(|m| m.as_str().to_string());

    Ok(RepoReference { url: format!("git@github.com:{owner}/{repo}.git"), branch })
}

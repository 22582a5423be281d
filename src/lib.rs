//! Repo-Prompt: Flatten GitHub repositories into single prompt files
//!
//! This library clones a repository, runs the external `repomix` packaging
//! tool inside the clone, and copies the flattened output to a destination
//! of the user's choosing.

pub mod cli;
pub mod error;
pub mod fetch;
pub mod output;
pub mod package;
pub mod pipeline;
pub mod process;
pub mod repo_url;
pub mod workspace;

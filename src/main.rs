//! repo-prompt: Flatten a GitHub repository into a single prompt file
//!
//! Clones the repository into a temporary workspace, runs repomix inside it,
//! and copies the flattened output to the requested path.

mod cli;
mod error;
mod fetch;
mod output;
mod package;
mod pipeline;
mod process;
mod repo_url;
mod workspace;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Fatal error: {err:#}");
        std::process::exit(1);
    }
}

//! Repository operations used by the shell
//!
//! [`Repository`] is the seam between the REPL and version control. Every
//! operation receives the working directory explicitly and answers with text
//! ready for display, or a [`RepoError`] describing why it could not run.

pub mod git_cli;
pub mod status;

pub use git_cli::GitCli;
pub use status::{StatusEntry, StatusSummary};

use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Not in a git repository")]
    NotARepository,
    #[error("Could not run git: {0}")]
    Unavailable(#[source] std::io::Error),
    #[error("git {operation} timed out after {seconds}s")]
    TimedOut { operation: &'static str, seconds: u64 },
    #[error("Error {operation}: {message}")]
    CommandFailed {
        operation: &'static str,
        message: String,
    },
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Version-control capability invoked by the dispatcher.
pub trait Repository {
    /// Checked-out branch, or `None` outside a repository.
    fn current_branch(&self, workdir: &Path) -> Option<String>;

    fn init(&mut self, workdir: &Path) -> RepoResult<String>;

    fn status(&self, workdir: &Path) -> RepoResult<String>;

    /// Stage `paths`; an empty slice or `["."]` stages everything.
    fn stage(&mut self, workdir: &Path, paths: &[String]) -> RepoResult<String>;

    fn commit(&mut self, workdir: &Path, message: &str) -> RepoResult<String>;

    fn push(&mut self, workdir: &Path) -> RepoResult<String>;

    fn pull(&mut self, workdir: &Path) -> RepoResult<String>;

    fn list_branches(&self, workdir: &Path) -> RepoResult<String>;

    fn create_branch(&mut self, workdir: &Path, name: &str) -> RepoResult<String>;

    fn delete_branch(&mut self, workdir: &Path, name: &str) -> RepoResult<String>;

    fn checkout(&mut self, workdir: &Path, name: &str) -> RepoResult<String>;

    fn log(&self, workdir: &Path, count: usize) -> RepoResult<String>;

    fn diff(&self, workdir: &Path) -> RepoResult<String>;
}

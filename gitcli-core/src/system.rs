//! Local system access: working directory, listings and child processes
//!
//! The working directory is state owned by the [`System`] implementation and
//! passed explicitly to everything that needs it; the process-wide current
//! directory is never changed.

use crate::utils::path::{expand_home, home_dir, resolve_lexically};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),
    #[error("No home directory available")]
    NoHomeDirectory,
    #[error("No command given")]
    EmptyCommand,
    #[error("Error executing command: {0}")]
    Spawn(#[source] io::Error),
    #[error("Error listing files: {0}")]
    List(#[source] io::Error),
}

/// A single directory listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_dir: bool,
}

/// System collaborator used by the REPL.
pub trait System {
    /// Directory that relative paths and child processes resolve against.
    fn current_dir(&self) -> &Path;

    /// Change the working directory; `None` means the home directory.
    fn change_dir(&mut self, target: Option<&str>) -> Result<PathBuf, SystemError>;

    /// Entries of the working directory, sorted by name.
    fn list_dir(&self) -> Result<Vec<DirEntryInfo>, SystemError>;

    /// Run a program with inherited stdio and wait for it; returns the exit code.
    fn spawn(&self, args: &[String]) -> Result<i32, SystemError>;
}

/// [`System`] backed by the local filesystem and process table.
#[derive(Debug, Clone)]
pub struct OsSystem {
    cwd: PathBuf,
    home: Option<PathBuf>,
}

impl OsSystem {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            home: home_dir(),
        }
    }

    /// Use an explicit home directory instead of the environment's.
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }
}

impl System for OsSystem {
    fn current_dir(&self) -> &Path {
        &self.cwd
    }

    fn change_dir(&mut self, target: Option<&str>) -> Result<PathBuf, SystemError> {
        let requested = match target {
            Some(target) => expand_home(Path::new(target), self.home.as_deref()),
            None => self.home.clone().ok_or(SystemError::NoHomeDirectory)?,
        };
        let resolved = resolve_lexically(&self.cwd, &requested);

        if !resolved.is_dir() {
            let shown = target.map_or_else(|| resolved.display().to_string(), str::to_string);
            return Err(SystemError::DirectoryNotFound(shown));
        }

        debug!(from = %self.cwd.display(), to = %resolved.display(), "changed directory");
        self.cwd = resolved.clone();
        Ok(resolved)
    }

    fn list_dir(&self) -> Result<Vec<DirEntryInfo>, SystemError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.cwd).map_err(SystemError::List)? {
            let entry = entry.map_err(SystemError::List)?;
            let is_dir = entry.path().is_dir();
            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn spawn(&self, args: &[String]) -> Result<i32, SystemError> {
        let (program, rest) = args.split_first().ok_or(SystemError::EmptyCommand)?;
        debug!(program = %program, cwd = %self.cwd.display(), "spawning command");
        let status = Command::new(program)
            .args(rest)
            .current_dir(&self.cwd)
            .status()
            .map_err(SystemError::Spawn)?;
        // A signal-terminated child has no code; report it as a failure.
        Ok(status.code().unwrap_or(-1))
    }
}

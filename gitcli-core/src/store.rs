//! Line-oriented persistence shared by the history and alias stores
//!
//! A store holds a flat list of text lines. Absence of the backing file is not
//! an error and loads as `None`.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persistence collaborator for line-based state.
pub trait LineStore {
    /// Read every line, or `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<String>>>;

    /// Replace the stored content with `lines`.
    fn save(&self, lines: &[String]) -> Result<()>;

    /// Human-readable location for diagnostics.
    fn describe(&self) -> String;
}

/// A [`LineStore`] backed by a plain text file.
#[derive(Debug, Clone)]
pub struct FileLineStore {
    path: PathBuf,
}

impl FileLineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineStore for FileLineStore {
    fn load(&self) -> Result<Option<Vec<String>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read {}", self.path.display()));
            }
        };
        Ok(Some(content.lines().map(str::to_string).collect()))
    }

    fn save(&self, lines: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create directory: {}", parent.display())
                })?;
            }
        }

        let mut payload = lines.join("\n");
        if !lines.is_empty() {
            payload.push('\n');
        }
        fs::write(&self.path, payload)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

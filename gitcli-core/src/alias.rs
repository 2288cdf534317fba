//! User-defined command aliases
//!
//! Aliases are persisted one per line as `name=expansion`. The first `=` splits
//! the line, so expansions may contain `=` themselves but names may not.

use crate::store::LineStore;
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AliasError {
    #[error("Alias name cannot be empty")]
    EmptyName,
    #[error("Alias name cannot contain '=': {0}")]
    InvalidName(String),
}

#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Insert or overwrite an alias.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        expansion: impl Into<String>,
    ) -> Result<(), AliasError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AliasError::EmptyName);
        }
        if name.contains('=') {
            return Err(AliasError::InvalidName(name));
        }
        self.aliases.insert(name, expansion.into());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.aliases.remove(name)
    }

    /// All aliases sorted by name.
    pub fn list(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .aliases
            .iter()
            .map(|(name, expansion)| (name.as_str(), expansion.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Merge aliases parsed from the store into the table.
    ///
    /// Malformed lines are skipped; read failures are logged and leave the
    /// table as it was.
    pub fn load(&mut self, store: &dyn LineStore) {
        let lines = match store.load() {
            Ok(Some(lines)) => lines,
            Ok(None) => return,
            Err(err) => {
                warn!("Could not load aliases: {err:#}");
                return;
            }
        };

        for line in &lines {
            match parse_line(line) {
                Some((name, expansion)) => {
                    self.aliases.insert(name.to_string(), expansion.to_string());
                }
                None => debug!(line = %line, "skipping malformed alias line"),
            }
        }
    }

    /// Write the table to the store. Failures are logged, never raised.
    pub fn save(&self, store: &dyn LineStore) {
        let lines: Vec<String> = self
            .list()
            .into_iter()
            .map(|(name, expansion)| format!("{name}={expansion}"))
            .collect();
        if let Err(err) = store.save(&lines) {
            warn!("Could not save aliases: {err:#}");
        }
    }
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (name, expansion) = line.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, expansion.trim()))
}

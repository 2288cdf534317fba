use crate::config::constants::defaults;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command history configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of entries retained; oldest are dropped first
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Number of entries shown by the `history` command
    #[serde(default = "default_history_display_limit")]
    pub display_limit: usize,

    /// History file location (defaults to `~/.gitcli_history`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_max_entries() -> usize {
    defaults::HISTORY_MAX_ENTRIES
}

fn default_history_display_limit() -> usize {
    defaults::HISTORY_DISPLAY_LIMIT
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            display_limit: default_history_display_limit(),
            file: None,
        }
    }
}

/// Alias persistence configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AliasesConfig {
    /// Alias file location (defaults to `~/.gitcli_aliases`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// History search configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of ranked results shown by `search`
    #[serde(default = "default_search_display_limit")]
    pub display_limit: usize,
}

fn default_search_display_limit() -> usize {
    defaults::SEARCH_DISPLAY_LIMIT
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            display_limit: default_search_display_limit(),
        }
    }
}

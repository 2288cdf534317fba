use crate::config::constants::defaults;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Git invocation settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GitConfig {
    /// Executable used for repository operations
    #[serde(default = "default_program")]
    pub program: String,

    /// Number of commits shown by `log` without an argument
    #[serde(default = "default_log_count")]
    pub default_log_count: usize,

    /// Upper bound for a single git invocation, in seconds (0 disables)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_program() -> String {
    defaults::GIT_PROGRAM.to_string()
}

fn default_log_count() -> usize {
    defaults::GIT_LOG_COUNT
}

fn default_timeout_secs() -> u64 {
    defaults::GIT_TIMEOUT_SECS
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            default_log_count: default_log_count(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GitConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// File and directory names used for persisted state
pub mod paths {
    /// Configuration file looked up in the workspace and config directory
    pub const CONFIG_FILE_NAME: &str = "gitcli.toml";
    /// Per-user directory under the home directory
    pub const CONFIG_DIR_NAME: &str = ".gitcli";
    /// History file under the home directory
    pub const HISTORY_FILE_NAME: &str = ".gitcli_history";
    /// Alias file under the home directory
    pub const ALIAS_FILE_NAME: &str = ".gitcli_aliases";
}

/// Default values for configuration fields
pub mod defaults {
    pub const HISTORY_MAX_ENTRIES: usize = 1_000;
    pub const HISTORY_DISPLAY_LIMIT: usize = 20;
    pub const SEARCH_DISPLAY_LIMIT: usize = 10;
    pub const GIT_PROGRAM: &str = "git";
    pub const GIT_LOG_COUNT: usize = 10;
    pub const GIT_TIMEOUT_SECS: u64 = 60;
    pub const THEME: &str = "classic";
    pub const SHOW_BANNER: bool = true;
}

/// Environment variables consulted at startup
pub mod env {
    /// Tracing filter directives, e.g. `GITCLI_LOG=debug`
    pub const LOG_FILTER: &str = "GITCLI_LOG";
}

/// Prompt labels
pub mod prompt {
    pub const NO_REPOSITORY: &str = "no-git";
    pub const SUFFIX: &str = " > ";
}

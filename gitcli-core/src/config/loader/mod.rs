use crate::config::constants::paths;
use crate::config::core::{AliasesConfig, GitConfig, HistoryConfig, SearchConfig, UiConfig};
use crate::utils::path::{expand_home, home_dir};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Main configuration structure for gitcli
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct GitCliConfig {
    /// Command history settings
    #[serde(default)]
    pub history: HistoryConfig,

    /// Alias persistence settings
    #[serde(default)]
    pub aliases: AliasesConfig,

    /// History search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Git invocation settings
    #[serde(default)]
    pub git: GitConfig,

    /// UI settings
    #[serde(default)]
    pub ui: UiConfig,
}

impl GitCliConfig {
    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Write the default configuration to `output`.
    pub fn create_sample_config<P: AsRef<Path>>(output: P) -> Result<()> {
        let output = output.as_ref();
        let content = GitCliConfig::default().to_toml()?;
        fs::write(output, content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;
        Ok(())
    }
}

/// Configuration manager for loading configuration and resolving state paths
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: GitCliConfig,
    config_path: Option<PathBuf>,
    home: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Load configuration for a specific workspace
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_home(workspace, home_dir())
    }

    /// Load configuration for a workspace, resolving user files under `home`
    pub fn load_with_home(workspace: impl AsRef<Path>, home: Option<PathBuf>) -> Result<Self> {
        let workspace = workspace.as_ref();

        // Try gitcli.toml in workspace root first
        let workspace_config = workspace.join(paths::CONFIG_FILE_NAME);
        if workspace_config.is_file() {
            return Self::load_file_with_home(&workspace_config, home);
        }

        // Try ~/.gitcli/gitcli.toml
        if let Some(home_dir) = home.as_deref() {
            let home_config = home_dir
                .join(paths::CONFIG_DIR_NAME)
                .join(paths::CONFIG_FILE_NAME);
            if home_config.is_file() {
                return Self::load_file_with_home(&home_config, home);
            }
        }

        debug!("no configuration file found; using defaults");
        Ok(Self {
            config: GitCliConfig::default(),
            config_path: None,
            home,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_file_with_home(path.as_ref(), home_dir())
    }

    fn load_file_with_home(path: &Path, home: Option<PathBuf>) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: GitCliConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
            home,
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &GitCliConfig {
        &self.config
    }

    /// Mutable access for command-line overrides
    pub fn config_mut(&mut self) -> &mut GitCliConfig {
        &mut self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Per-user configuration directory (`~/.gitcli`)
    pub fn config_dir(&self) -> PathBuf {
        self.home_or_current().join(paths::CONFIG_DIR_NAME)
    }

    /// Resolved history file location
    pub fn history_path(&self) -> PathBuf {
        self.state_path(self.config.history.file.as_deref(), paths::HISTORY_FILE_NAME)
    }

    /// Resolved alias file location
    pub fn alias_path(&self) -> PathBuf {
        self.state_path(self.config.aliases.file.as_deref(), paths::ALIAS_FILE_NAME)
    }

    /// Create the per-user configuration directory; failures are only logged.
    pub fn ensure_config_dir(&self) {
        let dir = self.config_dir();
        if let Err(err) = fs::create_dir_all(&dir) {
            warn!("Could not create config directory {}: {err}", dir.display());
        }
    }

    fn state_path(&self, configured: Option<&Path>, default_name: &str) -> PathBuf {
        match configured {
            Some(path) => expand_home(path, self.home.as_deref()),
            None => self.home_or_current().join(default_name),
        }
    }

    fn home_or_current(&self) -> PathBuf {
        self.home.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

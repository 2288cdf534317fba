//! gitcli Configuration Module
//!
//! This module handles loading configuration from `gitcli.toml` files and
//! resolving where history and alias state is persisted.

pub mod constants;
pub mod core;
pub mod loader;

pub use self::core::{AliasesConfig, GitConfig, HistoryConfig, SearchConfig, UiConfig};
pub use loader::{ConfigManager, GitCliConfig};

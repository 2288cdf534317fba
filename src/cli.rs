//! Command-line arguments for the `gitcli` binary

use clap::{ColorChoice, Parser, Subcommand, ValueHint};
use colorchoice_clap::Color as ColorSelection;
use gitcli_core::config::GitCliConfig;
use std::path::PathBuf;

/// Interactive git shell with history recall, fuzzy search and aliases
#[derive(Parser, Debug)]
#[command(
    name = "gitcli",
    version,
    about = "Interactive git shell with history recall, fuzzy search and aliases",
    color = ColorChoice::Auto
)]
pub struct Cli {
    /// Color output selection (auto, always, never)
    #[command(flatten)]
    pub color: ColorSelection,

    /// Configuration file to load instead of the discovered one
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Directory the shell starts in; defaults to the current directory
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub workspace: Option<PathBuf>,

    /// History file location
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub history_file: Option<PathBuf>,

    /// Alias file location
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub alias_file: Option<PathBuf>,

    /// Theme identifier (classic, ocean, plain)
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write a configuration file populated with defaults
    SampleConfig {
        /// Output path
        #[arg(long, default_value = "gitcli.toml", value_hint = ValueHint::FilePath)]
        output: PathBuf,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut GitCliConfig) {
        if let Some(path) = &self.history_file {
            config.history.file = Some(path.clone());
        }
        if let Some(path) = &self.alias_file {
            config.aliases.file = Some(path.clone());
        }
        if let Some(theme) = &self.theme {
            config.ui.theme = theme.clone();
        }
        if self.no_banner {
            config.ui.show_banner = false;
        }
    }

    /// Default tracing filter when `GITCLI_LOG` is unset.
    pub fn default_log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "warn" }
    }
}

use anyhow::{Context, Result};
use clap::Parser;
use gitcli::cli::{Cli, Commands};
use gitcli::repl::{Repl, ReplParts};
use gitcli_core::config::constants::env;
use gitcli_core::config::{ConfigManager, GitCliConfig};
use gitcli_core::ui::theme;
use gitcli_core::{AnsiRenderer, FileLineStore, GitCli, OsSystem};
use std::io;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Cli::parse();
    args.color.write_global();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(env::LOG_FILTER)
                .unwrap_or_else(|_| EnvFilter::new(args.default_log_level())),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Some(Commands::SampleConfig { output }) = &args.command {
        GitCliConfig::create_sample_config(output)?;
        println!("Wrote sample configuration to {}", output.display());
        return Ok(());
    }

    let workspace = match &args.workspace {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    let workspace = std::fs::canonicalize(&workspace)
        .with_context(|| format!("Workspace not found: {}", workspace.display()))?;

    let mut manager = match &args.config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => ConfigManager::load_from_workspace(&workspace)?,
    };
    args.apply_overrides(manager.config_mut());
    manager.ensure_config_dir();
    if let Some(path) = manager.config_path() {
        debug!(path = %path.display(), "using configuration file");
    }

    let config = manager.config().clone();
    if let Err(err) = theme::set_active_theme(&config.ui.theme) {
        warn!("{err}; falling back to {}", theme::DEFAULT_THEME_ID);
    }

    let parts = ReplParts {
        history_store: Box::new(FileLineStore::new(manager.history_path())),
        alias_store: Box::new(FileLineStore::new(manager.alias_path())),
        repository: Box::new(GitCli::from_config(&config.git)),
        system: Box::new(OsSystem::new(workspace)),
        renderer: AnsiRenderer::stdout(),
    };

    let mut repl = Repl::new(&config, parts);
    repl.run(io::stdin().lock())
}

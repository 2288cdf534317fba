//! The interactive read-eval-print loop
//!
//! Each non-empty line is recorded in history, resolved against the alias
//! table and dispatched. The loop stops on `exit`/`quit` or end of input;
//! history and aliases are persisted on the way out.

mod dispatch;
mod welcome;

pub use dispatch::Outcome;

use anyhow::Result;
use gitcli_core::config::GitCliConfig;
use gitcli_core::config::constants::prompt;
use gitcli_core::{
    AliasTable, AnsiRenderer, CommandHistory, LineStore, MessageStyle, Repository, System,
};
use std::io::BufRead;
use tracing::{debug, info, warn};

/// Display and behaviour knobs taken from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplSettings {
    pub history_display_limit: usize,
    pub search_display_limit: usize,
    pub default_log_count: usize,
    pub show_banner: bool,
}

impl From<&GitCliConfig> for ReplSettings {
    fn from(config: &GitCliConfig) -> Self {
        Self {
            history_display_limit: config.history.display_limit,
            search_display_limit: config.search.display_limit,
            default_log_count: config.git.default_log_count,
            show_banner: config.ui.show_banner,
        }
    }
}

/// Collaborators the shell is assembled from.
pub struct ReplParts {
    pub history_store: Box<dyn LineStore>,
    pub alias_store: Box<dyn LineStore>,
    pub repository: Box<dyn Repository>,
    pub system: Box<dyn System>,
    pub renderer: AnsiRenderer,
}

pub struct Repl {
    settings: ReplSettings,
    history: CommandHistory,
    aliases: AliasTable,
    history_store: Box<dyn LineStore>,
    alias_store: Box<dyn LineStore>,
    repository: Box<dyn Repository>,
    system: Box<dyn System>,
    renderer: AnsiRenderer,
}

impl Repl {
    /// Build a shell and load persisted history and aliases.
    pub fn new(config: &GitCliConfig, parts: ReplParts) -> Self {
        let mut history = CommandHistory::new(config.history.max_entries);
        history.load(parts.history_store.as_ref());
        let mut aliases = AliasTable::new();
        aliases.load(parts.alias_store.as_ref());
        debug!(
            history = history.len(),
            aliases = aliases.len(),
            "loaded shell state"
        );

        Self {
            settings: ReplSettings::from(config),
            history,
            aliases,
            history_store: parts.history_store,
            alias_store: parts.alias_store,
            repository: parts.repository,
            system: parts.system,
            renderer: parts.renderer,
        }
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// `[<branch>] > ` inside a repository, `[no-git] > ` elsewhere.
    pub fn prompt(&self) -> String {
        let branch = self
            .repository
            .current_branch(self.system.current_dir())
            .unwrap_or_else(|| prompt::NO_REPOSITORY.to_string());
        format!("[{branch}]{}", prompt::SUFFIX)
    }

    /// Read and dispatch lines until `exit` or end of input.
    ///
    /// History and aliases are persisted however the loop ends; an error that
    /// stopped the loop is returned after that.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let outcome = self.read_loop(&mut input);
        if let Err(err) = &outcome {
            warn!("shell loop stopped: {err:#}");
        }
        let saved = self.shutdown();
        outcome.and(saved)
    }

    fn read_loop<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        if self.settings.show_banner {
            welcome::render_banner(&mut self.renderer)?;
        }

        let mut buffer = Vec::new();
        loop {
            self.renderer.blank()?;
            let prompt = self.prompt();
            self.renderer.inline(MessageStyle::Prompt, &prompt)?;

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                debug!("end of input");
                self.renderer.blank()?;
                return Ok(());
            }

            let line = String::from_utf8_lossy(&buffer);
            if let Outcome::Exit = self.handle_line(&line)? {
                return Ok(());
            }
        }
    }

    /// Record and dispatch a single input line.
    pub fn handle_line(&mut self, raw: &str) -> Result<Outcome> {
        let input = raw.trim();
        if input.is_empty() {
            return Ok(Outcome::Continue);
        }
        self.history.append(input);

        let Some(command) = gitcli_core::resolve(input, &self.aliases) else {
            return Ok(Outcome::Continue);
        };
        self.dispatch(&command)
    }

    fn shutdown(&mut self) -> Result<()> {
        let notice = self.renderer.line(MessageStyle::Info, "Saving configuration...");
        self.history.save(self.history_store.as_ref());
        self.aliases.save(self.alias_store.as_ref());
        info!(
            history = self.history.len(),
            aliases = self.aliases.len(),
            "persisted shell state"
        );
        notice?;
        self.renderer.line(MessageStyle::Info, "Goodbye!")?;
        Ok(())
    }
}

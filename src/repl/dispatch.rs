use super::{Repl, welcome};
use anyhow::Result;
use gitcli_core::commands::{self, BuiltinCommand};
use gitcli_core::fuzzy;
use gitcli_core::repository::{RepoError, RepoResult};
use gitcli_core::{MessageStyle, ResolvedCommand};
use tracing::{debug, warn};

/// What the loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

impl Repl {
    pub(super) fn dispatch(&mut self, command: &ResolvedCommand) -> Result<Outcome> {
        let Some(info) = command.builtin() else {
            self.unknown_command(&command.verb)?;
            return Ok(Outcome::Continue);
        };
        debug!(verb = %command.verb, command = ?info.command, args = ?command.args, "dispatching");

        let args = command.args.as_slice();
        let workdir = self.system.current_dir().to_path_buf();
        match info.command {
            BuiltinCommand::Help => welcome::render_help(&mut self.renderer)?,
            BuiltinCommand::Exit => return Ok(Outcome::Exit),
            BuiltinCommand::Init => {
                let result = self.repository.init(&workdir);
                self.report(result)?;
            }
            BuiltinCommand::Status => {
                let result = self.repository.status(&workdir);
                self.report(result)?;
            }
            BuiltinCommand::Add => {
                let result = self.repository.stage(&workdir, args);
                self.report(result)?;
            }
            BuiltinCommand::Commit => match commit_message(args) {
                Some(message) => {
                    let result = self.repository.commit(&workdir, &message);
                    self.report(result)?;
                }
                None => self.usage("Commit message required")?,
            },
            BuiltinCommand::Push => {
                let result = self.repository.push(&workdir);
                self.report(result)?;
            }
            BuiltinCommand::Pull => {
                let result = self.repository.pull(&workdir);
                self.report(result)?;
            }
            BuiltinCommand::Branch => self.branch(args)?,
            BuiltinCommand::Checkout => match args.first() {
                Some(name) => {
                    let result = self.repository.checkout(&workdir, name);
                    self.report(result)?;
                }
                None => self.usage("Branch name required")?,
            },
            BuiltinCommand::Log => match log_count(args, self.settings.default_log_count) {
                Some(count) => {
                    let result = self.repository.log(&workdir, count);
                    self.report(result)?;
                }
                None => self.usage("Usage: log [count]")?,
            },
            BuiltinCommand::Diff => {
                let result = self.repository.diff(&workdir);
                self.report(result)?;
            }
            BuiltinCommand::History => self.show_history()?,
            BuiltinCommand::Search => self.search(args)?,
            BuiltinCommand::Alias => self.alias(args)?,
            BuiltinCommand::Unalias => self.unalias(args)?,
            BuiltinCommand::Exec => self.exec(args)?,
            BuiltinCommand::Pwd => {
                let cwd = self.system.current_dir().display().to_string();
                self.renderer.line(MessageStyle::Output, &cwd)?;
            }
            BuiltinCommand::Cd => match self.system.change_dir(args.first().map(String::as_str)) {
                Ok(path) => self.renderer.line(
                    MessageStyle::Output,
                    &format!("Changed directory to: {}", path.display()),
                )?,
                Err(err) => self.renderer.line(MessageStyle::Error, &err.to_string())?,
            },
            BuiltinCommand::Ls => self.list_files()?,
            BuiltinCommand::Clear => self.renderer.clear_screen()?,
        }
        Ok(Outcome::Continue)
    }

    fn report(&mut self, result: RepoResult<String>) -> Result<()> {
        match result {
            Ok(text) => self.renderer.line(MessageStyle::Output, &text),
            Err(RepoError::NotARepository) => self
                .renderer
                .line(MessageStyle::Info, &RepoError::NotARepository.to_string()),
            Err(err) => {
                warn!("repository operation failed: {err}");
                self.renderer.line(MessageStyle::Error, &err.to_string())
            }
        }
    }

    fn usage(&mut self, message: &str) -> Result<()> {
        self.renderer.line(MessageStyle::Info, message)
    }

    fn unknown_command(&mut self, verb: &str) -> Result<()> {
        self.renderer
            .line(MessageStyle::Error, &format!("Unknown command: {verb}"))?;
        if let Some(suggestion) = commands::suggestion_for(verb) {
            self.renderer
                .line(MessageStyle::Info, &format!("Did you mean '{suggestion}'?"))?;
        }
        self.renderer
            .line(MessageStyle::Info, "Type 'help' for available commands")
    }

    fn branch(&mut self, args: &[String]) -> Result<()> {
        let workdir = self.system.current_dir().to_path_buf();
        let sub = args.first().map(String::as_str);
        let name = args.get(1);
        let result = match (sub, name) {
            (Some("create" | "-c"), Some(name)) => self.repository.create_branch(&workdir, name),
            (Some("create" | "-c"), None) => {
                return self.usage("Usage: branch create <branch-name>");
            }
            (Some("delete" | "-d"), Some(name)) => self.repository.delete_branch(&workdir, name),
            (Some("delete" | "-d"), None) => {
                return self.usage("Usage: branch delete <branch-name>");
            }
            _ => self.repository.list_branches(&workdir),
        };
        self.report(result)
    }

    fn show_history(&mut self) -> Result<()> {
        if self.history.is_empty() {
            return self.usage("No command history available");
        }
        let lines: Vec<String> = self
            .history
            .recent(self.settings.history_display_limit)
            .map(|(position, entry)| format!("{position}. {entry}"))
            .collect();
        self.renderer.line(MessageStyle::Header, "Command History:")?;
        self.renderer.line(MessageStyle::Output, &lines.join("\n"))
    }

    fn search(&mut self, args: &[String]) -> Result<()> {
        if args.is_empty() {
            return self.usage("Usage: search <query>");
        }
        let query = args.join(" ");
        let entries = self.history.snapshot();
        // The search line itself was just recorded; leave it out.
        let candidates = &entries[..entries.len().saturating_sub(1)];
        let results = fuzzy::search(&query, candidates);
        if results.is_empty() {
            return self.usage("No matching commands found");
        }

        let lines: Vec<String> = results
            .iter()
            .take(self.settings.search_display_limit)
            .enumerate()
            .map(|(index, entry)| format!("{}. {entry}", index + 1))
            .collect();
        self.renderer.line(MessageStyle::Header, "Search results:")?;
        self.renderer.line(MessageStyle::Output, &lines.join("\n"))
    }

    fn alias(&mut self, args: &[String]) -> Result<()> {
        match args {
            [] => {
                let listing = self.aliases.list();
                if listing.is_empty() {
                    return self.usage("No aliases defined");
                }
                let lines: Vec<String> = listing
                    .into_iter()
                    .map(|(name, expansion)| format!("  {name} -> {expansion}"))
                    .collect();
                self.renderer.line(MessageStyle::Header, "Defined aliases:")?;
                self.renderer.line(MessageStyle::Output, &lines.join("\n"))
            }
            [name] => match self.aliases.get(name) {
                Some(expansion) => {
                    let line = format!("{name} -> {expansion}");
                    self.renderer.line(MessageStyle::Output, &line)
                }
                None => self.usage(&format!("Alias not found: {name}")),
            },
            [name, rest @ ..] => {
                let expansion = rest.join(" ");
                match self.aliases.set(name.as_str(), expansion.as_str()) {
                    Ok(()) => self.renderer.line(
                        MessageStyle::Output,
                        &format!("Alias created: {name} -> {expansion}"),
                    ),
                    Err(err) => self.renderer.line(MessageStyle::Error, &err.to_string()),
                }
            }
        }
    }

    fn unalias(&mut self, args: &[String]) -> Result<()> {
        let Some(name) = args.first() else {
            return self.usage("Usage: unalias <name>");
        };
        match self.aliases.remove(name) {
            Some(_) => self
                .renderer
                .line(MessageStyle::Output, &format!("Alias removed: {name}")),
            None => self.usage(&format!("Alias not found: {name}")),
        }
    }

    fn exec(&mut self, args: &[String]) -> Result<()> {
        if args.is_empty() {
            return self.usage("Usage: exec <command>");
        }
        match self.system.spawn(args) {
            Ok(0) => Ok(()),
            Ok(code) => self
                .renderer
                .line(MessageStyle::Error, &format!("Command exited with code: {code}")),
            Err(err) => self.renderer.line(MessageStyle::Error, &err.to_string()),
        }
    }

    fn list_files(&mut self) -> Result<()> {
        match self.system.list_dir() {
            Ok(entries) => {
                let lines: Vec<String> = entries
                    .iter()
                    .map(|entry| {
                        let tag = if entry.is_dir { "[DIR] " } else { "[FILE]" };
                        format!("{tag} {}", entry.name)
                    })
                    .collect();
                if lines.is_empty() {
                    return Ok(());
                }
                self.renderer.line(MessageStyle::Output, &lines.join("\n"))
            }
            Err(err) => self.renderer.line(MessageStyle::Error, &err.to_string()),
        }
    }
}

/// Commit message from `commit` arguments.
///
/// A leading `-m` is dropped and one pair of matching surrounding quotes is
/// stripped. Returns `None` when nothing remains.
fn commit_message(args: &[String]) -> Option<String> {
    let args = match args.first().map(String::as_str) {
        Some("-m") => &args[1..],
        _ => args,
    };
    let joined = args.join(" ");
    let trimmed = joined.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|quote| {
            trimmed
                .strip_prefix(*quote)
                .and_then(|inner| inner.strip_suffix(*quote))
        })
        .unwrap_or(trimmed);
    (!unquoted.trim().is_empty()).then(|| unquoted.to_string())
}

/// Entry count for `log`; `None` for an unparsable or zero count.
fn log_count(args: &[String], default: usize) -> Option<usize> {
    match args.first() {
        None => Some(default),
        Some(raw) => raw.parse::<usize>().ok().filter(|count| *count > 0),
    }
}

//! Catalogue of built-in shell commands
//!
//! Each entry carries its canonical name, accepted synonyms and the help text
//! shown by `help`. Lookup is by lower-cased verb.

use crate::fuzzy;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in actions understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinCommand {
    Help,
    Exit,
    Init,
    Status,
    Add,
    Commit,
    Push,
    Pull,
    Branch,
    Checkout,
    Log,
    Diff,
    History,
    Search,
    Alias,
    Unalias,
    Exec,
    Pwd,
    Cd,
    Ls,
    Clear,
}

/// Help section a command is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Git,
    System,
    Tool,
}

impl CommandGroup {
    pub fn title(self) -> &'static str {
        match self {
            Self::Git => "Git Commands",
            Self::System => "System Commands",
            Self::Tool => "Tool Commands",
        }
    }

    pub const ALL: [CommandGroup; 3] = [Self::Git, Self::System, Self::Tool];
}

/// Metadata describing a built-in command.
#[derive(Clone, Copy, Debug)]
pub struct CommandInfo {
    pub command: BuiltinCommand,
    pub name: &'static str,
    pub synonyms: &'static [&'static str],
    pub usage: &'static str,
    pub description: &'static str,
    pub group: CommandGroup,
}

impl CommandInfo {
    /// Canonical name followed by synonyms.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.name).chain(self.synonyms.iter().copied())
    }
}

/// Command definitions in display order.
pub static COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        command: BuiltinCommand::Init,
        name: "init",
        synonyms: &[],
        usage: "init",
        description: "Initialise a git repository here",
        group: CommandGroup::Git,
    },
    CommandInfo {
        command: BuiltinCommand::Status,
        name: "status",
        synonyms: &["st"],
        usage: "status, st",
        description: "Show git status",
        group: CommandGroup::Git,
    },
    CommandInfo {
        command: BuiltinCommand::Add,
        name: "add",
        synonyms: &[],
        usage: "add [files...]",
        description: "Stage files (all when omitted)",
        group: CommandGroup::Git,
    },
    CommandInfo {
        command: BuiltinCommand::Commit,
        name: "commit",
        synonyms: &["ci"],
        usage: "commit, ci <msg>",
        description: "Commit staged changes",
        group: CommandGroup::Git,
    },
    CommandInfo {
        command: BuiltinCommand::Push,
        name: "push",
        synonyms: &[],
        usage: "push",
        description: "Push to remote",
        group: CommandGroup::Git,
    },
    CommandInfo {
        command: BuiltinCommand::Pull,
        name: "pull",
        synonyms: &[],
        usage: "pull",
        description: "Pull from remote",
        group: CommandGroup::Git,
    },
    CommandInfo {
        command: BuiltinCommand::Branch,
        name: "branch",
        synonyms: &["br"],
        usage: "branch, br [create|delete <name>]",
        description: "List, create or delete branches",
        group: CommandGroup::Git,
    },
    CommandInfo {
        command: BuiltinCommand::Checkout,
        name: "checkout",
        synonyms: &["co"],
        usage: "checkout, co <branch>",
        description: "Switch branch",
        group: CommandGroup::Git,
    },
    CommandInfo {
        command: BuiltinCommand::Log,
        name: "log",
        synonyms: &[],
        usage: "log [n]",
        description: "Show commit log",
        group: CommandGroup::Git,
    },
    CommandInfo {
        command: BuiltinCommand::Diff,
        name: "diff",
        synonyms: &[],
        usage: "diff",
        description: "Show changed files",
        group: CommandGroup::Git,
    },
    CommandInfo {
        command: BuiltinCommand::Exec,
        name: "exec",
        synonyms: &[],
        usage: "exec <command...>",
        description: "Execute a system command",
        group: CommandGroup::System,
    },
    CommandInfo {
        command: BuiltinCommand::Pwd,
        name: "pwd",
        synonyms: &[],
        usage: "pwd",
        description: "Show current directory",
        group: CommandGroup::System,
    },
    CommandInfo {
        command: BuiltinCommand::Cd,
        name: "cd",
        synonyms: &[],
        usage: "cd [path]",
        description: "Change directory (home when omitted)",
        group: CommandGroup::System,
    },
    CommandInfo {
        command: BuiltinCommand::Ls,
        name: "ls",
        synonyms: &[],
        usage: "ls",
        description: "List files",
        group: CommandGroup::System,
    },
    CommandInfo {
        command: BuiltinCommand::Clear,
        name: "clear",
        synonyms: &[],
        usage: "clear",
        description: "Clear screen",
        group: CommandGroup::System,
    },
    CommandInfo {
        command: BuiltinCommand::History,
        name: "history",
        synonyms: &["hist"],
        usage: "history, hist",
        description: "Show command history",
        group: CommandGroup::Tool,
    },
    CommandInfo {
        command: BuiltinCommand::Search,
        name: "search",
        synonyms: &[],
        usage: "search <query>",
        description: "Fuzzy search history",
        group: CommandGroup::Tool,
    },
    CommandInfo {
        command: BuiltinCommand::Alias,
        name: "alias",
        synonyms: &[],
        usage: "alias [name [command...]]",
        description: "List, show or create aliases",
        group: CommandGroup::Tool,
    },
    CommandInfo {
        command: BuiltinCommand::Unalias,
        name: "unalias",
        synonyms: &[],
        usage: "unalias <name>",
        description: "Remove an alias",
        group: CommandGroup::Tool,
    },
    CommandInfo {
        command: BuiltinCommand::Help,
        name: "help",
        synonyms: &[],
        usage: "help",
        description: "Show this help",
        group: CommandGroup::Tool,
    },
    CommandInfo {
        command: BuiltinCommand::Exit,
        name: "exit",
        synonyms: &["quit"],
        usage: "exit, quit",
        description: "Exit tool",
        group: CommandGroup::Tool,
    },
];

static BY_NAME: Lazy<HashMap<&'static str, &'static CommandInfo>> = Lazy::new(|| {
    COMMANDS
        .iter()
        .flat_map(|info| info.names().map(move |name| (name, info)))
        .collect()
});

static ALL_NAMES: Lazy<Vec<&'static str>> =
    Lazy::new(|| COMMANDS.iter().flat_map(|info| info.names()).collect());

/// Resolve a lower-cased verb to its command metadata.
pub fn lookup(verb: &str) -> Option<&'static CommandInfo> {
    BY_NAME.get(verb).copied()
}

/// Every recognised verb, synonyms included.
pub fn known_names() -> &'static [&'static str] {
    &ALL_NAMES
}

/// Commands listed under `group`, in display order.
pub fn in_group(group: CommandGroup) -> impl Iterator<Item = &'static CommandInfo> {
    COMMANDS.iter().filter(move |info| info.group == group)
}

/// Closest known verb for an unrecognised one, if any fuzzy-matches.
pub fn suggestion_for(verb: &str) -> Option<&'static str> {
    if verb.is_empty() {
        return None;
    }
    fuzzy::search(verb, known_names()).first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonyms_resolve_to_the_same_command() {
        assert_eq!(lookup("status").map(|i| i.command), Some(BuiltinCommand::Status));
        assert_eq!(lookup("st").map(|i| i.command), Some(BuiltinCommand::Status));
        assert_eq!(lookup("ci").map(|i| i.command), Some(BuiltinCommand::Commit));
        assert_eq!(lookup("quit").map(|i| i.command), Some(BuiltinCommand::Exit));
        assert_eq!(lookup("hist").map(|i| i.command), Some(BuiltinCommand::History));
        assert_eq!(lookup("co").map(|i| i.command), Some(BuiltinCommand::Checkout));
        assert_eq!(lookup("br").map(|i| i.command), Some(BuiltinCommand::Branch));
    }

    #[test]
    fn surface_matches_documented_verbs() {
        let expected = [
            "help", "exit", "quit", "init", "status", "st", "add", "commit", "ci", "push",
            "pull", "branch", "br", "checkout", "co", "log", "diff", "history", "hist",
            "search", "alias", "unalias", "exec", "pwd", "cd", "ls", "clear",
        ];
        for verb in expected {
            assert!(lookup(verb).is_some(), "missing verb {verb}");
        }
        assert_eq!(known_names().len(), expected.len());
    }

    #[test]
    fn unknown_verb_is_none() {
        assert!(lookup("frobnicate").is_none());
        assert!(lookup("STATUS").is_none());
    }

    #[test]
    fn names_are_unique() {
        assert_eq!(BY_NAME.len(), known_names().len());
    }

    #[test]
    fn suggestion_prefers_closest_verb() {
        assert_eq!(suggestion_for("stat"), Some("status"));
        assert_eq!(suggestion_for("chekout"), Some("checkout"));
        assert_eq!(suggestion_for("zzzz"), None);
    }

    #[test]
    fn every_group_has_commands() {
        for group in CommandGroup::ALL {
            assert!(in_group(group).next().is_some());
        }
    }
}

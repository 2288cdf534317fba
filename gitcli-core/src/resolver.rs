//! Turn a raw input line into a verb and its arguments
//!
//! Resolution tokenizes on whitespace, applies at most one alias expansion to
//! the leading token and lower-cases the resulting verb. Aliases are looked up
//! before built-ins, so an alias may shadow a built-in verb.

use crate::alias::AliasTable;
use crate::commands::{self, CommandInfo};
use tracing::debug;

/// A tokenized, alias-expanded input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    /// Lower-cased leading token.
    pub verb: String,
    /// Remaining tokens, case preserved.
    pub args: Vec<String>,
    /// Alias applied while resolving, if any.
    pub alias: Option<String>,
}

impl ResolvedCommand {
    /// Built-in command the verb names, if it is a known one.
    pub fn builtin(&self) -> Option<&'static CommandInfo> {
        commands::lookup(&self.verb)
    }

    /// Arguments joined back with single spaces.
    pub fn joined_args(&self) -> String {
        self.args.join(" ")
    }
}

/// Resolve `input` against `aliases`.
///
/// Returns `None` for blank input.
pub fn resolve(input: &str, aliases: &AliasTable) -> Option<ResolvedCommand> {
    let tokens = tokenize(input);
    let (head, rest) = tokens.split_first()?;

    let expansion = aliases
        .get(head)
        .map(|expansion| (head.to_string(), expansion))
        .or_else(|| {
            let folded = head.to_lowercase();
            aliases
                .get(&folded)
                .map(|expansion| (folded.clone(), expansion))
        });

    let (tokens, alias) = match expansion {
        Some((name, expansion)) => {
            let rewritten = format!("{expansion} {}", rest.join(" "));
            debug!(alias = %name, expanded = %rewritten.trim_end(), "expanded alias");
            (tokenize(&rewritten), Some(name))
        }
        None => (tokens.clone(), None),
    };

    // An alias that expands to nothing falls back to its own name.
    let mut tokens = tokens.into_iter();
    let verb = match tokens.next() {
        Some(verb) => verb,
        None => alias.clone()?,
    };

    Some(ResolvedCommand {
        verb: verb.to_lowercase(),
        args: tokens.collect(),
        alias,
    })
}

/// Split on runs of whitespace.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> AliasTable {
        let mut aliases = AliasTable::new();
        for (name, expansion) in pairs {
            aliases.set(*name, *expansion).unwrap();
        }
        aliases
    }

    #[test]
    fn blank_input_resolves_to_none() {
        assert!(resolve("", &AliasTable::new()).is_none());
        assert!(resolve("   \t ", &AliasTable::new()).is_none());
    }

    #[test]
    fn verb_is_lower_cased_and_args_keep_case() {
        let resolved = resolve("  CHECKOUT   Feature/X  ", &AliasTable::new()).unwrap();
        assert_eq!(resolved.verb, "checkout");
        assert_eq!(resolved.args, vec!["Feature/X"]);
        assert_eq!(resolved.alias, None);
    }

    #[test]
    fn alias_expansion_appends_original_args() {
        let aliases = table(&[("cm", "commit -m")]);
        let resolved = resolve("cm  fix   typo", &aliases).unwrap();
        assert_eq!(resolved.verb, "commit");
        assert_eq!(resolved.args, vec!["-m", "fix", "typo"]);
        assert_eq!(resolved.alias.as_deref(), Some("cm"));
    }

    #[test]
    fn alias_expansion_is_single_level() {
        let aliases = table(&[("a", "b"), ("b", "echo hi")]);
        let resolved = resolve("a", &aliases).unwrap();
        assert_eq!(resolved.verb, "b");
        assert!(resolved.args.is_empty());
    }

    #[test]
    fn alias_may_shadow_builtin() {
        let aliases = table(&[("help", "status")]);
        let resolved = resolve("help", &aliases).unwrap();
        assert_eq!(resolved.verb, "status");
    }

    #[test]
    fn alias_lookup_falls_back_to_lower_case() {
        let aliases = table(&[("st", "status")]);
        assert_eq!(resolve("ST", &aliases).unwrap().verb, "status");

        let exact = table(&[("Up", "pull"), ("up", "push")]);
        assert_eq!(resolve("Up", &exact).unwrap().verb, "pull");
        assert_eq!(resolve("up", &exact).unwrap().verb, "push");
    }

    #[test]
    fn expanded_verb_is_lower_cased() {
        let aliases = table(&[("s", "STATUS")]);
        assert_eq!(resolve("s", &aliases).unwrap().verb, "status");
    }

    #[test]
    fn builtin_lookup_uses_synonyms() {
        let resolved = resolve("ci done", &AliasTable::new()).unwrap();
        assert_eq!(
            resolved.builtin().map(|info| info.command),
            Some(crate::commands::BuiltinCommand::Commit)
        );
        assert!(resolve("bogus", &AliasTable::new()).unwrap().builtin().is_none());
    }

    #[test]
    fn empty_expansion_keeps_alias_name_as_verb() {
        let aliases = table(&[("noop", "")]);
        let resolved = resolve("noop arg", &aliases).unwrap();
        assert_eq!(resolved.verb, "arg");

        let resolved = resolve("noop", &aliases).unwrap();
        assert_eq!(resolved.verb, "noop");
    }
}

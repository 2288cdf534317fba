//! # gitcli-core - building blocks for the gitcli shell
//!
//! `gitcli-core` holds everything the interactive shell needs apart from the
//! read-eval-print loop itself: input history, user aliases, fuzzy search,
//! command resolution, and the collaborators that talk to git and to the
//! local system.
//!
//! ## Highlights
//!
//! - [`history::CommandHistory`]: bounded, ordered log of submitted lines.
//! - [`alias::AliasTable`]: user-defined shorthands persisted as `name=expansion`.
//! - [`fuzzy`]: substring-first, subsequence-fallback ranking.
//! - [`resolver::resolve`]: tokenizes input and applies one level of alias expansion.
//! - [`repository::Repository`] and [`system::System`]: the seams the shell
//!   drives, with [`repository::GitCli`] and [`system::OsSystem`] as defaults.
//! - [`config::ConfigManager`]: `gitcli.toml` discovery and defaults.
//!
//! ```rust,no_run
//! use gitcli_core::{AliasTable, resolve};
//!
//! let mut aliases = AliasTable::new();
//! aliases.set("st", "status").unwrap();
//! let command = resolve("st", &aliases).unwrap();
//! assert_eq!(command.verb, "status");
//! ```

pub mod alias;
pub mod commands;
pub mod config;
pub mod fuzzy;
pub mod history;
pub mod repository;
pub mod resolver;
pub mod store;
pub mod system;
pub mod ui;
pub mod utils;

pub use alias::{AliasError, AliasTable};
pub use commands::{BuiltinCommand, CommandGroup, CommandInfo};
pub use config::{ConfigManager, GitCliConfig};
pub use history::CommandHistory;
pub use repository::{GitCli, RepoError, Repository};
pub use resolver::{ResolvedCommand, resolve};
pub use store::{FileLineStore, LineStore};
pub use system::{DirEntryInfo, OsSystem, System, SystemError};
pub use utils::ansi::{AnsiRenderer, CaptureHandle, MessageStyle};

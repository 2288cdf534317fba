//! # gitcli - an interactive git shell
//!
//! The binary wires configuration, the terminal renderer and the default
//! collaborators from [`gitcli_core`] into a [`repl::Repl`]. The library side
//! exposes the same pieces so the shell can be driven from tests with
//! substitute repositories, systems and input streams.

pub mod cli;
pub mod repl;

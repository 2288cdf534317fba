//! # Utility Functions and Helpers
//!
//! ### ANSI output (`ansi`)
//! - **Styled lines**: per-role styling from the active theme
//! - **Stream routing**: errors to stderr, everything else to stdout
//! - **Capture**: an in-memory sink for driving the shell in tests
//!
//! ### Paths (`path`)
//! - **Home lookup**: `HOME`, `USERPROFILE`, then the platform default
//! - **Resolution**: `~` expansion and lexical `.`/`..` normalisation

pub mod ansi;
pub mod path;

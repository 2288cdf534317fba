//! Terminal presentation shared by the shell
//!
//! Themes map message roles to `anstyle` styles; the renderer in
//! [`crate::utils::ansi`] reads the active theme when writing.

pub mod theme;

pub use theme::{
    DEFAULT_THEME_ID, ThemeStyles, active_styles, active_theme_id, active_theme_label,
    available_themes, resolve_theme, set_active_theme,
};

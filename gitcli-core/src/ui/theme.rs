use anstyle::{AnsiColor, Color, RgbColor, Style};
use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Identifier for the default theme.
pub const DEFAULT_THEME_ID: &str = "classic";

/// Palette describing UI colors for the shell. `None` leaves the terminal default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    pub accent: Option<Color>,
    pub text: Option<Color>,
    pub muted: Option<Color>,
    pub alert: Option<Color>,
}

impl ThemePalette {
    fn style_from(color: Option<Color>, bold: bool) -> Style {
        let style = Style::new().fg_color(color);
        if bold { style.bold() } else { style }
    }

    fn build_styles(&self) -> ThemeStyles {
        ThemeStyles {
            info: Self::style_from(self.muted, false),
            output: Self::style_from(self.text, false),
            error: Self::style_from(self.alert, true),
            header: Self::style_from(self.accent, true),
            prompt: Self::style_from(self.accent, true),
        }
    }
}

/// Styles computed from palette colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeStyles {
    pub info: Style,
    pub output: Style,
    pub error: Style,
    pub header: Style,
    pub prompt: Style,
}

#[derive(Clone, Debug)]
pub struct ThemeDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub palette: ThemePalette,
}

#[derive(Clone, Debug)]
struct ActiveTheme {
    id: String,
    label: String,
    styles: ThemeStyles,
}

impl From<&ThemeDefinition> for ActiveTheme {
    fn from(theme: &ThemeDefinition) -> Self {
        Self {
            id: theme.id.to_string(),
            label: theme.label.to_string(),
            styles: theme.palette.build_styles(),
        }
    }
}

fn classic() -> ThemeDefinition {
    ThemeDefinition {
        id: "classic",
        label: "Classic",
        palette: ThemePalette {
            accent: Some(AnsiColor::Green.into()),
            text: None,
            muted: Some(AnsiColor::Cyan.into()),
            alert: Some(AnsiColor::Red.into()),
        },
    }
}

fn ocean() -> ThemeDefinition {
    ThemeDefinition {
        id: "ocean",
        label: "Ocean",
        palette: ThemePalette {
            accent: Some(Color::Rgb(RgbColor(0x5F, 0xB3, 0xD9))),
            text: Some(Color::Rgb(RgbColor(0xC8, 0xD3, 0xDE))),
            muted: Some(Color::Rgb(RgbColor(0x7A, 0x8C, 0x9E))),
            alert: Some(Color::Rgb(RgbColor(0xFF, 0x8A, 0x8A))),
        },
    }
}

fn plain() -> ThemeDefinition {
    ThemeDefinition {
        id: "plain",
        label: "Plain",
        palette: ThemePalette {
            accent: None,
            text: None,
            muted: None,
            alert: None,
        },
    }
}

static REGISTRY: Lazy<HashMap<&'static str, ThemeDefinition>> = Lazy::new(|| {
    [classic(), ocean(), plain()]
        .into_iter()
        .map(|theme| (theme.id, theme))
        .collect()
});

static ACTIVE: Lazy<RwLock<ActiveTheme>> =
    Lazy::new(|| RwLock::new(ActiveTheme::from(&classic())));

/// Set the active theme by identifier.
pub fn set_active_theme(theme_id: &str) -> Result<()> {
    let id_lc = theme_id.trim().to_lowercase();
    let theme = REGISTRY
        .get(id_lc.as_str())
        .ok_or_else(|| anyhow!("Unknown theme '{theme_id}'"))?;
    *ACTIVE.write() = ActiveTheme::from(theme);
    Ok(())
}

/// Get the identifier of the active theme.
pub fn active_theme_id() -> String {
    ACTIVE.read().id.clone()
}

/// Get the human-readable label of the active theme.
pub fn active_theme_label() -> String {
    ACTIVE.read().label.clone()
}

/// Get the current styles cloned from the active theme.
pub fn active_styles() -> ThemeStyles {
    ACTIVE.read().styles.clone()
}

/// Enumerate available theme identifiers.
pub fn available_themes() -> Vec<&'static str> {
    let mut keys: Vec<_> = REGISTRY.keys().copied().collect();
    keys.sort();
    keys
}

/// Resolve a theme identifier from configuration or CLI input.
pub fn resolve_theme(preferred: Option<String>) -> String {
    preferred
        .map(|candidate| candidate.trim().to_lowercase())
        .filter(|candidate| REGISTRY.contains_key(candidate.as_str()))
        .unwrap_or_else(|| DEFAULT_THEME_ID.to_string())
}

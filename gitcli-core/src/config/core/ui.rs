use crate::config::constants::defaults;
use serde::{Deserialize, Serialize};

/// Terminal presentation settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UiConfig {
    /// Theme identifier (`classic`, `ocean`, `plain`)
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Print the welcome banner on startup
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

fn default_theme() -> String {
    defaults::THEME.to_string()
}

fn default_show_banner() -> bool {
    defaults::SHOW_BANNER
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_banner: default_show_banner(),
        }
    }
}

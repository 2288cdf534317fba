pub mod git;
pub mod history;
pub mod ui;

pub use git::GitConfig;
pub use history::{AliasesConfig, HistoryConfig, SearchConfig};
pub use ui::UiConfig;

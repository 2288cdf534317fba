use anyhow::Result;
use gitcli_core::commands::{self, CommandGroup};
use gitcli_core::{AnsiRenderer, MessageStyle};

const BANNER: &[&str] = &[
    "+---------------------------------------+",
    "|     Git CLI Workflow Automation       |",
    "+---------------------------------------+",
];

pub(super) fn render_banner(renderer: &mut AnsiRenderer) -> Result<()> {
    for line in BANNER {
        renderer.line(MessageStyle::Header, line)?;
    }
    renderer.line(
        MessageStyle::Info,
        &format!("Version {}", env!("CARGO_PKG_VERSION")),
    )?;
    renderer.blank()?;
    renderer.line(MessageStyle::Info, "Type 'help' for available commands")?;
    renderer.line(MessageStyle::Info, "Type 'exit' to quit")?;
    Ok(())
}

/// Help text grouped by section, generated from the command registry.
pub(super) fn render_help(renderer: &mut AnsiRenderer) -> Result<()> {
    let width = commands::COMMANDS
        .iter()
        .map(|info| info.usage.len())
        .max()
        .unwrap_or_default();

    renderer.blank()?;
    renderer.line(MessageStyle::Header, "=== Git CLI Tool Help ===")?;
    for group in CommandGroup::ALL {
        renderer.blank()?;
        renderer.line(MessageStyle::Header, &format!("{}:", group.title()))?;
        for info in commands::in_group(group) {
            renderer.line(
                MessageStyle::Output,
                &format!("  {:<width$} - {}", info.usage, info.description),
            )?;
        }
    }
    Ok(())
}

use crate::ui::theme;
use anstream::{AutoStream, ColorChoice};
use anstyle::{Reset, Style};
use anstyle_query::{clicolor, clicolor_force, no_color, term_supports_color};
use anyhow::Result;
use crossterm::{cursor, terminal};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Styles available for rendering messages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Output,
    Error,
    Header,
    Prompt,
}

impl MessageStyle {
    fn style(self) -> Style {
        let styles = theme::active_styles();
        match self {
            Self::Info => styles.info,
            Self::Output => styles.output,
            Self::Error => styles.error,
            Self::Header => styles.header,
            Self::Prompt => styles.prompt,
        }
    }
}

/// A line recorded by a capturing renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedLine {
    pub style: MessageStyle,
    pub text: String,
}

/// Read side of a capturing renderer.
#[derive(Clone, Debug, Default)]
pub struct CaptureHandle {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl CaptureHandle {
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines.lock().clone()
    }

    /// Captured text of the given style only.
    pub fn texts(&self, style: MessageStyle) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|line| line.style == style)
            .map(|line| line.text.clone())
            .collect()
    }

    /// All captured text joined by newlines, prompts included.
    pub fn transcript(&self) -> String {
        self.lines
            .lock()
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|line| line.text.contains(needle))
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

/// Terminal writer for shell output; errors go to stderr
pub struct AnsiRenderer {
    stdout: AutoStream<io::Stdout>,
    stderr: AutoStream<io::Stderr>,
    color: bool,
    sink: Option<CaptureHandle>,
}

impl AnsiRenderer {
    /// Create a renderer for the process's standard streams
    pub fn stdout() -> Self {
        let color = match ColorChoice::global() {
            ColorChoice::Always | ColorChoice::AlwaysAnsi => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                clicolor_force() || (!no_color() && clicolor().unwrap_or_else(term_supports_color))
            }
        };
        let choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: AutoStream::new(io::stdout(), choice),
            stderr: AutoStream::new(io::stderr(), choice),
            color,
            sink: None,
        }
    }

    /// Create a renderer that records lines instead of writing them
    pub fn capture() -> (Self, CaptureHandle) {
        let handle = CaptureHandle::default();
        let mut renderer = Self::stdout();
        renderer.color = false;
        renderer.sink = Some(handle.clone());
        (renderer, handle)
    }

    fn writer(&mut self, style: MessageStyle) -> &mut dyn Write {
        match style {
            MessageStyle::Error => &mut self.stderr,
            _ => &mut self.stdout,
        }
    }

    /// Write one line per `\n`-separated segment of `text`
    pub fn line(&mut self, style: MessageStyle, text: &str) -> Result<()> {
        if let Some(sink) = &self.sink {
            let mut lines = sink.lines.lock();
            let segments = if text.is_empty() {
                vec![""]
            } else {
                text.lines().collect()
            };
            lines.extend(segments.into_iter().map(|segment| CapturedLine {
                style,
                text: segment.to_string(),
            }));
            return Ok(());
        }

        let color = self.color;
        let ansi = style.style();
        let writer = self.writer(style);
        if text.is_empty() {
            writeln!(writer)?;
        }
        for segment in text.lines() {
            if color {
                writeln!(writer, "{ansi}{segment}{Reset}")?;
            } else {
                writeln!(writer, "{segment}")?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    /// Write styled text without a trailing newline
    pub fn inline(&mut self, style: MessageStyle, text: &str) -> Result<()> {
        if let Some(sink) = &self.sink {
            sink.lines.lock().push(CapturedLine {
                style,
                text: text.to_string(),
            });
            return Ok(());
        }
        let color = self.color;
        let ansi = style.style();
        let writer = self.writer(style);
        if color {
            write!(writer, "{ansi}{text}{Reset}")?;
        } else {
            write!(writer, "{text}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Blank separator line
    pub fn blank(&mut self) -> Result<()> {
        self.line(MessageStyle::Output, "")
    }

    /// Clear the terminal and home the cursor
    pub fn clear_screen(&mut self) -> Result<()> {
        if self.sink.is_some() {
            return Ok(());
        }
        crossterm::execute!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }
}

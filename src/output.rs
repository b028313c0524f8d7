//! Text sinks for player and media notifications.
//!
//! The player and media items only produce lines of text tagged with a
//! `Tone`; an `Output` decides where they go and how they look.

use std::io::{self, Write};

use crossterm::style::{self, StyledContent, Stylize};

/// Rough category of a line, used for styling.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Playing,
    Stopped,
    Notice,
    Detail,
}

/// Receiver of every line the player emits.
pub trait Output {
    fn line(&mut self, tone: Tone, text: &str);

    /// Emit an empty spacer line.
    fn blank(&mut self) {
        self.line(Tone::Plain, "");
    }
}

/// Writes lines to a terminal (or any writer), optionally coloured.
pub struct Console<W: Write> {
    writer: W,
    color: bool,
}

impl<W: Write> Console<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Write `prompt` without a trailing newline and flush so it shows up
    /// before input is read.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for Console<W> {
    fn line(&mut self, tone: Tone, text: &str) {
        let res = if self.color && !text.is_empty() {
            writeln!(self.writer, "{}", styled(tone, text))
        } else {
            writeln!(self.writer, "{text}")
        };
        if let Err(e) = res {
            log::warn!("failed to write to console: {e}");
        }
    }
}

fn styled(tone: Tone, text: &str) -> StyledContent<&str> {
    match tone {
        Tone::Plain => style::style(text),
        Tone::Heading => text.cyan().bold(),
        Tone::Playing => text.green().bold(),
        Tone::Stopped => text.red(),
        Tone::Notice => text.yellow(),
        Tone::Detail => text.dark_grey(),
    }
}

/// In-memory record of emitted lines.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Vec<(Tone, String)>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[(Tone, String)] {
        &self.lines
    }

    /// Text of every line, blank spacers included.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|(_, t)| t.as_str()).collect()
    }

    /// True if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|(_, t)| t.contains(needle))
    }

    /// Number of lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|(_, t)| t.contains(needle)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Output for Transcript {
    fn line(&mut self, tone: Tone, text: &str) {
        self.lines.push((tone, text.to_string()));
    }
}

//! Console commands: parsing one input line and applying it to the player.

use std::str::FromStr;

use crate::output::{Output, Tone};
use crate::player::Player;

/// Menu line listing the accepted commands.
pub const MENU: &str = "Enter command: play, stop, next, prev, info, list, help, exit";

/// A command read from the console (user -> player).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play,
    Stop,
    Next,
    Prev,
    /// Show details of the current item.
    Info,
    /// List the loaded collection.
    List,
    Help,
    Exit,
    /// Anything else, kept as typed (trimmed).
    Unknown(String),
}

impl Command {
    /// Parse a line of input. Case and surrounding whitespace are ignored.
    pub fn parse(line: &str) -> Self {
        let raw = line.trim();
        match raw.to_ascii_lowercase().as_str() {
            "play" => Self::Play,
            "stop" => Self::Stop,
            "next" => Self::Next,
            "prev" | "previous" => Self::Prev,
            "info" => Self::Info,
            "list" => Self::List,
            "help" => Self::Help,
            "exit" | "quit" => Self::Exit,
            _ => Self::Unknown(raw.to_string()),
        }
    }
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Whether the read loop should keep going after a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Apply `cmd` to `player`. Unknown commands are reported on the player's
/// output; the player itself never sees them.
pub fn dispatch<O: Output>(player: &mut Player<O>, cmd: &Command) -> Flow {
    log::debug!("dispatching {cmd:?}");
    match cmd {
        Command::Play => player.play(),
        Command::Stop => player.stop(),
        Command::Next => player.next(),
        Command::Prev => player.previous(),
        Command::Info => player.display_current_info(),
        Command::List => player.display_collection(),
        Command::Help => player.output_mut().line(Tone::Plain, MENU),
        Command::Exit => {
            player
                .output_mut()
                .line(Tone::Heading, "Exiting Music Player. Goodbye!");
            return Flow::Exit;
        }
        Command::Unknown(raw) => {
            log::debug!("unrecognised input {raw:?}");
            player.output_mut().line(Tone::Notice, "Unknown command.");
        }
    }
    Flow::Continue
}

#[cfg(test)]
mod tests;

use std::fmt;
use std::time::Duration;

use crate::error::MediaError;
use crate::output::{Output, Tone};

use super::format::format_hhmmss;
use super::info::{MediaInfo, require_text};
use super::item::{MediaItem, MediaKind, write_common_details};

/// A narrated book. Durations are shown as `HH:MM:SS` since they usually
/// run for hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBook {
    info: MediaInfo,
    author: String,
    narrator: String,
}

impl AudioBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        narrator: impl Into<String>,
        duration: Duration,
    ) -> Result<Self, MediaError> {
        let info = MediaInfo::new(title, duration)?;
        let author = require_text("author", author.into())?;
        let narrator = require_text("narrator", narrator.into())?;
        Ok(Self {
            info,
            author,
            narrator,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn narrator(&self) -> &str {
        &self.narrator
    }
}

impl MediaItem for AudioBook {
    fn title(&self) -> &str {
        self.info.title()
    }

    fn duration(&self) -> Duration {
        self.info.duration()
    }

    fn creator_info(&self) -> String {
        format!("{} (Narrated by: {})", self.author, self.narrator)
    }

    fn kind(&self) -> MediaKind {
        MediaKind::AudioBook
    }

    fn play(&self, out: &mut dyn Output) {
        out.blank();
        out.line(
            Tone::Playing,
            &format!("Playing AudioBook: {} by {}", self.title(), self.author),
        );
        out.line(
            Tone::Detail,
            &format!(
                "   Narrated by: {}, Duration: {}",
                self.narrator,
                format_hhmmss(self.duration())
            ),
        );
    }

    fn display_details(&self, out: &mut dyn Output) {
        write_common_details(self, out);
        out.line(Tone::Detail, &format!("  Author: {}", self.author));
        out.line(Tone::Detail, &format!("  Narrator: {}", self.narrator));
    }
}

impl fmt::Display for AudioBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.title(),
            self.author,
            format_hhmmss(self.duration())
        )
    }
}

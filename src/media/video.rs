use std::fmt;
use std::time::Duration;

use crate::error::MediaError;
use crate::output::{Output, Tone};

use super::format::format_mmss;
use super::info::{MediaInfo, require_text};
use super::item::{MediaItem, MediaKind, write_common_details};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    info: MediaInfo,
    actor: String,
    /// Free-form descriptor such as "DVD" or "1080p"; may be blank.
    format: String,
}

impl Video {
    pub fn new(
        title: impl Into<String>,
        actor: impl Into<String>,
        format: impl Into<String>,
        duration: Duration,
    ) -> Result<Self, MediaError> {
        let info = MediaInfo::new(title, duration)?;
        let actor = require_text("actor", actor.into())?;
        Ok(Self {
            info,
            actor,
            format: format.into(),
        })
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

impl MediaItem for Video {
    fn title(&self) -> &str {
        self.info.title()
    }

    fn duration(&self) -> Duration {
        self.info.duration()
    }

    fn creator_info(&self) -> String {
        self.actor.clone()
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Video
    }

    fn play(&self, out: &mut dyn Output) {
        out.blank();
        out.line(
            Tone::Playing,
            &format!("Playing Video: {} with {}", self.title(), self.actor),
        );
        out.line(
            Tone::Detail,
            &format!(
                "   Format: {}, Duration: {}",
                self.format,
                format_mmss(self.duration())
            ),
        );
    }

    fn display_details(&self, out: &mut dyn Output) {
        write_common_details(self, out);
        out.line(Tone::Detail, &format!("  Actor: {}", self.actor));
        out.line(Tone::Detail, &format!("  Format: {}", self.format));
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.title(),
            self.actor,
            format_mmss(self.duration())
        )
    }
}

use std::fmt;
use std::time::Duration;

use crate::error::MediaError;
use crate::output::{Output, Tone};

use super::format::format_mmss;
use super::info::{MediaInfo, require_text};
use super::item::{MediaItem, MediaKind, write_common_details};

/// Album shown for songs constructed without one.
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    info: MediaInfo,
    artist: String,
    album: String,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: Option<String>,
        duration: Duration,
    ) -> Result<Self, MediaError> {
        let info = MediaInfo::new(title, duration)?;
        let artist = require_text("artist", artist.into())?;
        Ok(Self {
            info,
            artist,
            album: album.unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
        })
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }
}

impl MediaItem for Song {
    fn title(&self) -> &str {
        self.info.title()
    }

    fn duration(&self) -> Duration {
        self.info.duration()
    }

    fn creator_info(&self) -> String {
        self.artist.clone()
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Song
    }

    fn play(&self, out: &mut dyn Output) {
        out.blank();
        out.line(
            Tone::Playing,
            &format!("Playing Song: {} by {}", self.title(), self.artist),
        );
        out.line(
            Tone::Detail,
            &format!(
                "   Album: {}, Duration: {}",
                self.album,
                format_mmss(self.duration())
            ),
        );
    }

    fn display_details(&self, out: &mut dyn Output) {
        write_common_details(self, out);
        out.line(Tone::Detail, &format!("  Album: {}", self.album));
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.title(),
            self.artist,
            format_mmss(self.duration())
        )
    }
}

use std::fmt;
use std::time::Duration;

use crate::output::{Output, Tone};

use super::format::format_mmss;

/// Which variant a media item is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MediaKind {
    Song,
    AudioBook,
    Video,
}

impl MediaKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Song => "Song",
            Self::AudioBook => "AudioBook",
            Self::Video => "Video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Capability set for anything the player can hold.
///
/// `Display` renders the compact one-line form used in listings:
/// `Title - Creator (duration)`.
pub trait MediaItem: fmt::Display + fmt::Debug {
    fn title(&self) -> &str;

    fn duration(&self) -> Duration;

    /// Human-readable description of who made the item.
    fn creator_info(&self) -> String;

    fn kind(&self) -> MediaKind;

    /// Emit the playback notification for this item.
    fn play(&self, out: &mut dyn Output);

    /// Emit the full detail block. Implementations start with
    /// `write_common_details` and append their own fields.
    fn display_details(&self, out: &mut dyn Output);
}

/// Write the title, creator and duration lines shared by every variant.
pub fn write_common_details(item: &dyn MediaItem, out: &mut dyn Output) {
    out.line(Tone::Detail, &format!("  Title: {}", item.title()));
    out.line(Tone::Detail, &format!("  Creator: {}", item.creator_info()));
    out.line(
        Tone::Detail,
        &format!("  Duration: {}", format_mmss(item.duration())),
    );
}

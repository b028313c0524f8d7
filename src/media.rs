//! Media items the player can hold and play.
//!
//! Every playable kind implements the `MediaItem` capability set. The shared
//! title/duration fields and their validation live in `MediaInfo`, which each
//! variant embeds.

mod audiobook;
mod format;
mod info;
mod item;
mod song;
mod video;

pub use audiobook::AudioBook;
pub use format::{format_hhmmss, format_mmss};
pub use info::MediaInfo;
pub use item::{MediaItem, MediaKind, write_common_details};
pub use song::{Song, UNKNOWN_ALBUM};
pub use video::Video;

//! The demo collection bundled with the binary.

use std::time::Duration;

use crate::error::MediaError;
use crate::media::{AudioBook, MediaItem, Song, Video};

fn hms(h: u64, m: u64, s: u64) -> Duration {
    Duration::from_secs(h * 3600 + m * 60 + s)
}

/// Build the mixed demo collection in playback order.
pub fn demo_collection() -> Result<Vec<Box<dyn MediaItem>>, MediaError> {
    let items: Vec<Box<dyn MediaItem>> = vec![
        Box::new(Song::new(
            "Bohemian Rhapsody",
            "Queen",
            Some("A Night at the Opera".into()),
            hms(0, 5, 54),
        )?),
        Box::new(Song::new(
            "Stairway to Heaven",
            "Led Zeppelin",
            Some("Led Zeppelin IV".into()),
            hms(0, 8, 0),
        )?),
        Box::new(AudioBook::new(
            "The Hobbit",
            "J.R.R. Tolkien",
            "Rob Inglis",
            hms(11, 6, 0),
        )?),
        Box::new(Song::new(
            "Hotel California",
            "Eagles",
            Some("Hotel California".into()),
            hms(0, 6, 30),
        )?),
        Box::new(Song::new(
            "Like a Rolling Stone",
            "Bob Dylan",
            Some("Highway 61 Revisited".into()),
            hms(0, 6, 12),
        )?),
        Box::new(Video::new(
            "Queen Live at Wembley",
            "Freddie Mercury",
            "DVD",
            hms(1, 30, 0),
        )?),
    ];
    Ok(items)
}

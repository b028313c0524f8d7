//! Player model types: `Player` and `PlaybackState`.
//!
//! `Player` owns the loaded collection and the output sink. Every operation
//! except `load_collection` is total: "nothing to do" is reported as a
//! notice on the sink and leaves the state unchanged.

use crate::error::PlayerError;
use crate::media::MediaItem;
use crate::output::{Output, Tone};

/// Collection name shown before anything has been loaded.
pub const NO_PLAYLIST: &str = "No Playlist Loaded";
/// Collection name used when `load_collection` gets a blank name.
pub const UNNAMED_COLLECTION: &str = "Unnamed Collection";

/// Transport state derived from the collection and the playing flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// No items loaded; nothing is selected.
    Empty,
    Stopped,
    Playing,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Empty
    }
}

/// The playback engine.
pub struct Player<O: Output> {
    items: Vec<Box<dyn MediaItem>>,
    /// `None` exactly when `items` is empty.
    cursor: Option<usize>,
    playing: bool,
    collection_name: String,
    out: O,
}

impl<O: Output> Player<O> {
    /// Create an empty player that writes notifications to `out`.
    pub fn new(out: O) -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
            playing: false,
            collection_name: NO_PLAYLIST.to_string(),
            out,
        }
    }

    /// Replace the current collection with `items`.
    ///
    /// `None` is rejected and leaves the player untouched; an empty list is
    /// valid and moves the player to `PlaybackState::Empty`.
    pub fn load_collection(
        &mut self,
        items: Option<Vec<Box<dyn MediaItem>>>,
        name: &str,
    ) -> Result<(), PlayerError> {
        let items = items.ok_or(PlayerError::MissingItems)?;

        self.stop();
        self.items.clear();
        self.items.extend(items);
        self.collection_name = if name.trim().is_empty() {
            UNNAMED_COLLECTION.to_string()
        } else {
            name.to_string()
        };
        self.cursor = if self.items.is_empty() { None } else { Some(0) };
        self.playing = false;

        log::info!(
            "loaded collection '{}' ({} items)",
            self.collection_name,
            self.items.len()
        );

        self.out.blank();
        self.out.line(
            Tone::Heading,
            &format!(
                "Loaded '{}' with {} items.",
                self.collection_name,
                self.items.len()
            ),
        );
        if let Some(first) = self.items.first() {
            self.out
                .line(Tone::Plain, &format!("   Ready to play: {}", first.title()));
        }
        Ok(())
    }

    /// The selected item, if any.
    pub fn current_item(&self) -> Option<&dyn MediaItem> {
        self.cursor
            .and_then(|i| self.items.get(i))
            .map(|item| &**item)
    }

    /// Start (or restart) playback of the selected item.
    pub fn play(&mut self) {
        match self.cursor.and_then(|i| self.items.get(i)) {
            Some(item) => {
                self.playing = true;
                log::debug!("playing '{}'", item.title());
                item.play(&mut self.out);
            }
            None => {
                self.playing = false;
                self.out.line(
                    Tone::Notice,
                    "Cannot play. Playlist is empty or no item selected.",
                );
            }
        }
    }

    /// Stop playback. Silent when already stopped.
    pub fn stop(&mut self) {
        if self.playing {
            self.playing = false;
            log::debug!("playback stopped");
            self.out.blank();
            self.out.line(Tone::Stopped, "Playback Stopped.");
        }
    }

    /// Advance to the next item, keeping the play/stop mode.
    ///
    /// At the last item this reports the end of the collection and stops;
    /// the cursor stays on the last item.
    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }

        let last = self.items.len() - 1;
        match self.cursor {
            Some(i) if i < last => {
                self.cursor = Some(i + 1);
                self.announce_move("Skipped to Next");
                self.refresh_current();
            }
            _ => {
                log::debug!("next at end of collection");
                self.out.blank();
                self.out.line(Tone::Notice, "Reached end of the playlist.");
                self.stop();
                self.cursor = Some(last);
            }
        }
    }

    /// Step back to the previous item, keeping the play/stop mode.
    ///
    /// There is no wraparound: at the first item the current item is played
    /// again (when playing) or its details are shown (when stopped).
    pub fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }

        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.announce_move("Skipped to Previous");
                self.refresh_current();
            }
            _ => {
                log::debug!("previous at start of collection");
                self.cursor = Some(0);
                self.refresh_current();
            }
        }
    }

    /// Show the position header and details of the selected item.
    pub fn display_current_info(&mut self) {
        let current = self
            .cursor
            .and_then(|i| self.items.get(i).map(|item| (i, item)));

        self.out.blank();
        match current {
            Some((i, item)) => {
                self.out.line(
                    Tone::Heading,
                    &format!(
                        "Current Item ({}/{}) in '{}':",
                        i + 1,
                        self.items.len(),
                        self.collection_name
                    ),
                );
                item.display_details(&mut self.out);
            }
            None => {
                self.out.line(Tone::Notice, "No item currently selected.");
            }
        }
    }

    /// List the whole collection in compact form, marking the selected item.
    pub fn display_collection(&mut self) {
        self.out.blank();
        self.out.line(
            Tone::Heading,
            &format!("--- Playlist: {} ---", self.collection_name),
        );
        if self.items.is_empty() {
            self.out.line(Tone::Plain, " (Empty)");
            return;
        }

        for (i, item) in self.items.iter().enumerate() {
            let marker = if Some(i) == self.cursor {
                " <- Current"
            } else {
                ""
            };
            self.out
                .line(Tone::Plain, &format!(" {}. {}{}", i + 1, item, marker));
        }
        self.out.line(Tone::Heading, "-----------------------------");
    }

    pub fn state(&self) -> PlaybackState {
        match (self.cursor, self.playing) {
            (None, _) => PlaybackState::Empty,
            (Some(_), false) => PlaybackState::Stopped,
            (Some(_), true) => PlaybackState::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn output(&self) -> &O {
        &self.out
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.out
    }

    /// Consume the player and hand back its output sink.
    pub fn into_output(self) -> O {
        self.out
    }

    fn announce_move(&mut self, what: &str) {
        if let Some(item) = self.cursor.and_then(|i| self.items.get(i)) {
            log::debug!("{what}: cursor now {:?}", self.cursor);
            self.out.blank();
            self.out
                .line(Tone::Plain, &format!("{what}: {}", item.title()));
        }
    }

    /// Re-play the selected item when playing, otherwise show its details.
    fn refresh_current(&mut self) {
        if self.playing {
            self.play();
        } else if let Some(item) = self.cursor.and_then(|i| self.items.get(i)) {
            item.display_details(&mut self.out);
        }
    }
}

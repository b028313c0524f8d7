//! Playback engine: an ordered collection of media items, a cursor and a
//! play/stop transport flag.

mod model;

pub use model::*;

//! cadenza: a console media player.
//!
//! A `Player` holds an ordered collection of media items (songs, audiobooks,
//! videos) and steps through it on `play`/`stop`/`next`/`prev` commands read
//! from the console. Nothing is decoded; playing an item prints what would
//! be playing.

pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod media;
pub mod output;
pub mod player;
pub mod runtime;

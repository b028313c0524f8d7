//! Configuration loader and schema types.
//!
//! This module exposes the settings that shape the console session
//! (colours, prompt, demo collection, logging) and helpers to load them.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;

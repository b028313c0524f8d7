//! Error types for media construction and collection loading.

use thiserror::Error;

/// Construction validation failures for media items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MediaError {
    /// A required text field was empty or whitespace only.
    #[error("{field} cannot be empty")]
    Blank { field: &'static str },

    /// The duration was zero.
    #[error("duration must be positive")]
    NonPositiveDuration,
}

impl MediaError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match *self {
            Self::Blank { field } => field,
            Self::NonPositiveDuration => "duration",
        }
    }
}

/// Failures reported by the player when loading a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// `load_collection` was called without an item list.
    #[error("no items were provided to load")]
    MissingItems,
}

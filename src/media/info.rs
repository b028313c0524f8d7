use std::time::Duration;

use crate::error::MediaError;

/// Fields every media item carries: a title and a positive duration.
///
/// Both are fixed at construction; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaInfo {
    title: String,
    duration: Duration,
}

impl MediaInfo {
    /// Validate and build the shared fields.
    pub fn new(title: impl Into<String>, duration: Duration) -> Result<Self, MediaError> {
        let title = require_text("title", title.into())?;
        if duration.is_zero() {
            return Err(MediaError::NonPositiveDuration);
        }
        Ok(Self { title, duration })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Reject empty or whitespace-only values for a required field.
pub(crate) fn require_text(field: &'static str, value: String) -> Result<String, MediaError> {
    if value.trim().is_empty() {
        Err(MediaError::Blank { field })
    } else {
        Ok(value)
    }
}

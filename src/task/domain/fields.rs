//! Validated text fields for task records.

use super::TaskValidationError;
use serde::Serialize;
use std::fmt;

/// Validated task title.
///
/// Trimmed, non-empty, and at most [`TaskTitle::MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Largest permitted title length in characters.
    pub const MAX_CHARS: usize = 255;

    /// Creates a validated title, trimming surrounding whitespace first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::EmptyTitle`] when the trimmed value is
    /// empty and [`TaskValidationError::TitleTooLong`] when it exceeds
    /// [`Self::MAX_CHARS`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskValidationError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        let length = normalized.chars().count();
        if length > Self::MAX_CHARS {
            return Err(TaskValidationError::TitleTooLong {
                length,
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated task description.
///
/// Trimmed and at most [`TaskDescription::MAX_CHARS`] characters; the empty
/// description is valid and is the default for new tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Largest permitted description length in characters.
    pub const MAX_CHARS: usize = 2000;

    /// Creates a validated description, trimming surrounding whitespace first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::DescriptionTooLong`] when the trimmed
    /// value exceeds [`Self::MAX_CHARS`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskValidationError> {
        let raw = value.into();
        let normalized = raw.trim();
        let length = normalized.chars().count();
        if length > Self::MAX_CHARS {
            return Err(TaskValidationError::DescriptionTooLong {
                length,
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the empty description.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the description holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

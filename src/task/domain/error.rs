//! Error types for task payload validation.

use thiserror::Error;

/// Errors returned while validating task input payloads.
///
/// Each variant renders a human-readable reason through `Display` and names
/// the offending field via [`TaskValidationError::field`], so boundary
/// layers can report both without inspecting variant internals.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The title is empty or whitespace-only after trimming.
    #[error("title must not be empty or whitespace")]
    EmptyTitle,

    /// The title exceeds the maximum length after trimming.
    #[error("title must be at most {max} characters, got {length}")]
    TitleTooLong {
        /// Number of characters supplied.
        length: usize,
        /// Maximum permitted characters.
        max: usize,
    },

    /// The description exceeds the maximum length after trimming.
    #[error("description must be at most {max} characters, got {length}")]
    DescriptionTooLong {
        /// Number of characters supplied.
        length: usize,
        /// Maximum permitted characters.
        max: usize,
    },

    /// The search query is shorter than the minimum after trimming.
    #[error("search query must be at least {min} characters long")]
    QueryTooShort {
        /// Minimum required characters.
        min: usize,
    },

    /// The page limit is outside the supported range.
    #[error("limit must be between {min} and {max}, got {value}")]
    LimitOutOfRange {
        /// Supplied limit.
        value: u64,
        /// Smallest permitted limit.
        min: u64,
        /// Largest permitted limit.
        max: u64,
    },

    /// The page offset exceeds what the storage layer can address.
    #[error("skip value {value} exceeds the supported range")]
    SkipTooLarge {
        /// Supplied offset.
        value: u64,
    },
}

impl TaskValidationError {
    /// Returns the name of the field that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle | Self::TitleTooLong { .. } => "title",
            Self::DescriptionTooLong { .. } => "description",
            Self::QueryTooShort { .. } => "q",
            Self::LimitOutOfRange { .. } => "limit",
            Self::SkipTooLarge { .. } => "skip",
        }
    }
}

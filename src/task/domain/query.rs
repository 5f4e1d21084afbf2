//! Validated query values for listings and search.

use super::TaskValidationError;
use std::fmt;

/// Offset/limit window over the task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    skip: u64,
    limit: u64,
}

impl PageRequest {
    /// Number of records returned when no limit is supplied.
    pub const DEFAULT_LIMIT: u64 = 100;

    /// Largest permitted limit per page.
    pub const MAX_LIMIT: u64 = 1000;

    /// Largest offset representable in the current `PostgreSQL` schema.
    const MAX_PERSISTED_SKIP: u64 = i64::MAX.unsigned_abs();

    /// Creates a validated page request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::LimitOutOfRange`] when `limit` is zero
    /// or exceeds [`Self::MAX_LIMIT`], and [`TaskValidationError::SkipTooLarge`]
    /// when `skip` exceeds the schema-backed maximum (`i64::MAX`).
    pub const fn new(skip: u64, limit: u64) -> Result<Self, TaskValidationError> {
        if limit == 0 || limit > Self::MAX_LIMIT {
            return Err(TaskValidationError::LimitOutOfRange {
                value: limit,
                min: 1,
                max: Self::MAX_LIMIT,
            });
        }
        if skip > Self::MAX_PERSISTED_SKIP {
            return Err(TaskValidationError::SkipTooLarge { value: skip });
        }
        Ok(Self { skip, limit })
    }

    /// Returns the number of leading records to skip.
    #[must_use]
    pub const fn skip(self) -> u64 {
        self.skip
    }

    /// Returns the maximum number of records to return.
    #[must_use]
    pub const fn limit(self) -> u64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Validated free-text search query.
///
/// Trimmed and at least [`SearchQuery::MIN_CHARS`] characters, so a bare
/// letter cannot sweep the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Minimum query length in characters.
    pub const MIN_CHARS: usize = 2;

    /// Creates a validated search query, trimming surrounding whitespace
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::QueryTooShort`] when the trimmed value
    /// is shorter than [`Self::MIN_CHARS`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskValidationError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.chars().count() < Self::MIN_CHARS {
            return Err(TaskValidationError::QueryTooShort {
                min: Self::MIN_CHARS,
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the query as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SearchQuery {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

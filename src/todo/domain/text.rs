//! Validated text scalar for todo records.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trimmed, non-empty todo text bounded to the storage column width.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoText(String);

impl TodoText {
    /// Largest text length accepted by the storage schema.
    pub const MAX_LENGTH: usize = 500;

    /// Creates validated todo text.
    ///
    /// Surrounding whitespace is trimmed before validation, and the trimmed
    /// value is what gets stored.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyText`] when the value is empty after
    /// trimming, or [`TodoDomainError::TextTooLong`] when it exceeds
    /// [`Self::MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::EmptyText);
        }
        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TodoDomainError::TextTooLong {
                max: Self::MAX_LENGTH,
                got: length,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TodoText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

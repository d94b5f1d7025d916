//! Title and description value objects.
//!
//! Both trim surrounding whitespace at construction and enforce a length
//! ceiling; only the title rejects emptiness. Internal whitespace and
//! newlines are preserved verbatim.

use crate::model::ValidationError;
use std::fmt::{Display, Formatter};

const TITLE_MAX_CHARS: usize = 100;
const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Task title, non-empty and at most 100 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    /// Trims and validates a title.
    ///
    /// # Errors
    /// - `EmptyTitle` when nothing remains after trimming.
    /// - `TitleTooLong` past 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let length = trimmed.chars().count();
        if length > TITLE_MAX_CHARS {
            return Err(ValidationError::TitleTooLong { length });
        }
        Ok(Self(trimmed))
    }

    /// Title value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Title {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task description, possibly empty, at most 1000 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    /// Trims and validates a description.
    ///
    /// # Errors
    /// - `DescriptionTooLong` past 1000 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        let length = trimmed.chars().count();
        if length > DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::DescriptionTooLong { length });
        }
        Ok(Self(trimmed))
    }

    /// Description value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Description {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

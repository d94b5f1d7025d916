//! Task domain model: validated value objects and the task entity.
//!
//! # Responsibility
//! - Define the canonical task identity (slug) and its derivation rules.
//! - Keep every invariant a construction-time check, never a silent fixup.
//!
//! # Invariants
//! - A value object that exists is valid; there is no partially-valid state.
//! - Task identity is the slug; the numeric id is a read-derived view of it.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod slug;
pub mod task;
pub mod text;

/// Construction-time validation failure for domain value objects.
///
/// Always surfaced to the caller; the model never retries or corrects input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Slug value is empty.
    EmptySlug,
    /// Slug contains characters outside lowercase alphanumerics and hyphens.
    InvalidSlugCharacters { value: String },
    /// Slug has a leading, trailing, or doubled hyphen.
    SlugHyphenBoundary { value: String },
    /// Id supplied to the slug factory is empty.
    EmptyId,
    /// Title is empty after trimming (or normalizes to nothing in the slug factory).
    EmptyTitle,
    /// Title exceeds 100 characters after trimming.
    TitleTooLong { length: usize },
    /// Description exceeds 1000 characters after trimming.
    DescriptionTooLong { length: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySlug => write!(f, "slug cannot be empty"),
            Self::InvalidSlugCharacters { value } => write!(
                f,
                "slug `{value}` may only contain lowercase letters, numbers, and hyphens"
            ),
            Self::SlugHyphenBoundary { value } => write!(
                f,
                "slug `{value}` cannot start or end with a hyphen, or repeat hyphens"
            ),
            Self::EmptyId => write!(f, "id cannot be empty"),
            Self::EmptyTitle => write!(f, "title cannot be empty"),
            Self::TitleTooLong { length } => {
                write!(f, "title cannot exceed 100 characters, got {length}")
            }
            Self::DescriptionTooLong { length } => {
                write!(f, "description cannot exceed 1000 characters, got {length}")
            }
        }
    }
}

impl Error for ValidationError {}

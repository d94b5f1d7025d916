//! Slug value object.
//!
//! # Responsibility
//! - Validate the canonical task identifier grammar at construction.
//! - Derive a slug from a numeric-ish id and a free-form title.
//!
//! # Invariants
//! - Every constructed slug matches `^[a-z0-9]+(-[a-z0-9]+)*$`.
//! - The factory output is always accepted by `Slug::new`.

use crate::model::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid slug regex"));
static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid disallowed-char regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static HYPHEN_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-{2,}").expect("valid hyphen-run regex"));

/// Canonical lowercase-hyphenated task identifier; also the filename stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Validates and wraps a slug string.
    ///
    /// # Errors
    /// - `EmptySlug` for an empty value.
    /// - `InvalidSlugCharacters` for characters outside `[a-z0-9-]`.
    /// - `SlugHyphenBoundary` for leading/trailing/doubled hyphens.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptySlug);
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ValidationError::InvalidSlugCharacters { value });
        }
        if !SLUG_RE.is_match(&value) {
            return Err(ValidationError::SlugHyphenBoundary { value });
        }
        Ok(Self(value))
    }

    /// Derives a slug as `<id>-<normalized title>`.
    ///
    /// Normalization: lowercase, strip characters outside `[a-z0-9\s-]`,
    /// collapse whitespace runs and hyphen runs to single hyphens, trim
    /// hyphens at the ends.
    ///
    /// # Errors
    /// - `EmptyId` for an empty id.
    /// - `EmptyTitle` when the title normalizes to nothing.
    /// - Any `Slug::new` failure for a malformed id.
    pub fn from_id_and_title(id: &str, title: &str) -> Result<Self, ValidationError> {
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }

        let normalized = normalize_title(title);
        if normalized.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        Self::new(format!("{id}-{normalized}"))
    }

    /// Slug value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn normalize_title(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = DISALLOWED_RE.replace_all(lowered.trim(), "");
    let hyphenated = WHITESPACE_RE.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUN_RE.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

//! Task entity.
//!
//! # Responsibility
//! - Compose slug, title, description and the completion flag into one
//!   aggregate.
//! - Derive the slug exactly once at construction.
//!
//! # Invariants
//! - Two tasks are the same record iff their slugs are equal.
//! - Title and description are immutable after construction, so the
//!   slug-title relationship cannot drift without explicit reconstruction.
//! - `set_as_done`/`set_as_undone` are the only mutators and are idempotent.

use crate::model::slug::Slug;
use crate::model::text::{Description, Title};
use crate::model::ValidationError;

/// Aggregate of slug, title, description and completion state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    slug: Slug,
    title: Title,
    description: Description,
    is_done: bool,
}

impl Task {
    /// Creates a task, deriving its slug from `id` and the title.
    ///
    /// When `id` is omitted a random numeric string is generated. Two
    /// concurrent creations can then collide on id; sequential assignment
    /// lives in the creation use case, not here.
    ///
    /// # Errors
    /// Any slug-derivation failure (`EmptyId`, `EmptyTitle`, malformed id).
    pub fn new(
        title: Title,
        description: Description,
        is_done: bool,
        id: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let id = match id {
            Some(value) => value.to_string(),
            None => random_numeric_id(),
        };
        let slug = Slug::from_id_and_title(&id, title.as_str())?;
        Ok(Self {
            slug,
            title,
            description,
            is_done,
        })
    }

    /// Stable identity of this task.
    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Numeric-ish id: the slug segment before the first hyphen.
    pub fn id(&self) -> &str {
        let value = self.slug.as_str();
        value.split('-').next().unwrap_or(value)
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    /// Marks the task done. No-op when already done.
    pub fn set_as_done(&mut self) {
        self.is_done = true;
    }

    /// Marks the task not done. No-op when already undone.
    pub fn set_as_undone(&mut self) {
        self.is_done = false;
    }
}

fn random_numeric_id() -> String {
    rand::random::<u32>().to_string()
}

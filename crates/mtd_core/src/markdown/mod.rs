//! Markdown file primitives.
//!
//! # Responsibility
//! - Convert between `(typed front matter, body)` pairs and the delimited
//!   text stored on disk.
//! - Keep YAML details out of the repository layer.

pub mod front_matter;

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the boundary contract consumed by
//!   CLIs and protocol adapters.
//! - Exchange plain field values at the boundary, never internal value
//!   objects.

pub mod project_service;
pub mod task_service;

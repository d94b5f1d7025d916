//! Core domain logic for MarkTaskDown: one markdown file per task.
//! This crate is the single source of truth for task identity and
//! persistence invariants.

pub mod logging;
pub mod markdown;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use markdown::front_matter::{Document, FrontMatterError, FrontMatterResult};
pub use model::slug::Slug;
pub use model::task::Task;
pub use model::text::{Description, Title};
pub use model::ValidationError;
pub use repo::project_repo::{FsProjectRepository, ProjectRepository};
pub use repo::task_repo::{FsTaskRepository, TaskFrontMatter, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use service::project_service::{InitializeProjectResult, ProjectService};
pub use service::task_service::{CreateTaskRequest, TaskRecord, TaskService, TaskServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

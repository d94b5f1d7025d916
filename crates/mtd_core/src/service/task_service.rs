//! Task use-case service.
//!
//! # Responsibility
//! - Provide create/get/list/set-done/set-undone/delete entry points over a
//!   task repository.
//! - Assign sequential numeric ids to tasks created without one.
//!
//! # Invariants
//! - Boundary types carry plain strings and bools; value objects stay
//!   internal.
//! - Absence is a clean negative for reads and a use-case error for
//!   mutations, so callers can tell "nothing to do" from "broken".

use crate::model::slug::Slug;
use crate::model::task::Task;
use crate::model::text::{Description, Title};
use crate::model::ValidationError;
use crate::repo::task_repo::TaskRepository;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for task use-cases.
#[derive(Debug)]
pub enum TaskServiceError {
    /// Input failed value-object validation.
    Validation(ValidationError),
    /// No task exists for the given slug.
    TaskNotFound(String),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::TaskNotFound(slug) => write!(f, "task not found: {slug}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::TaskNotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for TaskServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for TaskServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Creation request carrying plain boundary values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    /// Explicit id for slug derivation; sequential assignment when omitted.
    pub id: Option<String>,
}

/// Plain-value read model returned at the service boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub is_done: bool,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            slug: task.slug().as_str().to_string(),
            title: task.title().as_str().to_string(),
            description: task.description().as_str().to_string(),
            is_done: task.is_done(),
        }
    }
}

/// Task service facade over repository implementations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and persists a new task; new tasks always start not-done.
    ///
    /// Without an explicit id the next sequential id is computed from a
    /// non-transactional scan, and `save` overwrites by slug, so two
    /// near-simultaneous creations can collide on id and the second write
    /// silently wins. Known and preserved; fixing it would change
    /// observable behavior.
    pub fn create_task(&self, request: CreateTaskRequest) -> Result<TaskRecord, TaskServiceError> {
        let title = Title::new(request.title)?;
        let description = Description::new(request.description)?;
        let id = match request.id {
            Some(id) => id,
            None => self.next_task_id()?,
        };

        let task = Task::new(title, description, false, Some(&id))?;
        self.repo.save(&task)?;
        Ok(TaskRecord::from(&task))
    }

    /// Gets one task by slug; `None` when absent.
    pub fn get_task(&self, slug: &str) -> Result<Option<TaskRecord>, TaskServiceError> {
        let slug = Slug::new(slug)?;
        let task = self.repo.find_by_slug(&slug)?;
        Ok(task.as_ref().map(TaskRecord::from))
    }

    /// Lists every stored task, in repository (directory) order.
    pub fn list_tasks(&self) -> Result<Vec<TaskRecord>, TaskServiceError> {
        let tasks = self.repo.find_all()?;
        Ok(tasks.iter().map(TaskRecord::from).collect())
    }

    /// Marks a task done and persists it.
    pub fn set_task_done(&self, slug: &str) -> Result<TaskRecord, TaskServiceError> {
        self.set_done_flag(slug, true)
    }

    /// Marks a task not done and persists it.
    pub fn set_task_undone(&self, slug: &str) -> Result<TaskRecord, TaskServiceError> {
        self.set_done_flag(slug, false)
    }

    /// Deletes a task and returns its last state.
    pub fn delete_task(&self, slug: &str) -> Result<TaskRecord, TaskServiceError> {
        let slug = Slug::new(slug)?;
        let task = self
            .repo
            .find_by_slug(&slug)?
            .ok_or_else(|| TaskServiceError::TaskNotFound(slug.as_str().to_string()))?;
        self.repo.delete(&slug)?;
        Ok(TaskRecord::from(&task))
    }

    fn set_done_flag(&self, slug: &str, done: bool) -> Result<TaskRecord, TaskServiceError> {
        let slug = Slug::new(slug)?;
        let mut task = self
            .repo
            .find_by_slug(&slug)?
            .ok_or_else(|| TaskServiceError::TaskNotFound(slug.as_str().to_string()))?;

        if done {
            task.set_as_done();
        } else {
            task.set_as_undone();
        }
        self.repo.save(&task)?;
        Ok(TaskRecord::from(&task))
    }

    /// Next sequential id: one past the maximum numeric id currently
    /// stored; `"1"` when there are no tasks or no numeric ids.
    fn next_task_id(&self) -> Result<String, TaskServiceError> {
        let tasks = self.repo.find_all()?;
        let max = tasks
            .iter()
            .filter_map(|task| task.id().parse::<u64>().ok())
            .max();
        Ok(match max {
            Some(value) => (value + 1).to_string(),
            None => "1".to_string(),
        })
    }
}

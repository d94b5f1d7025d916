//! Project initialization use-case.

use crate::repo::project_repo::ProjectRepository;
use crate::repo::RepoResult;
use std::path::PathBuf;

/// Outcome of initializing the project structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializeProjectResult {
    /// `true` when the tasks directory was created, `false` when it
    /// already existed.
    pub created: bool,
    /// Path of the tasks directory.
    pub tasks_dir: PathBuf,
}

/// Project service facade over repository implementations.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Ensures the tasks directory exists and reports whether this call
    /// created it.
    pub fn initialize(&self) -> RepoResult<InitializeProjectResult> {
        let created = self.repo.initialize_tasks_directory()?;
        Ok(InitializeProjectResult {
            created,
            tasks_dir: self.repo.tasks_directory().to_path_buf(),
        })
    }
}

//! Project repository: tasks-directory lifecycle.

use crate::repo::{RepoError, RepoResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Repository interface for project-level operations.
pub trait ProjectRepository {
    /// Creates the tasks directory when missing.
    ///
    /// Returns `true` when it was created, `false` when it already existed.
    /// Idempotent and safe to race: a losing creator still observes an
    /// existing directory.
    fn initialize_tasks_directory(&self) -> RepoResult<bool>;

    /// Path of the tasks directory this repository manages.
    fn tasks_directory(&self) -> &Path;
}

/// Filesystem-backed project repository.
pub struct FsProjectRepository {
    tasks_dir: PathBuf,
}

impl FsProjectRepository {
    /// Constructs a repository rooted at the given directory.
    pub fn new(tasks_dir: impl Into<PathBuf>) -> Self {
        Self {
            tasks_dir: tasks_dir.into(),
        }
    }
}

impl ProjectRepository for FsProjectRepository {
    fn initialize_tasks_directory(&self) -> RepoResult<bool> {
        if self.tasks_dir.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(&self.tasks_dir).map_err(|source| RepoError::Io {
            path: self.tasks_dir.clone(),
            source,
        })?;
        Ok(true)
    }

    fn tasks_directory(&self) -> &Path {
        &self.tasks_dir
    }
}

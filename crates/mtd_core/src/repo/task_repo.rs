//! Task repository contract and filesystem implementation.
//!
//! # Responsibility
//! - Map task entities to one `<slug>.md` file each inside a configured
//!   directory.
//! - Reconstruct entities from stored front matter + body on the way back.
//!
//! # Invariants
//! - `save` is an upsert: an existing file for the same slug is overwritten
//!   unconditionally, with no concurrency check.
//! - Read paths treat undecodable files as "record absent" and emit a
//!   warning instead of failing the operation.
//! - The repository never owns a directory default; the path is injected.

use crate::markdown::front_matter::{self, Document, FrontMatterError};
use crate::model::slug::Slug;
use crate::model::task::Task;
use crate::model::text::{Description, Title};
use crate::model::ValidationError;
use crate::repo::{RepoError, RepoResult};
use log::warn;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const TASK_FILE_EXTENSION: &str = "md";

/// Stored header schema of a task file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFrontMatter {
    pub title: String,
    pub is_done: bool,
}

/// Why one stored file could not be turned back into a task.
///
/// Absorbed per record in read paths and surfaced only as a logged
/// diagnostic; write paths never produce this.
#[derive(Debug)]
pub enum TaskFileError {
    Io(io::Error),
    FrontMatter(FrontMatterError),
    Validation(ValidationError),
}

impl Display for TaskFileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "unreadable file: {err}"),
            Self::FrontMatter(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "invalid stored field: {err}"),
        }
    }
}

impl Error for TaskFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::FrontMatter(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<io::Error> for TaskFileError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<FrontMatterError> for TaskFileError {
    fn from(value: FrontMatterError) -> Self {
        Self::FrontMatter(value)
    }
}

impl From<ValidationError> for TaskFileError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for task persistence.
pub trait TaskRepository {
    /// Saves a task, creating the directory if needed; upsert semantics.
    fn save(&self, task: &Task) -> RepoResult<()>;
    /// Finds one task by slug; `None` when absent or undecodable.
    fn find_by_slug(&self, slug: &Slug) -> RepoResult<Option<Task>>;
    /// Lists every decodable task file, in directory order.
    fn find_all(&self) -> RepoResult<Vec<Task>>;
    /// Deletes the backing file; a no-op when it does not exist.
    fn delete(&self, slug: &Slug) -> RepoResult<()>;
}

/// Filesystem-backed task repository over one tasks directory.
pub struct FsTaskRepository {
    tasks_dir: PathBuf,
}

impl FsTaskRepository {
    /// Constructs a repository rooted at the given directory.
    ///
    /// The `<cwd>/tasks` default belongs to the composition point, not here.
    pub fn new(tasks_dir: impl Into<PathBuf>) -> Self {
        Self {
            tasks_dir: tasks_dir.into(),
        }
    }

    fn task_path(&self, slug: &Slug) -> PathBuf {
        self.tasks_dir
            .join(format!("{}.{TASK_FILE_EXTENSION}", slug.as_str()))
    }
}

impl TaskRepository for FsTaskRepository {
    fn save(&self, task: &Task) -> RepoResult<()> {
        fs::create_dir_all(&self.tasks_dir).map_err(|source| RepoError::Io {
            path: self.tasks_dir.clone(),
            source,
        })?;

        let path = self.task_path(task.slug());
        let header = TaskFrontMatter {
            title: task.title().as_str().to_string(),
            is_done: task.is_done(),
        };
        let text = front_matter::encode(&header, task.description().as_str()).map_err(
            |source| RepoError::Codec {
                path: path.clone(),
                source,
            },
        )?;

        fs::write(&path, text).map_err(|source| RepoError::Io { path, source })
    }

    fn find_by_slug(&self, slug: &Slug) -> RepoResult<Option<Task>> {
        let path = self.task_path(slug);
        if !path.is_file() {
            return Ok(None);
        }

        match read_task_file(&path, slug.as_str()) {
            Ok(task) => Ok(Some(task)),
            Err(err) => {
                warn!(
                    "event=task_file_skipped module=repo status=error path={} reason={err}",
                    path.display()
                );
                Ok(None)
            }
        }
    }

    fn find_all(&self) -> RepoResult<Vec<Task>> {
        if !self.tasks_dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.tasks_dir).map_err(|source| RepoError::Io {
            path: self.tasks_dir.clone(),
            source,
        })?;

        let mut tasks = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| RepoError::Io {
                path: self.tasks_dir.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(TASK_FILE_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            match read_task_file(&path, stem) {
                Ok(task) => tasks.push(task),
                Err(err) => warn!(
                    "event=task_file_skipped module=repo status=error path={} reason={err}",
                    path.display()
                ),
            }
        }

        Ok(tasks)
    }

    fn delete(&self, slug: &Slug) -> RepoResult<()> {
        let path = self.task_path(slug);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(RepoError::Io { path, source }),
        }
    }
}

/// Reconstructs a task from one stored file.
///
/// The id is the filename-slug segment before the first hyphen; the slug is
/// re-derived from that id plus the stored title, so a renamed file converges
/// back to its canonical name on the next save.
fn read_task_file(path: &Path, slug_stem: &str) -> Result<Task, TaskFileError> {
    let text = fs::read_to_string(path)?;
    let document: Document<TaskFrontMatter> = front_matter::decode(&text)?;

    let title = Title::new(document.front_matter.title)?;
    let description = Description::new(document.body)?;
    let id = slug_stem.split('-').next().unwrap_or(slug_stem);

    Ok(Task::new(
        title,
        description,
        document.front_matter.is_done,
        Some(id),
    )?)
}

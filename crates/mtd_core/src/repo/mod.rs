//! Repository layer abstractions and filesystem implementations.
//!
//! # Responsibility
//! - Define use-case oriented persistence contracts for tasks and the
//!   project directory.
//! - Keep file-layout and codec details out of service orchestration.
//!
//! # Invariants
//! - Write-path failures are fatal to the operation and propagate.
//! - Read-path failures are absorbed per record: a foreign or corrupted
//!   file must never abort a listing.

use crate::markdown::front_matter::FrontMatterError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod project_repo;
pub mod task_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Fatal repository failure: the operation did not complete.
#[derive(Debug)]
pub enum RepoError {
    /// Filesystem failure on a write path (or listing the directory).
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The task record could not be encoded for writing.
    Codec {
        path: PathBuf,
        source: FrontMatterError,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "filesystem failure at `{}`: {source}", path.display())
            }
            Self::Codec { path, source } => {
                write!(f, "cannot encode task file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Codec { source, .. } => Some(source),
        }
    }
}

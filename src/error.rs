//! Filesystem access errors

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// What canopy was doing when the filesystem refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsAction {
    ReadDir,
    ReadEntry,
    Stat,
    Write,
}

impl fmt::Display for FsAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            FsAction::ReadDir => "read directory",
            FsAction::ReadEntry => "read entry in",
            FsAction::Stat => "stat",
            FsAction::Write => "write",
        };
        f.write_str(verb)
    }
}

/// The only failure canopy knows about: a missing path, a permission denial,
/// or any other I/O error while reading the tree or writing the report.
#[derive(Debug, Error)]
#[error("cannot {action} '{}': {source}", path.display())]
pub struct FsError {
    pub action: FsAction,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl FsError {
    pub fn new(action: FsAction, path: &Path, source: io::Error) -> Self {
        Self {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

//! Directory listing and prefix helpers used by the renderer.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FsAction, FsError};

use super::config::RenderConfig;

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
pub const PIPE_INDENT: &str = "│   ";
pub const SPACE_INDENT: &str = "    ";

/// A directory entry that survived exclusion.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Listing and filtering against a borrowed config.
pub struct Traversal<'a> {
    pub config: &'a RenderConfig,
}

impl<'a> Traversal<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// Check if we're at maximum depth
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }

    /// Exact base-name match against the exclusion set.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.config.exclude_names.contains(name)
    }

    /// Read, sort, and filter the immediate entries of `path`.
    ///
    /// Any failure while listing or inspecting an entry aborts the listing.
    pub fn read_entries(&self, path: &Path) -> Result<Vec<Entry>, FsError> {
        let read_dir =
            fs::read_dir(path).map_err(|e| FsError::new(FsAction::ReadDir, path, e))?;

        let mut raw: Vec<(OsString, fs::DirEntry)> = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| FsError::new(FsAction::ReadEntry, path, e))?;
            raw.push((entry.file_name(), entry));
        }
        raw.sort_by(|a, b| a.0.cmp(&b.0));

        let mut entries = Vec::with_capacity(raw.len());
        for (file_name, entry) in raw {
            let name = file_name.to_string_lossy().into_owned();
            if self.is_excluded(&name) {
                continue;
            }
            let entry_path = entry.path();
            // stat follows symlinks: a link to a directory is descended into
            // and a dangling link fails the listing
            let metadata = fs::metadata(&entry_path)
                .map_err(|e| FsError::new(FsAction::Stat, &entry_path, e))?;
            entries.push(Entry {
                name,
                path: entry_path,
                is_dir: metadata.is_dir(),
            });
        }

        Ok(entries)
    }
}

/// Get the name of a path, defaulting to "." when it has no final component
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string())
}

pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for child entries
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, SPACE_INDENT)
    } else {
        format!("{}{}", current_prefix, PIPE_INDENT)
    }
}

//! Run configuration and the built-in defaults

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::tree::{DEFAULT_EXCLUDES, RenderConfig};

/// Directory holding the project; change `PROJECT_NAME` to point elsewhere.
pub const PROJECTS_DIR: &str = "/Users/ASRock/Node/projects";
pub const PROJECT_NAME: &str = "App";
pub const OUTPUT_FILE_NAME: &str = "PROJECT_STRUCTURE.md";

/// Everything a single run needs: which roots to render, which names to
/// skip, and where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root_paths: Vec<PathBuf>,
    pub exclude_names: BTreeSet<String>,
    pub output_path: PathBuf,
    /// Optional bound on how deep directories are descended.
    pub max_depth: Option<usize>,
}

impl Config {
    /// Render a single `root` and write the report inside it.
    pub fn for_project(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let output_path = root.join(OUTPUT_FILE_NAME);
        Self {
            root_paths: vec![root],
            exclude_names: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            output_path,
            max_depth: None,
        }
    }

    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.root_paths = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_excludes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// The renderer's slice of this config.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            exclude_names: self.exclude_names.clone(),
            max_depth: self.max_depth,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::for_project(Path::new(PROJECTS_DIR).join(PROJECT_NAME))
    }
}

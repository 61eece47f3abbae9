//! Configuration types for the tree renderer

use std::collections::BTreeSet;

/// Names skipped at every depth unless a caller supplies its own set.
pub const DEFAULT_EXCLUDES: [&str; 6] = ["node_modules", ".git", ".vscode", "venv", ".bak", "docs"];

/// Configuration for tree rendering behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Base names (not paths) omitted from output along with their subtrees.
    pub exclude_names: BTreeSet<String>,
    /// Directories at this depth are listed but not descended into.
    /// `None` renders the whole tree.
    pub max_depth: Option<usize>,
}

impl RenderConfig {
    /// A config that excludes nothing.
    pub fn empty() -> Self {
        Self {
            exclude_names: BTreeSet::new(),
            max_depth: None,
        }
    }

    pub fn with_excludes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::empty().with_excludes(DEFAULT_EXCLUDES)
    }
}

//! TreeRenderer - renders a directory into box-drawing tree text

use std::path::Path;

use tracing::debug;

use crate::error::FsError;

use super::config::RenderConfig;
use super::traversal::{Traversal, child_prefix, connector};

/// Depth-first renderer producing one line per non-excluded entry.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    config: RenderConfig,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the contents of `dir` beneath the inherited `prefix`.
    ///
    /// The directory itself is not printed; the caller emits its heading.
    /// Fails on the first directory that cannot be listed or entry that
    /// cannot be inspected, without returning partial output.
    pub fn render(&self, dir: &Path, prefix: &str) -> Result<String, FsError> {
        let mut output = String::new();
        self.render_dir(dir, prefix, 0, &mut output)?;
        Ok(output)
    }

    fn render_dir(
        &self,
        dir: &Path,
        prefix: &str,
        depth: usize,
        output: &mut String,
    ) -> Result<(), FsError> {
        let traversal = Traversal::new(&self.config);
        let entries = traversal.read_entries(dir)?;
        debug!(dir = %dir.display(), entries = entries.len(), depth, "rendering directory");

        let count = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == count - 1;

            output.push_str(prefix);
            output.push_str(connector(is_last));
            output.push_str(&entry.name);
            output.push('\n');

            if entry.is_dir && !traversal.at_max_depth(depth + 1) {
                let next = child_prefix(prefix, is_last);
                self.render_dir(&entry.path, &next, depth + 1, output)?;
            }
        }

        Ok(())
    }
}

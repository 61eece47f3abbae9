//! One full run: render every root, then write the report.

use std::path::PathBuf;

use tracing::instrument;

use crate::config::Config;
use crate::error::FsError;
use crate::output::{build_report, write_report};
use crate::tree::TreeRenderer;

/// Render all configured roots and write the report to `config.output_path`.
///
/// The output file is only touched once the whole report has been built, so
/// a failing root leaves any previous report in place. Returns the path that
/// was written.
#[instrument(level = "debug", skip(config), fields(roots = config.root_paths.len()))]
pub fn generate(config: &Config) -> Result<PathBuf, FsError> {
    let renderer = TreeRenderer::new(config.render_config());
    let report = build_report(&renderer, &config.root_paths)?;
    write_report(&config.output_path, &report)?;
    Ok(config.output_path.clone())
}

//! Report persistence

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{FsAction, FsError};

/// Write `report` to `path`, replacing whatever was there.
pub fn write_report(path: &Path, report: &str) -> Result<(), FsError> {
    fs::write(path, report).map_err(|e| FsError::new(FsAction::Write, path, e))?;
    info!(path = %path.display(), bytes = report.len(), "report written");
    Ok(())
}

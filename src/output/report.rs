//! Report assembly
//!
//! A report is the fixed header followed by one section per root: a blank
//! line, `<root name>/`, then the rendered subtree.

use std::path::Path;

use crate::error::FsError;
use crate::tree::{TreeRenderer, display_name};

pub const HEADER: &str = "Project Structure:";

/// Build the complete report text for `roots`.
///
/// Nothing is returned unless every root renders successfully.
pub fn build_report<P: AsRef<Path>>(
    renderer: &TreeRenderer,
    roots: &[P],
) -> Result<String, FsError> {
    let mut report = String::new();
    report.push_str(HEADER);
    report.push('\n');

    for root in roots {
        let root = root.as_ref();
        let body = renderer.render(root, "")?;
        report.push('\n');
        report.push_str(&display_name(root));
        report.push_str("/\n");
        report.push_str(&body);
    }

    Ok(report)
}

//! Canopy - writes a project's directory tree to PROJECT_STRUCTURE.md

pub mod config;
pub mod driver;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use driver::generate;
pub use error::{FsAction, FsError};
pub use output::{ColorEnv, build_report, color_choice, print_confirmation, write_report};
pub use tree::{RenderConfig, TreeRenderer};

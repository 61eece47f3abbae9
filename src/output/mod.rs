//! Report output
//!
//! - `report` - header and per-root sections assembled into one string
//! - `writer` - writing the finished report to disk
//! - `console` - the confirmation line printed after a successful write

mod console;
mod report;
mod writer;

pub use console::{ColorEnv, color_choice, print_confirmation, write_confirmation};
pub use report::{HEADER, build_report};
pub use writer::write_report;

//! Test harness for canopy integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

pub use canopy::test_utils::TestTree;
use canopy::tree::{BRANCH, LAST_BRANCH, PIPE_INDENT, SPACE_INDENT};

pub fn run_canopy(dir: &Path) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_canopy");
    let output = Command::new(binary)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run canopy");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read report")
}

/// A parsed tree body line.
#[derive(Debug, PartialEq, Eq)]
pub struct TreeLine<'a> {
    pub depth: usize,
    pub units: Vec<&'a str>,
    pub is_last: bool,
    pub name: &'a str,
}

/// Split a tree body line into its prefix units, connector, and name.
pub fn parse_line(line: &str) -> TreeLine<'_> {
    let mut rest = line;
    let mut units = Vec::new();
    loop {
        if let Some(r) = rest.strip_prefix(PIPE_INDENT) {
            units.push(PIPE_INDENT);
            rest = r;
        } else if let Some(r) = rest.strip_prefix(SPACE_INDENT) {
            units.push(SPACE_INDENT);
            rest = r;
        } else {
            break;
        }
    }
    let (is_last, name) = if let Some(name) = rest.strip_prefix(LAST_BRANCH) {
        (true, name)
    } else if let Some(name) = rest.strip_prefix(BRANCH) {
        (false, name)
    } else {
        panic!("line has no connector: {:?}", line);
    };
    TreeLine {
        depth: units.len(),
        units,
        is_last,
        name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_parse_line() {
        let line = parse_line("│       └── mod.rs");
        assert_eq!(line.depth, 2);
        assert_eq!(line.units, vec!["│   ", "    "]);
        assert!(line.is_last);
        assert_eq!(line.name, "mod.rs");
    }
}

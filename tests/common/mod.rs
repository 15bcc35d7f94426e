// tests/common/mod.rs
//! Shared helpers for binary-level tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Command for the built binary.
pub fn line_report() -> Command {
    Command::new(env!("CARGO_BIN_EXE_line_report"))
}

/// Create a test file with the given contents and return its path.
///
/// # Panics
///
/// Panics with a descriptive message if file creation fails.
pub fn create_test_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents)
        .unwrap_or_else(|e| panic!("Failed to create test file at {:?}: {}", path, e));
    path
}

/// Expected success output for a file.
pub fn expected_report(name: &str, lines: u64, size: u64) -> String {
    format!("File: {name}\nLines: {lines}\nSize: {size} bytes\n")
}

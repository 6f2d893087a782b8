// tests/common/mod.rs
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;

pub const TWO_FILES: &str = include_str!("../fixtures/two_files.json");

/// Command for the built binary with a clean environment for covsum's own variables.
pub fn covsum() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_covsum"));
    cmd.env_remove("COVSUM_REPORT").env_remove("COVSUM_THRESHOLD").env_remove("RUST_LOG");
    cmd
}

/// Write `contents` as `name` inside `dir`.
///
/// # Panics
///
/// Panics with a descriptive message if file creation fails.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap_or_else(|e| panic!("Failed to create test file at {path:?}: {e}"));
    path
}

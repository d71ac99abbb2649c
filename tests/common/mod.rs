//! Common test utilities

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an empty working directory
pub fn create_test_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().to_path_buf();
    (temp_dir, root)
}

/// Write a calcpoc.toml into `root`
pub fn create_config(root: &Path, contents: &str) {
    fs::write(root.join("calcpoc.toml"), contents).expect("Failed to write config");
}

/// Write a batch file with one expression per line and return its path
pub fn create_batch_file(root: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = root.join(name);
    fs::write(&path, lines.join("\n")).expect("Failed to write batch file");
    path
}

/// Operand values covering signs, zero and the i32 extremes
pub fn sample_values() -> Vec<i32> {
    vec![
        i32::MIN,
        i32::MIN + 1,
        -1000,
        -15,
        -7,
        -3,
        -2,
        -1,
        0,
        1,
        2,
        3,
        4,
        7,
        10,
        20,
        1290,
        i32::MAX - 1,
        i32::MAX,
    ]
}

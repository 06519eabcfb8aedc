//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test `.env` discovery, parsing, and failure reporting.
//! - Test layering and precedence between the environment and `.env`.
//!
//! Invariants:
//! - Tests that touch process-global state (cwd/env) hold `env_lock()` and are `#[serial]`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

/// Write `contents` to a `.env` file inside `dir` and return its path.
pub fn write_env_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join(".env");
    std::fs::write(&path, contents).expect("Failed to write .env");
    path
}

//! Shared test utilities for `starter` integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Clear every catalog key so host configuration cannot leak into tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Tests that exercise `.env` loading run in a temp dir and re-enable loading explicitly.

use assert_cmd::Command;

/// Keys the CLI reads, cleared from the child environment.
pub const KNOWN_KEYS: &[&str] = &[
    "OPENAI_API_KEY",
    "ANTHROPIC_API_KEY",
    "TELEGRAM_BOT_TOKEN",
    "DISCORD_BOT_TOKEN",
    "DATABASE_URL",
    "ENV",
    "DEBUG",
    "APP_NAME",
    "APP_PORT",
    "DATA_DIR",
    "HTTP_TIMEOUT_SECS",
    "OUTPUT_DIR",
    "STARTER_ENV_FILE",
    "STARTER_OUTPUT",
];

/// Returns a hermetic `starter` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Catalog keys and `STARTER_*` variables are cleared.
pub fn starter_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("starter");

    cmd.env("DOTENV_DISABLED", "1");
    for key in KNOWN_KEYS {
        cmd.env_remove(key);
    }

    cmd
}

/// Returns a `starter` command that reads `.env` from `dir`.
#[allow(dead_code)]
pub fn starter_cmd_in(dir: &std::path::Path) -> Command {
    let mut cmd = starter_cmd();
    cmd.env_remove("DOTENV_DISABLED").current_dir(dir);
    cmd
}

//! Centralized constants for the starter kit configuration.
//!
//! Key names owned by individual templates live in `features.rs`; this module
//! holds the resolver's own conventions and the shared runtime defaults.

// =============================================================================
// Override file
// =============================================================================

/// Conventional override file name, resolved relative to the current directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Environment variable that points the loader at a different override file.
pub const ENV_FILE_VAR: &str = "STARTER_ENV_FILE";

/// Setting this to `1` or `true` skips override file loading entirely.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Runtime defaults
// =============================================================================

/// Default network timeout for template HTTP calls, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default directory templates write their output into.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default deployment environment name.
pub const DEFAULT_ENV: &str = "dev";

/// Default application name shown by the web templates.
pub const DEFAULT_APP_NAME: &str = "MyPythonTool";

/// Default port for the web templates.
pub const DEFAULT_APP_PORT: u16 = 8501;

/// Default database connection string.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///./data/app.db";

/// Default root for template data; `raw/` and `processed/` live under it.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Number of leading characters kept visible when masking a secret.
pub const SECRET_VISIBLE_PREFIX: usize = 4;

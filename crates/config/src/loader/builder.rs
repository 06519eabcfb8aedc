//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that layers the `.env` override
//!   file under the process environment.
//! - Produce the immutable `Settings` snapshot.
//!
//! Does NOT handle:
//! - Typed lookups (see `settings.rs`).
//! - Schema validation (see `schema.rs`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over `.env` file values, regardless
//!   of the order in which `load_dotenv()` and `from_env()` are called.
//! - The `.env` file is parsed literally (see `envfile.rs`) into a separate
//!   layer, so the process environment is never modified.
//! - Within one `.env` file the first assignment of a key wins.
//! - The `DOTENV_DISABLED` variable is checked before the file is read.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::env::{env_var_or_none, normalize_value, process_env_snapshot};
use super::envfile::{is_not_found, read_env_file};
use super::error::ConfigError;
use crate::constants::{DEFAULT_ENV_FILE, DOTENV_DISABLED_VAR, ENV_FILE_VAR};
use crate::settings::{Setting, Settings, Source};

/// Which override file, if any, `load_dotenv()` should read.
#[derive(Debug, Clone, PartialEq, Eq)]
enum EnvFileChoice {
    /// `STARTER_ENV_FILE` if set, otherwise `.env` in the current directory.
    Conventional,
    /// An explicit path; a missing file is an error.
    Explicit(PathBuf),
    /// Never read an override file.
    Disabled,
}

/// Configuration loader that builds `Settings` from the environment and `.env`.
pub struct ConfigLoader {
    env_file: EnvFileChoice,
    file_layer: BTreeMap<String, String>,
    file_path: Option<PathBuf>,
    env_layer: BTreeMap<String, String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with no sources read yet.
    pub fn new() -> Self {
        Self {
            env_file: EnvFileChoice::Conventional,
            file_layer: BTreeMap::new(),
            file_path: None,
            env_layer: BTreeMap::new(),
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Read the override file from `path` instead of the conventional location.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = EnvFileChoice::Explicit(path.into());
        self
    }

    /// Never read an override file.
    pub fn without_env_file(mut self) -> Self {
        self.env_file = EnvFileChoice::Disabled;
        self
    }

    /// Load key/value pairs from the `.env` override file if present.
    ///
    /// The file is resolved as follows:
    /// - the path given to `with_env_file`, if any;
    /// - otherwise `STARTER_ENV_FILE`, if set;
    /// - otherwise `.env` in the current directory.
    ///
    /// A missing conventional `.env` is silently ignored. A missing explicit
    /// file (builder or `STARTER_ENV_FILE`) is reported as `DotenvIo`.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", nothing is read.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(mut self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("{} is set, skipping .env loading", DOTENV_DISABLED_VAR);
            return Ok(self);
        }

        let (path, explicit) = match self.env_file.clone() {
            EnvFileChoice::Disabled => return Ok(self),
            EnvFileChoice::Explicit(path) => (path, true),
            EnvFileChoice::Conventional => match env_var_or_none(ENV_FILE_VAR) {
                Some(path) => (PathBuf::from(path), true),
                None => (PathBuf::from(DEFAULT_ENV_FILE), false),
            },
        };

        match read_env_file(&path) {
            Ok(entries) => {
                tracing::debug!(path = %path.display(), entries = entries.len(), "loaded .env file");
                self.file_layer = entries;
                self.file_path = Some(path);
                Ok(self)
            }
            Err(e) if !explicit && is_not_found(&e) => {
                tracing::debug!(path = %path.display(), "no .env file found");
                Ok(self)
            }
            Err(e) => Err(e),
        }
    }

    /// Snapshot the process environment as the highest-precedence layer.
    pub fn from_env(self) -> Self {
        self.with_vars(process_env_snapshot())
    }

    /// Use an explicit environment snapshot instead of the process environment.
    ///
    /// Replaces any previously captured environment layer.
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        self.env_layer = vars
            .into_iter()
            .filter_map(|(k, v)| normalize_value(v.as_ref()).map(|v| (k.into(), v)))
            .collect();
        self
    }

    /// The override file that was actually read, if any.
    pub fn env_file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Merge the layers into the final immutable settings.
    pub fn build(self) -> Settings {
        let mut entries = BTreeMap::new();

        if let Some(path) = self.file_path {
            for (key, value) in self.file_layer {
                entries.insert(key, Setting::new(value, Source::EnvFile(path.clone())));
            }
        }

        // Environment wins over the file.
        for (key, value) in self.env_layer {
            entries.insert(key, Setting::new(value, Source::Environment));
        }

        Settings::from_entries(entries)
    }
}

/// Load settings the way every template does at startup: `.env` (if present)
/// layered under the process environment.
pub fn load() -> Result<Settings, ConfigError> {
    Ok(ConfigLoader::new().load_dotenv()?.from_env().build())
}

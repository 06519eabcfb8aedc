//! Typed view of the runtime options every template shares.
//!
//! Responsibilities:
//! - Resolve `ENV`, `DEBUG`, `APP_*`, `DATABASE_URL` and the directory options
//!   with their defaults in one call.
//! - Answer environment questions (`is_production`, `is_development`).
//! - Report which provider credentials are configured.
//!
//! Invariants:
//! - `Debug` never prints `database_url`, which may embed a password.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_APP_NAME, DEFAULT_APP_PORT, DEFAULT_DATA_DIR, DEFAULT_DATABASE_URL, DEFAULT_ENV,
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_OUTPUT_DIR,
};
use crate::features::{
    APP_NAME, APP_PORT, DATA_DIR, DATABASE_URL, DEBUG, ENV, HTTP_TIMEOUT_SECS, OUTPUT_DIR,
    PROVIDER_KEYS,
};
use crate::loader::ConfigError;
use crate::settings::Settings;

const RAW_SUBDIR: &str = "raw";
const PROCESSED_SUBDIR: &str = "processed";

/// Runtime options resolved from `Settings`, defaults applied.
#[derive(Clone, PartialEq, Eq)]
pub struct RuntimeOptions {
    pub env: String,
    pub debug: bool,
    pub app_name: String,
    pub app_port: u16,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub http_timeout: Duration,
    database_url: String,
}

impl RuntimeOptions {
    /// Resolve every runtime option, failing on the first ill-typed value.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        Ok(Self {
            env: settings.get_or(ENV, DEFAULT_ENV.to_string())?,
            debug: settings.get_or(DEBUG, true)?,
            app_name: settings.get_or(APP_NAME, DEFAULT_APP_NAME.to_string())?,
            app_port: settings.get_or(APP_PORT, DEFAULT_APP_PORT)?,
            data_dir: settings.get_or(DATA_DIR, PathBuf::from(DEFAULT_DATA_DIR))?,
            output_dir: settings.get_or(OUTPUT_DIR, PathBuf::from(DEFAULT_OUTPUT_DIR))?,
            http_timeout: settings.get_or(
                HTTP_TIMEOUT_SECS,
                Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            )?,
            database_url: settings.get_or(DATABASE_URL, DEFAULT_DATABASE_URL.to_string())?,
        })
    }

    /// `ENV` is `production`, ignoring case.
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }

    /// `ENV` is `dev` or `development`, ignoring case.
    pub fn is_development(&self) -> bool {
        self.env.eq_ignore_ascii_case("dev") || self.env.eq_ignore_ascii_case("development")
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn raw_data_dir(&self) -> PathBuf {
        self.data_dir.join(RAW_SUBDIR)
    }

    pub fn processed_data_dir(&self) -> PathBuf {
        self.data_dir.join(PROCESSED_SUBDIR)
    }
}

impl fmt::Debug for RuntimeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeOptions")
            .field("env", &self.env)
            .field("debug", &self.debug)
            .field("app_name", &self.app_name)
            .field("app_port", &self.app_port)
            .finish_non_exhaustive()
    }
}

/// Whether one provider's credential is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiKeyStatus {
    pub provider: &'static str,
    pub key: &'static str,
    pub configured: bool,
}

/// Report which provider credentials are present, without revealing them.
pub fn api_key_status(settings: &Settings) -> Vec<ApiKeyStatus> {
    PROVIDER_KEYS
        .iter()
        .map(|&(provider, key)| ApiKeyStatus {
            provider,
            key,
            configured: settings.contains(key),
        })
        .collect()
}

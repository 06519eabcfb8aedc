//! Error types for configuration loading and lookup.
//!
//! Responsibilities:
//! - Define the failure taxonomy surfaced to callers of the resolver.
//! - Carry enough context (key, feature, example) for an operator to fix their `.env`.
//!
//! Does NOT handle:
//! - Presentation or exit codes (the consuming binary decides both).
//! - Logging (the resolver never logs failures on the caller's behalf).
//!
//! Invariants:
//! - No variant ever includes a raw configuration value, so credentials cannot
//!   leak through error messages.
//! - Dotenv errors NEVER include raw .env line contents.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::features;

/// Shown when a missing key is not declared by any feature.
const PLACEHOLDER_EXAMPLE: &str = "<value>";

/// Errors that can occur while loading or reading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required key is absent from every source.
    #[error(
        "missing required setting {key} (needed by {feature}). Set it in your environment or .env file, e.g. {key}={example}"
    )]
    Missing {
        key: String,
        feature: String,
        example: String,
    },

    /// None of a group of interchangeable keys is set.
    #[error(
        "missing one of {} (needed by {feature}). Set one in your environment or .env file, e.g. {}={example}",
        .keys.join(", "),
        .keys.first().map(String::as_str).unwrap_or_default()
    )]
    MissingAnyOf {
        keys: Vec<String>,
        feature: String,
        example: String,
    },

    /// A key is present but its value cannot be coerced to the requested type.
    #[error("invalid value for {key}: expected {expected}, {message}")]
    InvalidType {
        key: String,
        expected: &'static str,
        message: String,
    },

    /// Failed to parse the override file due to invalid syntax.
    ///
    /// SAFETY: Only the line number of the failure is reported, never the line.
    #[error(
        "failed to parse .env file {} at line {line}: expected KEY=VALUE. Hint: set DOTENV_DISABLED=1 to skip .env loading",
        .path.display()
    )]
    DotenvParse { path: PathBuf, line: usize },

    /// The override file exists but could not be read.
    #[error("failed to read .env file {}: {kind}", .path.display())]
    DotenvIo { path: PathBuf, kind: ErrorKind },
}

impl ConfigError {
    /// Build a `Missing` error, taking the example from the feature catalog
    /// when `key` is declared there.
    pub fn missing(key: impl Into<String>, feature: impl Into<String>) -> Self {
        let key = key.into();
        let example = catalog_example(&key).to_string();
        ConfigError::Missing {
            key,
            feature: feature.into(),
            example,
        }
    }

    /// Build a `MissingAnyOf` error for a group of interchangeable keys.
    pub fn missing_any_of(keys: &[&str], feature: impl Into<String>) -> Self {
        ConfigError::MissingAnyOf {
            keys: keys.iter().map(|key| key.to_string()).collect(),
            feature: feature.into(),
            example: catalog_example(keys.first().copied().unwrap_or_default()).to_string(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            ConfigError::Missing { .. } | ConfigError::MissingAnyOf { .. }
        )
    }

    pub fn is_invalid_type(&self) -> bool {
        matches!(self, ConfigError::InvalidType { .. })
    }

    pub fn is_dotenv(&self) -> bool {
        matches!(
            self,
            ConfigError::DotenvParse { .. } | ConfigError::DotenvIo { .. }
        )
    }

    /// The configuration key this error concerns, if any.
    ///
    /// For `MissingAnyOf` this is the first key of the group.
    pub fn key(&self) -> Option<&str> {
        self.keys().first().copied()
    }

    /// Every configuration key this error concerns.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            ConfigError::Missing { key, .. } | ConfigError::InvalidType { key, .. } => vec![key],
            ConfigError::MissingAnyOf { keys, .. } => keys.iter().map(String::as_str).collect(),
            ConfigError::DotenvParse { .. } | ConfigError::DotenvIo { .. } => Vec::new(),
        }
    }
}

fn catalog_example(key: &str) -> &'static str {
    features::declared(key)
        .map(|(_, spec)| spec.example)
        .filter(|example| !example.is_empty())
        .unwrap_or(PLACEHOLDER_EXAMPLE)
}

//! The immutable settings snapshot handed to every template.
//!
//! Responsibilities:
//! - Hold the merged key/value view produced by `ConfigLoader::build()`.
//! - Provide typed lookups for optional keys, keys with defaults, and required keys.
//!
//! Does NOT handle:
//! - Reading the environment or override file (see `loader`).
//! - Declaring which keys a feature needs (see `schema` and `features`).
//!
//! Invariants:
//! - Keys are case-sensitive and unique.
//! - A `Settings` value is never mutated after construction.
//! - `Debug` output lists keys and sources only, never values.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::coerce::FromSetting;
use crate::loader::ConfigError;

/// Where a setting's winning value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The process environment.
    Environment,
    /// The local override file at the given path.
    EnvFile(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Environment => write!(f, "environment"),
            Source::EnvFile(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A single resolved entry.
#[derive(Clone, PartialEq, Eq)]
pub struct Setting {
    value: String,
    source: Source,
}

impl Setting {
    pub(crate) fn new(value: String, source: Source) -> Self {
        Self { value, source }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> &Source {
        &self.source
    }
}

impl fmt::Debug for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setting")
            .field("value", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// How a key should be looked up by [`Settings::lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Absence is a fatal misconfiguration for `feature`.
    Required { feature: &'a str },
    /// Absence resolves to `default` (or `None` when no default is given).
    Optional { default: Option<&'a str> },
}

/// Immutable, process-lifetime configuration snapshot.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Settings {
    entries: BTreeMap<String, Setting>,
}

impl Settings {
    pub(crate) fn from_entries(entries: BTreeMap<String, Setting>) -> Self {
        Self { entries }
    }

    /// Build settings from explicit pairs, as if they came from the environment.
    ///
    /// Empty or whitespace-only values are dropped and the rest are trimmed,
    /// matching how the loader treats real sources.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .filter_map(|(key, value)| {
                crate::loader::normalize_value(value.as_ref())
                    .map(|v| (key.into(), Setting::new(v, Source::Environment)))
            })
            .collect();
        Self { entries }
    }

    /// The raw value for `key`, if present.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(Setting::value)
    }

    /// Where the value for `key` came from, if present.
    pub fn source(&self, key: &str) -> Option<&Source> {
        self.entries.get(key).map(Setting::source)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Setting)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up an optional key and coerce it to `T`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    pub fn get<T: FromSetting>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        self.raw(key).map(|raw| coerce::<T>(key, raw)).transpose()
    }

    /// Look up an optional key, falling back to `default` when it is absent.
    ///
    /// Absence is never an error; a present but ill-typed value still is.
    pub fn get_or<T: FromSetting>(&self, key: &str, default: T) -> Result<T, ConfigError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Look up a key that `feature` cannot run without.
    pub fn require<T: FromSetting>(&self, key: &str, feature: &str) -> Result<T, ConfigError> {
        self.get(key)?
            .ok_or_else(|| ConfigError::missing(key, feature))
    }

    /// Look up a group of interchangeable keys, returning the first one set.
    ///
    /// Keys are tried in order, so the caller's preference decides which
    /// platform runs when several are configured.
    pub fn require_any<'k, T: FromSetting>(
        &self,
        keys: &[&'k str],
        feature: &str,
    ) -> Result<(&'k str, T), ConfigError> {
        match keys.iter().find(|key| self.contains(key)) {
            Some(&key) => Ok((key, self.require(key, feature)?)),
            None => Err(ConfigError::missing_any_of(keys, feature)),
        }
    }

    /// General lookup combining the required/optional/default cases.
    ///
    /// A textual default is coerced exactly like a configured value, so a bad
    /// default surfaces as `InvalidType` for `key`.
    pub fn lookup<T: FromSetting>(
        &self,
        key: &str,
        lookup: Lookup<'_>,
    ) -> Result<Option<T>, ConfigError> {
        match (self.raw(key), lookup) {
            (Some(raw), _) => coerce::<T>(key, raw).map(Some),
            (None, Lookup::Required { feature }) => Err(ConfigError::missing(key, feature)),
            (None, Lookup::Optional { default: Some(d) }) => coerce::<T>(key, d).map(Some),
            (None, Lookup::Optional { default: None }) => Ok(None),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v.source())))
            .finish()
    }
}

pub(crate) fn coerce<T: FromSetting>(key: &str, raw: &str) -> Result<T, ConfigError> {
    T::parse_setting(raw).map_err(|message| ConfigError::InvalidType {
        key: key.to_string(),
        expected: T::KIND,
        message,
    })
}

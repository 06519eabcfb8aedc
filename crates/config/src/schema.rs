//! Declared configuration schemas.
//!
//! Responsibilities:
//! - Describe which keys a feature needs, their types, and their defaults.
//! - Validate a `Settings` snapshot against that description at startup,
//!   collecting every problem instead of stopping at the first.
//! - Produce a redacted view of the effective values for display.
//!
//! Does NOT handle:
//! - Loading settings (see `loader`).
//! - Knowing any concrete template keys (see `features.rs`).

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::coerce::FromSetting;
use crate::constants::SECRET_VISIBLE_PREFIX;
use crate::loader::ConfigError;
use crate::settings::{Settings, Source, coerce};

/// The type a declared key must coerce to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    /// A credential; validated as a string but masked when displayed.
    Secret,
    Integer,
    /// A TCP port, `0..=65535`.
    Port,
    Float,
    Bool,
    Url,
    Path,
    /// Whole seconds.
    Duration,
}

impl ValueKind {
    fn check(self, key: &str, raw: &str) -> Result<(), ConfigError> {
        match self {
            ValueKind::String | ValueKind::Secret => coerce::<String>(key, raw).map(drop),
            ValueKind::Integer => coerce::<i64>(key, raw).map(drop),
            ValueKind::Port => coerce::<u16>(key, raw).map(drop),
            ValueKind::Float => coerce::<f64>(key, raw).map(drop),
            ValueKind::Bool => coerce::<bool>(key, raw).map(drop),
            ValueKind::Url => coerce::<url::Url>(key, raw).map(drop),
            ValueKind::Path => coerce::<PathBuf>(key, raw).map(drop),
            ValueKind::Duration => coerce::<Duration>(key, raw).map(drop),
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, ValueKind::Secret)
    }

    /// Name used in error messages, shared with `FromSetting::KIND`.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::String => String::KIND,
            ValueKind::Secret => "secret",
            ValueKind::Integer => i64::KIND,
            ValueKind::Port => "port",
            ValueKind::Float => f64::KIND,
            ValueKind::Bool => bool::KIND,
            ValueKind::Url => url::Url::KIND,
            ValueKind::Path => PathBuf::KIND,
            ValueKind::Duration => Duration::KIND,
        }
    }
}

/// Whether a key must be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional { default: Option<&'static str> },
    /// At least one key of the group must be present.
    AnyOf(&'static [&'static str]),
}

/// Declaration of a single configuration key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec {
    pub key: &'static str,
    pub kind: ValueKind,
    pub requirement: Requirement,
    pub description: &'static str,
    /// Example of the expected format, shown when the key is missing.
    pub example: &'static str,
}

impl KeySpec {
    pub fn is_required(&self) -> bool {
        matches!(self.requirement, Requirement::Required)
    }

    pub fn default_value(&self) -> Option<&'static str> {
        match self.requirement {
            Requirement::Optional { default } => default,
            Requirement::Required | Requirement::AnyOf(_) => None,
        }
    }
}

/// Where a resolved key's effective value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Environment,
    EnvFile(PathBuf),
    Default,
    Unset,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Environment => write!(f, "environment"),
            Origin::EnvFile(path) => write!(f, "{}", path.display()),
            Origin::Default => write!(f, "default"),
            Origin::Unset => write!(f, "unset"),
        }
    }
}

/// Display-safe view of one declared key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedKey {
    pub key: &'static str,
    pub kind: ValueKind,
    pub required: bool,
    pub origin: Origin,
    /// The effective value, masked for secrets, `None` when unset.
    pub display: Option<String>,
}

/// The set of keys one feature declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    feature: &'static str,
    keys: Vec<KeySpec>,
}

impl Schema {
    pub fn new(feature: &'static str) -> Self {
        Self {
            feature,
            keys: Vec::new(),
        }
    }

    /// Declare a key the feature cannot run without.
    pub fn required(
        mut self,
        key: &'static str,
        kind: ValueKind,
        description: &'static str,
        example: &'static str,
    ) -> Self {
        self.keys.push(KeySpec {
            key,
            kind,
            requirement: Requirement::Required,
            description,
            example,
        });
        self
    }

    /// Declare a key with an optional textual default.
    pub fn optional(
        mut self,
        key: &'static str,
        kind: ValueKind,
        default: Option<&'static str>,
        description: &'static str,
    ) -> Self {
        self.keys.push(KeySpec {
            key,
            kind,
            requirement: Requirement::Optional { default },
            description,
            example: default.unwrap_or(""),
        });
        self
    }

    /// Declare a group of interchangeable keys; the feature runs when any one is set.
    pub fn any_of(
        mut self,
        keys: &'static [&'static str],
        kind: ValueKind,
        description: &'static str,
        example: &'static str,
    ) -> Self {
        for &key in keys {
            self.keys.push(KeySpec {
                key,
                kind,
                requirement: Requirement::AnyOf(keys),
                description,
                example,
            });
        }
        self
    }

    pub fn feature(&self) -> &'static str {
        self.feature
    }

    pub fn keys(&self) -> &[KeySpec] {
        &self.keys
    }

    pub fn spec(&self, key: &str) -> Option<&KeySpec> {
        self.keys.iter().find(|spec| spec.key == key)
    }

    /// Check every declared key, returning all failures found.
    ///
    /// Missing required keys yield `Missing` and an entirely unset `any_of`
    /// group yields one `MissingAnyOf`; present keys (and textual defaults)
    /// that fail coercion yield `InvalidType`.
    pub fn validate(&self, settings: &Settings) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        for spec in &self.keys {
            let raw = settings.raw(spec.key).or(spec.default_value());
            match raw {
                Some(raw) => {
                    if let Err(e) = spec.kind.check(spec.key, raw) {
                        errors.push(e);
                    }
                }
                None => match spec.requirement {
                    Requirement::Required => errors.push(ConfigError::Missing {
                        key: spec.key.to_string(),
                        feature: self.feature.to_string(),
                        example: spec.example.to_string(),
                    }),
                    // Reported once, on the group's first key.
                    Requirement::AnyOf(group)
                        if group.first() == Some(&spec.key)
                            && !group.iter().any(|key| settings.contains(key)) =>
                    {
                        errors.push(ConfigError::MissingAnyOf {
                            keys: group.iter().map(|key| key.to_string()).collect(),
                            feature: self.feature.to_string(),
                            example: spec.example.to_string(),
                        })
                    }
                    _ => {}
                },
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Describe the effective value of every declared key.
    pub fn resolve(&self, settings: &Settings) -> Vec<ResolvedKey> {
        self.keys
            .iter()
            .map(|spec| {
                let (origin, value) = match (settings.raw(spec.key), settings.source(spec.key)) {
                    (Some(raw), Some(Source::Environment)) => (Origin::Environment, Some(raw)),
                    (Some(raw), Some(Source::EnvFile(path))) => {
                        (Origin::EnvFile(path.clone()), Some(raw))
                    }
                    _ => match spec.default_value() {
                        Some(default) => (Origin::Default, Some(default)),
                        None => (Origin::Unset, None),
                    },
                };

                let display = value.map(|v| {
                    if spec.kind.is_secret() && origin != Origin::Default {
                        mask_secret(v)
                    } else {
                        v.to_string()
                    }
                });

                ResolvedKey {
                    key: spec.key,
                    kind: spec.kind,
                    required: spec.is_required(),
                    origin,
                    display,
                }
            })
            .collect()
    }
}

/// Mask a secret, keeping a short prefix so operators can tell keys apart.
///
/// Values too short to keep a prefix safely are fully masked.
pub fn mask_secret(value: &str) -> String {
    let visible: String = value.chars().take(SECRET_VISIBLE_PREFIX).collect();
    if value.chars().count() <= SECRET_VISIBLE_PREFIX * 2 {
        "********".to_string()
    } else {
        format!("{visible}********")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new("demo")
            .required("API_KEY", ValueKind::Secret, "API key", "sk-...")
            .optional("TIMEOUT", ValueKind::Duration, Some("30"), "timeout")
            .optional("RATIO", ValueKind::Float, None, "ratio")
    }

    #[test]
    fn test_validate_passes_with_required_present() {
        let settings = Settings::from_pairs([("API_KEY", "sk-123")]);
        assert!(schema().validate(&settings).is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let settings = Settings::from_pairs([("TIMEOUT", "soon"), ("RATIO", "half")]);
        let errors = schema().validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].is_missing());
        assert_eq!(errors[0].key(), Some("API_KEY"));
        assert!(errors[0].to_string().contains("API_KEY=sk-..."));
        assert!(errors[1].is_invalid_type());
        assert_eq!(errors[1].key(), Some("TIMEOUT"));
        assert_eq!(errors[2].key(), Some("RATIO"));
    }

    #[test]
    fn test_validate_checks_defaults() {
        let bad = Schema::new("bad").optional("PORT", ValueKind::Integer, Some("eighty"), "port");
        let errors = bad.validate(&Settings::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_invalid_type());
    }

    #[test]
    fn test_resolve_reports_origin_and_masks_secrets() {
        let settings = Settings::from_pairs([("API_KEY", "sk-abcdefghijkl")]);
        let resolved = schema().resolve(&settings);

        assert_eq!(resolved[0].origin, Origin::Environment);
        assert_eq!(resolved[0].display.as_deref(), Some("sk-a********"));
        assert!(resolved[0].required);

        assert_eq!(resolved[1].origin, Origin::Default);
        assert_eq!(resolved[1].display.as_deref(), Some("30"));

        assert_eq!(resolved[2].origin, Origin::Unset);
        assert_eq!(resolved[2].display, None);
    }

    const TOKENS: &[&str] = &["PRIMARY_TOKEN", "BACKUP_TOKEN"];

    fn either_schema() -> Schema {
        Schema::new("bot").any_of(TOKENS, ValueKind::Secret, "bot token", "123:abc")
    }

    #[test]
    fn test_any_of_passes_when_one_key_is_set() {
        let primary = Settings::from_pairs([("PRIMARY_TOKEN", "t")]);
        let backup = Settings::from_pairs([("BACKUP_TOKEN", "t")]);
        assert!(either_schema().validate(&primary).is_ok());
        assert!(either_schema().validate(&backup).is_ok());
    }

    #[test]
    fn test_any_of_reports_group_once_when_unset() {
        let errors = either_schema().validate(&Settings::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_missing());
        assert_eq!(errors[0].keys(), vec!["PRIMARY_TOKEN", "BACKUP_TOKEN"]);
        assert!(errors[0].to_string().contains("bot"));
    }

    #[test]
    fn test_any_of_keys_are_neither_required_nor_defaulted() {
        let schema = either_schema();
        for spec in schema.keys() {
            assert!(!spec.is_required());
            assert_eq!(spec.default_value(), None);
            assert_eq!(spec.requirement, Requirement::AnyOf(TOKENS));
        }
        let resolved = schema.resolve(&Settings::from_pairs([("BACKUP_TOKEN", "abcdefghijk")]));
        assert_eq!(resolved[0].origin, Origin::Unset);
        assert_eq!(resolved[1].display.as_deref(), Some("abcd********"));
    }

    #[test]
    fn test_mask_secret_hides_short_values_entirely() {
        assert_eq!(mask_secret("abc"), "********");
        assert_eq!(mask_secret("abcdefgh"), "********");
        assert_eq!(mask_secret("abcdefghi"), "abcd********");
    }
}

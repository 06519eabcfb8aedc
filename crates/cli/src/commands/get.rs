//! `starter get`: the resolver's single-key lookup, exposed to shell scripts.
//!
//! Responsibilities:
//! - Look up one key as required or optional, with an optional default.
//! - Coerce the value to the requested type and print it.
//!
//! Invariants:
//! - An absent optional key without a default prints nothing and succeeds.
//! - Only the value is written to stdout so `$(starter get KEY)` stays clean.

use anyhow::Result;
use serde_json::Value;
use starter_config::{ConfigError, FromSetting, Lookup, Settings};
use std::path::PathBuf;

use crate::args::ValueType;
use crate::output::OutputFormat;

/// Parameters of a single lookup.
#[derive(Debug, Clone)]
pub struct GetRequest<'a> {
    pub key: &'a str,
    pub kind: ValueType,
    pub required: bool,
    pub default: Option<&'a str>,
    pub feature: &'a str,
}

impl GetRequest<'_> {
    fn lookup(&self) -> Lookup<'_> {
        if self.required {
            Lookup::Required {
                feature: self.feature,
            }
        } else {
            Lookup::Optional {
                default: self.default,
            }
        }
    }
}

fn typed<T: FromSetting>(
    settings: &Settings,
    req: &GetRequest<'_>,
    to_json: fn(T) -> Value,
) -> Result<Option<Value>, ConfigError> {
    Ok(settings.lookup::<T>(req.key, req.lookup())?.map(to_json))
}

/// Resolve the request to a JSON value, `None` when absent without default.
pub fn resolve(settings: &Settings, req: &GetRequest<'_>) -> Result<Option<Value>, ConfigError> {
    match req.kind {
        ValueType::String => typed::<String>(settings, req, Value::String),
        ValueType::Int => typed::<i64>(settings, req, Value::from),
        ValueType::Float => typed::<f64>(settings, req, Value::from),
        ValueType::Bool => typed::<bool>(settings, req, Value::Bool),
        ValueType::Url => typed::<url::Url>(settings, req, |u| Value::String(u.into())),
        ValueType::Path => typed::<PathBuf>(settings, req, |p| {
            Value::String(p.to_string_lossy().into_owned())
        }),
    }
}

/// Render a resolved value for stdout.
pub fn render(value: &Value, format: OutputFormat) -> String {
    match (format, value) {
        (OutputFormat::Table, Value::String(s)) => s.clone(),
        _ => value.to_string(),
    }
}

pub fn run(settings: &Settings, req: GetRequest<'_>, format: OutputFormat) -> Result<()> {
    if let Some(value) = resolve(settings, &req)? {
        println!("{}", render(&value, format));
    } else {
        tracing::debug!(key = req.key, "key is unset and has no default");
    }
    Ok(())
}

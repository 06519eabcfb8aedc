//! `starter status`: runtime options and provider credential presence.
//!
//! Invariants:
//! - Credential values are never printed, only whether they are set.
//! - `DATABASE_URL` is left out; `starter show runtime` prints it masked.

use anyhow::Result;
use serde::Serialize;
use starter_config::{ApiKeyStatus, RuntimeOptions, Settings, api_key_status};
use tracing::warn;

use crate::output::{OutputFormat, Tabular, render};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRow {
    pub name: String,
    pub value: String,
}

impl Tabular for StatusRow {
    fn headers() -> &'static [&'static str] {
        &["NAME", "VALUE"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.value.clone()]
    }
}

fn row(name: impl Into<String>, value: impl Into<String>) -> StatusRow {
    StatusRow {
        name: name.into(),
        value: value.into(),
    }
}

fn mode(options: &RuntimeOptions) -> &'static str {
    if options.is_production() {
        "production"
    } else if options.is_development() {
        "development"
    } else {
        "other"
    }
}

pub fn rows(options: &RuntimeOptions, credentials: &[ApiKeyStatus]) -> Vec<StatusRow> {
    let mut rows = vec![
        row("env", options.env.as_str()),
        row("mode", mode(options)),
        row("debug", options.debug.to_string()),
        row("app_name", options.app_name.as_str()),
        row("app_port", options.app_port.to_string()),
        row("data_dir", options.data_dir.display().to_string()),
        row("raw_data_dir", options.raw_data_dir().display().to_string()),
        row(
            "processed_data_dir",
            options.processed_data_dir().display().to_string(),
        ),
        row("output_dir", options.output_dir.display().to_string()),
        row(
            "http_timeout_secs",
            options.http_timeout.as_secs().to_string(),
        ),
    ];

    rows.extend(credentials.iter().map(|status| {
        row(
            format!("{} ({})", status.provider, status.key),
            if status.configured { "configured" } else { "missing" },
        )
    }));

    rows
}

pub fn run(settings: &Settings, format: OutputFormat) -> Result<()> {
    let options = RuntimeOptions::from_settings(settings)?;
    let credentials = api_key_status(settings);

    if !credentials.iter().any(|status| status.configured) {
        warn!("no provider credentials configured; copy .env.example to .env and add your keys");
    }

    println!("{}", render(&rows(&options, &credentials), format)?);
    Ok(())
}

//! `starter show`: display effective values and where they came from.

use anyhow::Result;
use serde::Serialize;
use starter_config::{Feature, Origin, Settings, ValueKind};

use crate::commands::selected_features;
use crate::output::{OutputFormat, Tabular, cell, render};

#[derive(Debug, Serialize)]
pub struct ShowRow {
    pub feature: &'static str,
    pub key: &'static str,
    pub kind: ValueKind,
    pub required: bool,
    pub origin: Origin,
    pub value: Option<String>,
}

impl Tabular for ShowRow {
    fn headers() -> &'static [&'static str] {
        &["FEATURE", "KEY", "TYPE", "ORIGIN", "VALUE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.feature.to_string(),
            self.key.to_string(),
            self.kind.name().to_string(),
            self.origin.to_string(),
            cell(self.value.as_deref()),
        ]
    }
}

pub fn rows(settings: &Settings, features: &[Feature]) -> Vec<ShowRow> {
    selected_features(features)
        .into_iter()
        .flat_map(|feature| {
            feature
                .schema()
                .resolve(settings)
                .into_iter()
                .map(move |resolved| ShowRow {
                    feature: feature.name(),
                    key: resolved.key,
                    kind: resolved.kind,
                    required: resolved.required,
                    origin: resolved.origin,
                    value: resolved.display,
                })
        })
        .collect()
}

pub fn run(settings: &Settings, features: &[Feature], format: OutputFormat) -> Result<()> {
    println!("{}", render(&rows(settings, features), format)?);
    Ok(())
}

//! `starter features`: list the catalog.

use anyhow::Result;
use serde::Serialize;
use starter_config::{Feature, Requirement, ValueKind};

use crate::output::{OutputFormat, Tabular, cell, render};

#[derive(Debug, Serialize)]
pub struct FeatureKeyRow {
    pub feature: &'static str,
    pub key: &'static str,
    pub kind: ValueKind,
    pub required: bool,
    /// One key of an interchangeable group must be set.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub any_of: bool,
    pub default: Option<&'static str>,
    pub description: &'static str,
}

impl Tabular for FeatureKeyRow {
    fn headers() -> &'static [&'static str] {
        &["FEATURE", "KEY", "TYPE", "REQUIRED", "DEFAULT", "DESCRIPTION"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.feature.to_string(),
            self.key.to_string(),
            self.kind.name().to_string(),
            match (self.required, self.any_of) {
                (true, _) => "yes",
                (false, true) => "one of",
                (false, false) => "no",
            }
            .to_string(),
            cell(self.default),
            self.description.to_string(),
        ]
    }
}

pub fn rows() -> Vec<FeatureKeyRow> {
    Feature::ALL
        .iter()
        .flat_map(|feature| {
            let schema = feature.schema();
            schema
                .keys()
                .iter()
                .map(|spec| FeatureKeyRow {
                    feature: feature.name(),
                    key: spec.key,
                    kind: spec.kind,
                    required: spec.is_required(),
                    any_of: matches!(spec.requirement, Requirement::AnyOf(_)),
                    default: spec.default_value(),
                    description: spec.description,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn run(format: OutputFormat) -> Result<()> {
    println!("{}", render(&rows(), format)?);
    Ok(())
}

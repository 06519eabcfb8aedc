//! `starter check`: validate settings against feature schemas.
//!
//! Responsibilities:
//! - Validate every selected feature and report every problem, not just the first.
//! - Return `CheckFailed` so the exit code reflects the worst problem found.
//!
//! Does NOT handle:
//! - Loading settings (done once in `main`).

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeSet;
use starter_config::{ConfigError, Feature, Settings};
use tracing::{debug, info};

use crate::commands::selected_features;
use crate::error::CheckFailed;
use crate::output::{OutputFormat, Tabular, cell, render};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Ok,
    Missing,
    Invalid,
}

#[derive(Debug, Serialize)]
pub struct CheckRow {
    pub feature: &'static str,
    pub status: CheckStatus,
    pub key: Option<String>,
    pub message: Option<String>,
}

impl Tabular for CheckRow {
    fn headers() -> &'static [&'static str] {
        &["FEATURE", "STATUS", "KEY", "MESSAGE"]
    }

    fn row(&self) -> Vec<String> {
        let status = match self.status {
            CheckStatus::Ok => "ok",
            CheckStatus::Missing => "missing",
            CheckStatus::Invalid => "invalid",
        };
        vec![
            self.feature.to_string(),
            status.to_string(),
            cell(self.key.as_deref()),
            cell(self.message.as_deref()),
        ]
    }
}

/// Validate the selected features, one row per problem or per passing feature.
pub fn check(settings: &Settings, features: &[Feature]) -> Vec<CheckRow> {
    let mut rows = Vec::new();

    for feature in selected_features(features) {
        match feature.schema().validate(settings) {
            Ok(()) => {
                debug!(feature = feature.name(), "configuration ok");
                rows.push(CheckRow {
                    feature: feature.name(),
                    status: CheckStatus::Ok,
                    key: None,
                    message: None,
                });
            }
            Err(errors) => rows.extend(errors.iter().map(|e| CheckRow {
                feature: feature.name(),
                status: status_of(e),
                key: key_label(e),
                message: Some(e.to_string()),
            })),
        }
    }

    rows
}

/// Interchangeable keys are shown together, e.g. `A | B`.
fn key_label(err: &ConfigError) -> Option<String> {
    let keys = err.keys();
    (!keys.is_empty()).then(|| keys.join(" | "))
}

fn status_of(err: &ConfigError) -> CheckStatus {
    if err.is_missing() {
        CheckStatus::Missing
    } else {
        CheckStatus::Invalid
    }
}

/// Count the distinct keys with the given status.
///
/// Features share keys, so one absent key can produce several rows.
fn distinct_keys(rows: &[CheckRow], status: CheckStatus) -> usize {
    rows.iter()
        .filter(|r| r.status == status)
        .map(|r| r.key.as_deref())
        .collect::<BTreeSet<_>>()
        .len()
}

/// Summarize failures, or `None` when every feature passed.
pub fn summarize(rows: &[CheckRow]) -> Option<CheckFailed> {
    let missing = distinct_keys(rows, CheckStatus::Missing);
    let invalid = distinct_keys(rows, CheckStatus::Invalid);

    if missing == 0 && invalid == 0 {
        None
    } else {
        Some(CheckFailed { missing, invalid })
    }
}

pub fn run(settings: &Settings, features: &[Feature], format: OutputFormat) -> Result<()> {
    let rows = check(settings, features);
    println!("{}", render(&rows, format)?);

    match summarize(&rows) {
        None => {
            info!("all selected features are configured");
            Ok(())
        }
        Some(failed) => Err(failed.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_reports_missing_credentials() {
        let settings = Settings::default();
        let rows = check(&settings, &[Feature::AiChat, Feature::Runtime]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].feature, "ai-chat");
        assert_eq!(rows[0].status, CheckStatus::Missing);
        assert_eq!(rows[0].key.as_deref(), Some("OPENAI_API_KEY"));
        assert_eq!(rows[1].status, CheckStatus::Ok);

        assert_eq!(
            summarize(&rows),
            Some(CheckFailed {
                missing: 1,
                invalid: 0
            })
        );
    }

    #[test]
    fn test_check_reports_invalid_values() {
        let settings = Settings::from_pairs([("HTTP_TIMEOUT_SECS", "soon")]);
        let rows = check(&settings, &[Feature::Runtime]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, CheckStatus::Invalid);
        assert!(rows[0].message.as_deref().unwrap().contains("HTTP_TIMEOUT_SECS"));
    }

    #[test]
    fn test_check_passes_when_configured() {
        let settings = Settings::from_pairs([("OPENAI_API_KEY", "sk-test-123456")]);
        let rows = check(&settings, &[Feature::AiChat, Feature::Transcription]);
        assert!(rows.iter().all(|r| r.status == CheckStatus::Ok));
        assert_eq!(summarize(&rows), None);
    }

    #[test]
    fn test_shared_missing_key_is_counted_once() {
        let rows = check(
            &Settings::default(),
            &[Feature::AiChat, Feature::Transcription],
        );

        let missing: Vec<_> = rows
            .iter()
            .filter(|r| r.status == CheckStatus::Missing)
            .collect();
        assert_eq!(missing.len(), 2);
        assert!(
            missing
                .iter()
                .all(|r| r.key.as_deref() == Some("OPENAI_API_KEY"))
        );

        assert_eq!(
            summarize(&rows),
            Some(CheckFailed {
                missing: 1,
                invalid: 0
            })
        );
    }

    #[test]
    fn test_full_check_counts_distinct_keys() {
        let rows = check(&Settings::default(), &[]);
        // OPENAI_API_KEY, ANTHROPIC_API_KEY, TELEGRAM_BOT_TOKEN,
        // DISCORD_BOT_TOKEN and the bot token group
        assert_eq!(
            summarize(&rows),
            Some(CheckFailed {
                missing: 5,
                invalid: 0
            })
        );
    }

    #[test]
    fn test_bot_token_group_is_one_row() {
        let rows = check(&Settings::default(), &[Feature::MessagingBot]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, CheckStatus::Missing);
        assert_eq!(
            rows[0].key.as_deref(),
            Some("TELEGRAM_BOT_TOKEN | DISCORD_BOT_TOKEN")
        );
    }
}

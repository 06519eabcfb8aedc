//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Pass the already-loaded settings by reference to every handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Loading settings (see `main()`).

use anyhow::Result;
use starter_config::{Settings, features};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::commands::get::GetRequest;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: &Cli, settings: &Settings) -> Result<()> {
    match &cli.command {
        Commands::Features => commands::features::run(cli.output),
        Commands::Check { features } => commands::check::run(settings, features, cli.output),
        Commands::Show { features } => commands::show::run(settings, features, cli.output),
        Commands::Status => commands::status::run(settings, cli.output),
        Commands::Get {
            key,
            kind,
            required,
            default,
            feature,
        } => commands::get::run(
            settings,
            GetRequest {
                key,
                kind: *kind,
                required: *required,
                default: default.as_deref(),
                feature: feature_for(key, feature.as_deref()),
            },
            cli.output,
        ),
    }
}

/// Feature named when a required key is absent: the flag, else the first
/// catalog feature that declares the key.
fn feature_for<'a>(key: &str, flag: Option<&'a str>) -> &'a str {
    flag.or_else(|| features::declared(key).map(|(feature, _)| feature.name()))
        .unwrap_or(FALLBACK_FEATURE)
}

const FALLBACK_FEATURE: &str = "starter";

//! Starter CLI - check and inspect template configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load settings exactly once and hand them to the selected command.
//! - Print errors once, at the outermost level, and exit with a structured code.
//!
//! Does NOT handle:
//! - Configuration resolution rules (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only command output.
//! - `--no-env-file` wins over `--env-file` and `STARTER_ENV_FILE`.

mod args;
mod commands;
mod dispatch;
mod error;
mod output;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use starter_config::{ConfigError, ConfigLoader, Settings};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn load_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    let mut loader = ConfigLoader::new();

    if cli.no_env_file {
        loader = loader.without_env_file();
    } else if let Some(ref path) = cli.env_file {
        // Blank values fall back to the conventional .env
        if !path.to_string_lossy().trim().is_empty() {
            loader = loader.with_env_file(path.clone());
        }
    }

    let loader = loader.load_dotenv()?;
    if let Some(path) = loader.env_file_path() {
        tracing::debug!(path = %path.display(), "using override file");
    }

    Ok(loader.from_env().build())
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };
    tracing::debug!(entries = settings.len(), "settings loaded");

    let exit_code = match run_command(&cli, &settings) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

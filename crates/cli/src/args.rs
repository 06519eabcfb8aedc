//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load settings (see `main()`).

use clap::{Parser, Subcommand, ValueEnum};
use starter_config::Feature;
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "starter")]
#[command(about = "Check and inspect the configuration used by the starter kit templates", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  starter check\n  starter check ai-chat telegram-bot\n  starter show runtime\n  starter status\n  starter get HTTP_TIMEOUT_SECS --type int --default 30\n  starter --env-file ./staging.env check\n"
)]
pub struct Cli {
    /// Path to the override file (defaults to ./.env)
    #[arg(long, global = true, env = "STARTER_ENV_FILE", value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Do not read any override file, only the process environment (wins over --env-file)
    #[arg(long, global = true)]
    pub no_env_file: bool,

    /// Output format (table, json)
    #[arg(short, long, global = true, env = "STARTER_OUTPUT", default_value = "table")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the template features and the keys each one reads
    Features,

    /// Validate configuration for the given features (all when none given)
    Check {
        /// Feature names, e.g. ai-chat, telegram-bot
        features: Vec<Feature>,
    },

    /// Show effective values for the given features (secrets masked)
    Show {
        /// Feature names, e.g. runtime, discord-bot
        features: Vec<Feature>,
    },

    /// Show runtime options and which provider credentials are configured
    Status,

    /// Print a single setting, coerced to the requested type
    Get {
        /// Configuration key (case-sensitive)
        key: String,

        /// Type to coerce the value to
        #[arg(short = 't', long = "type", value_enum, default_value = "string")]
        kind: ValueType,

        /// Fail if the key is absent
        #[arg(long, conflicts_with = "default")]
        required: bool,

        /// Value to print when the key is absent
        #[arg(long)]
        default: Option<String>,

        /// Feature named in the error when a required key is absent
        /// (defaults to the first feature that declares the key)
        #[arg(long)]
        feature: Option<String>,
    },
}

/// Types `starter get` can coerce to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    String,
    Int,
    Float,
    Bool,
    Url,
    Path,
}

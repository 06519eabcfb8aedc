//! Catalog of the template families and the keys each one reads.
//!
//! Each template owns its key names; this catalog collects them so the
//! binary can validate everything at startup rather than deep inside a
//! template's control flow.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_APP_NAME, DEFAULT_DATA_DIR, DEFAULT_DATABASE_URL, DEFAULT_ENV, DEFAULT_OUTPUT_DIR,
};
use crate::schema::{KeySpec, Schema, ValueKind};

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const DISCORD_BOT_TOKEN: &str = "DISCORD_BOT_TOKEN";
pub const DATABASE_URL: &str = "DATABASE_URL";
pub const ENV: &str = "ENV";
pub const DEBUG: &str = "DEBUG";
pub const APP_NAME: &str = "APP_NAME";
pub const APP_PORT: &str = "APP_PORT";
pub const DATA_DIR: &str = "DATA_DIR";
pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
pub const OUTPUT_DIR: &str = "OUTPUT_DIR";

/// Either token starts the messaging bot; Telegram is tried first.
pub const BOT_TOKENS: &[&str] = &[TELEGRAM_BOT_TOKEN, DISCORD_BOT_TOKEN];

/// Credential keys per provider, in the order they are reported.
pub const PROVIDER_KEYS: [(&str, &str); 4] = [
    ("openai", OPENAI_API_KEY),
    ("anthropic", ANTHROPIC_API_KEY),
    ("telegram", TELEGRAM_BOT_TOKEN),
    ("discord", DISCORD_BOT_TOKEN),
];

// Schemas store defaults as text; kept in step with the numeric constants.
const DEFAULT_HTTP_TIMEOUT_TEXT: &str = "30";
const DEFAULT_APP_PORT_TEXT: &str = "8501";
const DEFAULT_DEBUG_TEXT: &str = "true";

const TELEGRAM_TOKEN_EXAMPLE: &str = "123456789:ABCdefGhIJKlmNoPQRsTUVwxyZ";

/// A template family that consumes configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Options shared by every template.
    Runtime,
    AiChat,
    Anthropic,
    Transcription,
    ImageAnalysis,
    TelegramBot,
    DiscordBot,
    /// The bot launcher that runs whichever platform has a token.
    MessagingBot,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::Runtime,
        Feature::AiChat,
        Feature::Anthropic,
        Feature::Transcription,
        Feature::ImageAnalysis,
        Feature::TelegramBot,
        Feature::DiscordBot,
        Feature::MessagingBot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Feature::Runtime => "runtime",
            Feature::AiChat => "ai-chat",
            Feature::Anthropic => "anthropic",
            Feature::Transcription => "transcription",
            Feature::ImageAnalysis => "image-analysis",
            Feature::TelegramBot => "telegram-bot",
            Feature::DiscordBot => "discord-bot",
            Feature::MessagingBot => "messaging-bot",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Feature::Runtime => "Environment and app options shared by all templates",
            Feature::AiChat => "Chatbot wrapper around the OpenAI API",
            Feature::Anthropic => "Templates calling the Anthropic API",
            Feature::Transcription => "Speech-to-text through the OpenAI API",
            Feature::ImageAnalysis => "Image description; the AI step is skipped without a key",
            Feature::TelegramBot => "Telegram bot with command handlers",
            Feature::DiscordBot => "Discord bot with command handlers",
            Feature::MessagingBot => "Starts the Telegram or Discord bot, whichever has a token",
        }
    }

    pub fn schema(self) -> Schema {
        let schema = Schema::new(self.name());
        match self {
            Feature::Runtime => schema
                .optional(
                    ENV,
                    ValueKind::String,
                    Some(DEFAULT_ENV),
                    "Deployment environment (dev, development, production)",
                )
                .optional(
                    DEBUG,
                    ValueKind::Bool,
                    Some(DEFAULT_DEBUG_TEXT),
                    "Verbose diagnostics in the templates",
                )
                .optional(
                    APP_NAME,
                    ValueKind::String,
                    Some(DEFAULT_APP_NAME),
                    "Name shown by the web templates",
                )
                .optional(
                    APP_PORT,
                    ValueKind::Port,
                    Some(DEFAULT_APP_PORT_TEXT),
                    "Port the web templates listen on",
                )
                .optional(
                    DATABASE_URL,
                    ValueKind::Secret,
                    Some(DEFAULT_DATABASE_URL),
                    "Database connection string",
                )
                .optional(
                    DATA_DIR,
                    ValueKind::Path,
                    Some(DEFAULT_DATA_DIR),
                    "Data root holding raw/ and processed/",
                )
                .optional(
                    HTTP_TIMEOUT_SECS,
                    ValueKind::Duration,
                    Some(DEFAULT_HTTP_TIMEOUT_TEXT),
                    "Network timeout for outgoing requests, in seconds",
                )
                .optional(
                    OUTPUT_DIR,
                    ValueKind::Path,
                    Some(DEFAULT_OUTPUT_DIR),
                    "Directory templates write results into",
                ),
            Feature::AiChat | Feature::Transcription => schema.required(
                OPENAI_API_KEY,
                ValueKind::Secret,
                "OpenAI API key",
                "sk-...",
            ),
            Feature::Anthropic => schema.required(
                ANTHROPIC_API_KEY,
                ValueKind::Secret,
                "Anthropic API key",
                "sk-ant-...",
            ),
            Feature::ImageAnalysis => schema.optional(
                OPENAI_API_KEY,
                ValueKind::Secret,
                None,
                "OpenAI API key for AI descriptions",
            ),
            Feature::TelegramBot => schema.required(
                TELEGRAM_BOT_TOKEN,
                ValueKind::Secret,
                "Bot token issued by @BotFather",
                TELEGRAM_TOKEN_EXAMPLE,
            ),
            Feature::DiscordBot => schema.required(
                DISCORD_BOT_TOKEN,
                ValueKind::Secret,
                "Bot token from the Discord developer portal",
                "MTA1...your-discord-token",
            ),
            Feature::MessagingBot => schema.any_of(
                BOT_TOKENS,
                ValueKind::Secret,
                "Telegram or Discord bot token",
                TELEGRAM_TOKEN_EXAMPLE,
            ),
        }
    }
}

/// Find the first feature that declares `key`, together with its declaration.
pub fn declared(key: &str) -> Option<(Feature, KeySpec)> {
    Feature::ALL.into_iter().find_map(|feature| {
        feature
            .schema()
            .spec(key)
            .cloned()
            .map(|spec| (feature, spec))
    })
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a feature name is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feature '{0}' (expected one of: {known})", known = known_names())]
pub struct UnknownFeature(pub String);

fn known_names() -> String {
    Feature::ALL
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Feature::ALL
            .into_iter()
            .find(|f| f.name() == normalized)
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}

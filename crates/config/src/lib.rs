//! Configuration resolver for the starter kit templates.
//!
//! This crate loads settings once from the process environment layered over an
//! optional `.env` override file, and gives templates typed, named access to
//! credentials and runtime options.
//!
//! ```no_run
//! use starter_config::{features, load};
//!
//! let settings = load()?;
//! let api_key: String = settings.require(features::OPENAI_API_KEY, "ai-chat")?;
//! let timeout = settings.get_or(features::HTTP_TIMEOUT_SECS, std::time::Duration::from_secs(30))?;
//! let (platform, token): (_, String) = settings.require_any(features::BOT_TOKENS, "messaging-bot")?;
//! # let _ = (api_key, timeout, platform, token);
//! # Ok::<(), starter_config::ConfigError>(())
//! ```

mod coerce;
pub mod constants;
pub mod features;
mod loader;
mod runtime;
pub mod schema;
mod settings;

pub use coerce::FromSetting;
pub use features::{Feature, UnknownFeature};
pub use loader::{ConfigError, ConfigLoader, env_var_or_none, load};
pub use runtime::{ApiKeyStatus, RuntimeOptions, api_key_status};
pub use schema::{KeySpec, Origin, Requirement, ResolvedKey, Schema, ValueKind, mask_secret};
pub use settings::{Lookup, Setting, Settings, Source};

//! Configuration loader for environment variables and the `.env` override file.
//!
//! Responsibilities:
//! - Read the optional `.env` override file without mutating the process environment.
//! - Snapshot the process environment.
//! - Merge both layers into an immutable `Settings` value.
//!
//! Does NOT handle:
//! - Typed access to individual keys (see `settings.rs`).
//! - Deciding which keys are required (see `schema.rs`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over `.env` file values.
//! - Empty or whitespace-only values are treated as unset in both layers.
//! - The `DOTENV_DISABLED` variable is checked before the override file is read.

mod builder;
mod env;
mod envfile;
mod error;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, load};
pub use env::env_var_or_none;
pub(crate) use env::normalize_value;
pub use error::ConfigError;

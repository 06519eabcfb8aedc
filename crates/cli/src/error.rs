//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants and check failures to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-4 are reserved for specific error categories.
//! - Missing configuration outranks invalid values when both occur.

use starter_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for `starter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A required key is absent from both the environment and the override file.
    ///
    /// Scripts should ask the operator to set the key; retrying will not help.
    MissingConfig = 2,

    /// A key is present but cannot be coerced to its declared type.
    InvalidValue = 3,

    /// The override file exists but could not be read or parsed.
    EnvFileError = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::Missing { .. } | ConfigError::MissingAnyOf { .. } => {
                ExitCode::MissingConfig
            }
            ConfigError::InvalidType { .. } => ExitCode::InvalidValue,
            ConfigError::DotenvParse { .. } | ConfigError::DotenvIo { .. } => {
                ExitCode::EnvFileError
            }
        }
    }
}

/// Summary error returned by `starter check` after every problem was printed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("configuration check failed: {missing} missing, {invalid} invalid")]
pub struct CheckFailed {
    pub missing: usize,
    pub invalid: usize,
}

impl From<&CheckFailed> for ExitCode {
    fn from(err: &CheckFailed) -> Self {
        if err.missing > 0 {
            ExitCode::MissingConfig
        } else {
            ExitCode::InvalidValue
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if let Some(check_err) = cause.downcast_ref::<CheckFailed>() {
                return ExitCode::from(check_err);
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::MissingConfig.as_i32(), 2);
        assert_eq!(ExitCode::InvalidValue.as_i32(), 3);
        assert_eq!(ExitCode::EnvFileError.as_i32(), 4);
    }

    #[test]
    fn test_from_config_error() {
        let missing = ConfigError::missing("OPENAI_API_KEY", "ai-chat");
        assert_eq!(ExitCode::from(&missing), ExitCode::MissingConfig);

        let either = ConfigError::missing_any_of(
            &["TELEGRAM_BOT_TOKEN", "DISCORD_BOT_TOKEN"],
            "messaging-bot",
        );
        assert_eq!(ExitCode::from(&either), ExitCode::MissingConfig);

        let invalid = ConfigError::InvalidType {
            key: "PORT".to_string(),
            expected: "integer",
            message: "invalid digit found in string".to_string(),
        };
        assert_eq!(ExitCode::from(&invalid), ExitCode::InvalidValue);

        let parse = ConfigError::DotenvParse {
            path: PathBuf::from(".env"),
            line: 1,
        };
        assert_eq!(ExitCode::from(&parse), ExitCode::EnvFileError);
    }

    #[test]
    fn test_check_failed_prefers_missing() {
        let both = CheckFailed { missing: 1, invalid: 2 };
        assert_eq!(ExitCode::from(&both), ExitCode::MissingConfig);
        let invalid_only = CheckFailed { missing: 0, invalid: 1 };
        assert_eq!(ExitCode::from(&invalid_only), ExitCode::InvalidValue);
    }

    #[test]
    fn test_exit_code_ext_finds_error_in_chain() {
        let err: anyhow::Error = Err::<(), _>(ConfigError::missing("TELEGRAM_BOT_TOKEN", "telegram-bot"))
            .context("failed to start bot")
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::MissingConfig);
    }

    #[test]
    fn test_exit_code_ext_defaults_to_general_error() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}

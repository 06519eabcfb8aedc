//! Typed coercion of raw string settings.
//!
//! Responsibilities:
//! - Convert raw `&str` values into the scalar types templates ask for.
//! - Describe each target type with a human-readable kind for error messages.
//!
//! Invariants:
//! - Parse failure messages never contain the raw value (it may be a credential).

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

/// A type that can be produced from a raw configuration value.
pub trait FromSetting: Sized {
    /// Human-readable name of the expected type, used in `InvalidType` errors.
    const KIND: &'static str;

    /// Parse a trimmed, non-empty raw value.
    ///
    /// The `Err` message is surfaced to operators and must not echo `raw`.
    fn parse_setting(raw: &str) -> Result<Self, String>;
}

impl FromSetting for String {
    const KIND: &'static str = "string";

    fn parse_setting(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

impl FromSetting for SecretString {
    const KIND: &'static str = "secret";

    fn parse_setting(raw: &str) -> Result<Self, String> {
        Ok(SecretString::new(raw.into()))
    }
}

macro_rules! impl_from_setting_via_parse {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl FromSetting for $ty {
                const KIND: &'static str = $kind;

                fn parse_setting(raw: &str) -> Result<Self, String> {
                    raw.parse::<$ty>().map_err(|e| e.to_string())
                }
            }
        )*
    };
}

impl_from_setting_via_parse! {
    i64 => "integer",
    i32 => "integer",
    u64 => "non-negative integer",
    u32 => "non-negative integer",
    u16 => "non-negative integer",
    usize => "non-negative integer",
}

impl FromSetting for f64 {
    const KIND: &'static str = "number";

    fn parse_setting(raw: &str) -> Result<Self, String> {
        let value: f64 = raw.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err("must be a finite number".to_string())
        }
    }
}

impl FromSetting for bool {
    const KIND: &'static str = "boolean";

    fn parse_setting(raw: &str) -> Result<Self, String> {
        match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err("must be one of true/false, 1/0, yes/no, on/off".to_string()),
        }
    }
}

impl FromSetting for PathBuf {
    const KIND: &'static str = "path";

    fn parse_setting(raw: &str) -> Result<Self, String> {
        Ok(PathBuf::from(raw))
    }
}

/// Durations are expressed in whole seconds.
impl FromSetting for Duration {
    const KIND: &'static str = "duration in seconds";

    fn parse_setting(raw: &str) -> Result<Self, String> {
        raw.parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| e.to_string())
    }
}

impl FromSetting for url::Url {
    const KIND: &'static str = "http(s) URL";

    fn parse_setting(raw: &str) -> Result<Self, String> {
        let parsed = url::Url::parse(raw).map_err(|e| e.to_string())?;

        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(format!("scheme must be http or https, got: {scheme}"));
        }
        if parsed.host_str().is_none() {
            return Err("host is required".to_string());
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_integer_coercion() {
        assert_eq!(i64::parse_setting("42"), Ok(42));
        assert_eq!(i64::parse_setting("-7"), Ok(-7));
        assert!(i64::parse_setting("abc").is_err());
        assert!(u16::parse_setting("70000").is_err());
        assert!(u64::parse_setting("-1").is_err());
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(f64::parse_setting("0.5"), Ok(0.5));
        assert_eq!(f64::parse_setting("3"), Ok(3.0));
        assert!(f64::parse_setting("NaN").is_err());
        assert!(f64::parse_setting("inf").is_err());
        assert!(f64::parse_setting("abc").is_err());
    }

    #[test]
    fn test_bool_coercion_accepts_common_spellings() {
        for raw in ["true", "TRUE", "1", "yes", "On"] {
            assert_eq!(bool::parse_setting(raw), Ok(true), "{raw}");
        }
        for raw in ["false", "False", "0", "no", "OFF"] {
            assert_eq!(bool::parse_setting(raw), Ok(false), "{raw}");
        }
        assert!(bool::parse_setting("maybe").is_err());
    }

    #[test]
    fn test_duration_is_whole_seconds() {
        assert_eq!(Duration::parse_setting("30"), Ok(Duration::from_secs(30)));
        assert!(Duration::parse_setting("1.5").is_err());
    }

    #[test]
    fn test_url_requires_http_scheme_and_host() {
        let url = url::Url::parse_setting("https://tile.example.com/{z}/{x}/{y}.png").unwrap();
        assert_eq!(url.host_str(), Some("tile.example.com"));

        let err = url::Url::parse_setting("ftp://example.com").unwrap_err();
        assert!(err.contains("scheme"));
        assert!(url::Url::parse_setting("not a url").is_err());
    }

    #[test]
    fn test_error_messages_do_not_echo_value() {
        let secret = "sk-live-abcdef";
        let err = i64::parse_setting(secret).unwrap_err();
        assert!(!err.contains(secret));
        let err = bool::parse_setting(secret).unwrap_err();
        assert!(!err.contains(secret));
        let err = url::Url::parse_setting(secret).unwrap_err();
        assert!(!err.contains(secret));
    }

    #[test]
    fn test_secret_coercion_preserves_value() {
        let secret = SecretString::parse_setting("token-123").unwrap();
        assert_eq!(secret.expose_secret(), "token-123");
    }
}

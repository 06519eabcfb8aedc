//! Environment variable helpers.
//!
//! Responsibilities:
//! - Normalize raw values (trim, drop blanks) the same way for every source.
//! - Snapshot the process environment for `ConfigLoader::from_env`.
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Variables whose name or value is not valid UTF-8 are skipped.

/// Trim a raw value, returning `None` if nothing is left.
pub(crate) fn normalize_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Snapshot every UTF-8 variable in the process environment.
pub(crate) fn process_env_snapshot() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_normalize_value() {
        assert_eq!(normalize_value("value"), Some("value".to_string()));
        assert_eq!(normalize_value("  padded \t"), Some("padded".to_string()));
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
    }

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key1 = "_STARTER_TEST_UNSET_VAR";
        assert!(env_var_or_none(key1).is_none(), "Unset env var should return None");

        temp_env::with_vars([(key1, Some(""))], || {
            assert!(env_var_or_none(key1).is_none(), "Empty string should return None");
        });

        temp_env::with_vars([(key1, Some("   "))], || {
            assert!(
                env_var_or_none(key1).is_none(),
                "Whitespace-only env var should return None"
            );
        });

        let key2 = "_STARTER_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" test-value "))], || {
            assert_eq!(env_var_or_none(key2), Some("test-value".to_string()));
        });
    }

    #[test]
    #[serial]
    fn test_process_env_snapshot_contains_set_variable() {
        let key = "_STARTER_TEST_SNAPSHOT_VAR";
        temp_env::with_vars([(key, Some("snap"))], || {
            let snapshot = process_env_snapshot();
            assert!(
                snapshot
                    .iter()
                    .any(|(k, v)| k == key && v == "snap")
            );
        });
    }
}

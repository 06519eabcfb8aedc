//! Parser for the `.env` override file.
//!
//! Responsibilities:
//! - Read `KEY=VALUE` assignments, one per line.
//! - Skip blank lines and lines whose first non-blank character is `#`.
//!
//! Does NOT handle:
//! - Quoting, escapes, `export` prefixes, or `$VAR` substitution. Everything
//!   after the first `=` is the value, byte for byte, apart from the
//!   surrounding whitespace that `normalize_value` trims.
//!
//! Invariants:
//! - The process environment is never read or modified here.
//! - Errors report the path and the 1-based line number, NEVER the line text.
//! - Within one file the first assignment of a key wins.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use super::env::normalize_value;
use super::error::ConfigError;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read and parse the override file at `path`.
pub(crate) fn read_env_file(path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::DotenvIo {
        path: path.to_path_buf(),
        kind: e.kind(),
    })?;

    parse_env_file(&contents).map_err(|line| ConfigError::DotenvParse {
        path: path.to_path_buf(),
        line,
    })
}

/// Parse override file contents, returning the offending line number on failure.
pub(crate) fn parse_env_file(contents: &str) -> Result<BTreeMap<String, String>, usize> {
    let contents = contents.strip_prefix(BYTE_ORDER_MARK).unwrap_or(contents);
    let mut entries = BTreeMap::new();

    for (index, line) in contents.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (key, value) = trimmed.split_once('=').ok_or(index + 1)?;
        let key = key.trim_end();
        if !is_valid_key(key) {
            return Err(index + 1);
        }

        if let Some(value) = normalize_value(value) {
            entries.entry(key.to_string()).or_insert(value);
        }
    }

    Ok(entries)
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.chars().any(char::is_whitespace)
}

/// True when a read failure means "no file here" rather than "unreadable file".
pub(crate) fn is_not_found(err: &ConfigError) -> bool {
    matches!(err, ConfigError::DotenvIo { kind, .. } if *kind == ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> BTreeMap<String, String> {
        parse_env_file(contents).expect("contents should parse")
    }

    #[test]
    fn test_values_are_kept_literally() {
        let entries = parse(concat!(
            "DOLLARS=p@$$word\n",
            "REFERENCE=abc$HOME\n",
            "BRACED=${OPENAI_API_KEY}\n",
            "SPACES=a b c\n",
            "SINGLE='quoted'\n",
            "DOUBLE=\"quoted\"\n",
            "HASH=x #y\n",
            "EQUALS=a=b=c\n",
            "BACKSLASH=C:\\temp\\n\n",
        ));

        assert_eq!(entries["DOLLARS"], "p@$$word");
        assert_eq!(entries["REFERENCE"], "abc$HOME");
        assert_eq!(entries["BRACED"], "${OPENAI_API_KEY}");
        assert_eq!(entries["SPACES"], "a b c");
        assert_eq!(entries["SINGLE"], "'quoted'");
        assert_eq!(entries["DOUBLE"], "\"quoted\"");
        assert_eq!(entries["HASH"], "x #y");
        assert_eq!(entries["EQUALS"], "a=b=c");
        assert_eq!(entries["BACKSLASH"], "C:\\temp\\n");
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let entries = parse("# heading\n\n   \n  # indented comment\nKEY=value\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries["KEY"], "value");
    }

    #[test]
    fn test_whitespace_around_key_and_value_is_trimmed() {
        let entries = parse("  KEY  =  value with inner space  \r\nOTHER=x\r\n");
        assert_eq!(entries["KEY"], "value with inner space");
        assert_eq!(entries["OTHER"], "x");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let entries = parse("EMPTY=\nSPACES=   \nSET=1\n");
        assert!(!entries.contains_key("EMPTY"));
        assert!(!entries.contains_key("SPACES"));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_first_assignment_wins() {
        let entries = parse("FOO=first\nFOO=second\n");
        assert_eq!(entries["FOO"], "first");
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let entries = parse("\u{feff}KEY=value\n");
        assert_eq!(entries["KEY"], "value");
    }

    #[test]
    fn test_malformed_lines_report_line_number() {
        assert_eq!(parse_env_file("OK=1\nNO_EQUALS_HERE\n"), Err(2));
        assert_eq!(parse_env_file("OK=1\n\n=value\n"), Err(3));
        assert_eq!(parse_env_file("export KEY=value\n"), Err(1));
    }
}

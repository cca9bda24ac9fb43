//! Per-field post-processing applied between extraction and logging.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Cleanup applied to each extracted value before it is logged.
///
/// `DurationToken` reproduces a fixup written against one site's markup:
/// a value whose first character is a backslash is replaced by the
/// fixed-width token at character offsets 17..22 of that same value.
/// Values shorter than the window yield a short or empty token, matching
/// the slice semantics the fixup was written with. It is only meaningful
/// for the markup it targets; other sources should select `None`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldCleanup {
    /// Pass every value through unchanged.
    None,
    /// Fixed-offset duration token fixup for backslash-prefixed values.
    #[default]
    DurationToken,
}

impl FieldCleanup {
    pub fn apply<'a>(self, value: &'a str) -> Cow<'a, str> {
        match self {
            Self::None => Cow::Borrowed(value),
            Self::DurationToken => {
                if value.starts_with('\\') {
                    Cow::Owned(value.chars().skip(17).take(5).collect())
                } else {
                    Cow::Borrowed(value)
                }
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::DurationToken => "duration-token",
        }
    }
}

impl fmt::Display for FieldCleanup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldCleanup {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "duration-token" => Ok(Self::DurationToken),
            _ => Err(ConfigError::UnknownCleanup(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_token_extracts_fixed_window() {
        // 17 chars of prefix, then the 5-char token, then a tail.
        let value = "\\abcdefghijklmnop12:34 remainder";
        assert_eq!(FieldCleanup::DurationToken.apply(value), "12:34");
    }

    #[test]
    fn duration_token_short_value_yields_empty() {
        // Backslash plus 14 chars: the 17..22 window is past the end.
        let value = "\\00:00:00:00:00";
        assert_eq!(FieldCleanup::DurationToken.apply(value), "");
    }

    #[test]
    fn duration_token_partial_window() {
        // 19 chars total: only two chars fall inside the window.
        let value = "\\abcdefghijklmnop45";
        assert_eq!(FieldCleanup::DurationToken.apply(value), "45");
    }

    #[test]
    fn duration_token_ignores_values_without_backslash() {
        assert_eq!(FieldCleanup::DurationToken.apply("3:45"), "3:45");
    }

    #[test]
    fn none_passes_everything_through() {
        let value = "\\abcdefghijklmnop12:34";
        assert_eq!(FieldCleanup::None.apply(value), value);
    }

    #[test]
    fn cleanup_round_trips_through_str() {
        for cleanup in [FieldCleanup::None, FieldCleanup::DurationToken] {
            assert_eq!(cleanup.as_str().parse::<FieldCleanup>().unwrap(), cleanup);
        }
    }

    #[test]
    fn cleanup_parse_rejects_unknown() {
        assert!("trim".parse::<FieldCleanup>().is_err());
    }
}

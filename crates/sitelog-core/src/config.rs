//! Poller configuration: a plain immutable value, constructed once and
//! passed by reference into each operation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cleanup::FieldCleanup;
use crate::error::ConfigError;

/// What the poll loop does with a failed cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Any fetch or extract failure terminates the loop and the process.
    #[default]
    FailFast,
    /// Log the failed cycle and keep polling.
    Continue,
}

impl ErrorPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FailFast => "fail-fast",
            Self::Continue => "continue",
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fail-fast" => Ok(Self::FailFast),
            "continue" => Ok(Self::Continue),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Immutable poller configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollerConfig {
    /// Combined host and path, split at the first `/`.
    pub address: String,
    /// Extraction pattern with at least `section_count` capturing groups.
    pub pattern: String,
    /// Number of capturing groups recorded per cycle.
    pub section_count: usize,
    /// Seconds between cycles.
    pub period_secs: u64,
    /// Dump fetched bodies and match details to the log.
    pub debug: bool,
    pub error_policy: ErrorPolicy,
    pub cleanup: FieldCleanup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_round_trips_through_str() {
        for policy in [ErrorPolicy::FailFast, ErrorPolicy::Continue] {
            assert_eq!(policy.as_str().parse::<ErrorPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn policy_parse_is_case_insensitive() {
        assert_eq!(
            "Fail-Fast".parse::<ErrorPolicy>().unwrap(),
            ErrorPolicy::FailFast
        );
    }

    #[test]
    fn policy_parse_rejects_unknown() {
        assert!("retry".parse::<ErrorPolicy>().is_err());
    }

    #[test]
    fn policy_default_is_fail_fast() {
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::FailFast);
    }
}

//! How strictly candidate records are checked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_STATUS_POLICY, DEFAULT_UNKNOWN_FIELD_POLICY};

/// What to do with fields that are not part of a kind's shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFieldPolicy {
    /// Fail validation, naming each unrecognized field
    #[default]
    Reject,
    /// Drop unrecognized fields from the normalized record
    Ignore,
}

impl UnknownFieldPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Ignore => "ignore",
        }
    }
}

impl fmt::Display for UnknownFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnknownFieldPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "ignore" => Ok(Self::Ignore),
            other => Err(format!(
                "unknown field policy '{}', expected 'reject' or 'ignore'",
                other
            )),
        }
    }
}

/// How the `status` field is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Any string is accepted
    #[default]
    Open,
    /// Only `active`, `deprecated` and `planned` are accepted
    Strict,
}

impl StatusPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unknown status policy '{}', expected 'open' or 'strict'",
                other
            )),
        }
    }
}

/// Validation settings applied to every record.
///
/// The default keeps the schema closed (unknown fields rejected) while
/// treating status as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    pub unknown_fields: UnknownFieldPolicy,
    pub status: StatusPolicy,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            unknown_fields: DEFAULT_UNKNOWN_FIELD_POLICY,
            status: DEFAULT_STATUS_POLICY,
        }
    }
}

impl ValidationPolicy {
    /// Reject unknown fields and undocumented statuses.
    pub fn strict() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Reject,
            status: StatusPolicy::Strict,
        }
    }

    /// Drop unknown fields and accept any status.
    pub fn lenient() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Ignore,
            status: StatusPolicy::Open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy.unknown_fields, UnknownFieldPolicy::Reject);
        assert_eq!(policy.status, StatusPolicy::Open);
    }

    #[test]
    fn test_parse_policies() {
        assert_eq!("Ignore".parse::<UnknownFieldPolicy>(), Ok(UnknownFieldPolicy::Ignore));
        assert_eq!(" strict ".parse::<StatusPolicy>(), Ok(StatusPolicy::Strict));
        assert!("drop".parse::<UnknownFieldPolicy>().is_err());
        assert!("closed".parse::<StatusPolicy>().is_err());
    }
}

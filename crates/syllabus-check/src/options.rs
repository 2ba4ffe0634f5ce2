//! Check options and failure modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use syllabus_model::DEFAULT_MAX_TOPIC_ID;
use thiserror::Error;

/// Tunables for [`validate`](crate::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckOptions {
    /// Largest topic id considered valid
    pub max_topic_id: u16,

    /// Compare hand-written Previous/Next links with the derived order
    pub check_navigation: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            max_topic_id: DEFAULT_MAX_TOPIC_ID,
            check_navigation: true,
        }
    }
}

/// What makes a run fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckMode {
    /// Report only; never fail (interactive editing)
    Advisory,
    /// Fail on errors (CI)
    #[default]
    Strict,
    /// Fail on errors and warnings
    DenyWarnings,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown check mode {0:?} (expected advisory, strict or deny-warnings)")]
pub struct ParseModeError(pub String);

impl FromStr for CheckMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "advisory" => Ok(CheckMode::Advisory),
            "strict" | "ci" => Ok(CheckMode::Strict),
            "deny-warnings" => Ok(CheckMode::DenyWarnings),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckMode::Advisory => "advisory",
            CheckMode::Strict => "strict",
            CheckMode::DenyWarnings => "deny-warnings",
        })
    }
}

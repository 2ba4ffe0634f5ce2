//! Configuration for a catalog root.
//!
//! Resolution order, later wins:
//!
//! 1. built-in defaults
//! 2. `syllabus.json` at the catalog root, or the file given with `--config`
//! 3. `SYLLABUS_*` environment variables and command-line flags
//!
//! ```json
//! { "concepts_dir": "docs/concepts", "max_topic_id": 60, "mode": "deny-warnings" }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use syllabus_check::{CheckMode, CheckOptions};
use syllabus_loader::LoaderOptions;
use tracing::debug;

/// Looked up at each catalog root when no `--config` is given.
pub const CONFIG_FILE: &str = "syllabus.json";

/// Everything one pipeline run needs to know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyllabusConfig {
    #[serde(flatten)]
    pub loader: LoaderOptions,

    #[serde(flatten)]
    pub check: CheckOptions,

    /// What makes a run fail
    pub mode: CheckMode,
}

/// Values from the environment or the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub concepts_dir: Option<String>,
    pub max_topic_id: Option<u16>,
    pub mode: Option<CheckMode>,
    pub skip_navigation: bool,
}

impl SyllabusConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Config for `root`: the explicit file if given, else `root/syllabus.json`
    /// if present, else defaults.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE);
                if !candidate.is_file() {
                    debug!(root = %root.display(), "No config file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };
        debug!(path = %path.display(), "Reading config");
        Self::from_file(&path)
    }

    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, ConfigError> {
        if let Some(dir) = &overrides.concepts_dir {
            self.loader.concepts_dir = dir.clone();
        }
        if let Some(max) = overrides.max_topic_id {
            self.check.max_topic_id = max;
        }
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if overrides.skip_navigation {
            self.check.check_navigation = false;
        }
        if self.check.max_topic_id == 0 {
            return Err(ConfigError::ZeroMaxTopicId);
        }
        Ok(self)
    }
}

//! Topic folder names: `NN-slug`.

use regex::Regex;
use syllabus_model::{TopicId, TopicRef};

/// Pattern every topic folder name must match.
pub const FOLDER_PATTERN: &str = r"^(\d{2})-([a-z0-9-]+)$";

/// Compiled folder-name matcher.
#[derive(Debug, Clone)]
pub struct FolderNames {
    pattern: Regex,
}

impl FolderNames {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self { pattern: Regex::new(FOLDER_PATTERN)? })
    }

    /// Split `13-middleware` into id 13 and slug `middleware`.
    ///
    /// Returns `None` for anything that doesn't match exactly, including
    /// single-digit prefixes (`7-image`) and uppercase slugs.
    pub fn parse(&self, name: &str) -> Option<TopicRef> {
        let caps = self.pattern.captures(name)?;
        let id: u16 = caps.get(1)?.as_str().parse().ok()?;
        let slug = caps.get(2)?.as_str();
        Some(TopicRef::new(TopicId(id), slug))
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

//! Typed identifiers and cross-references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric key of a topic. Also the default ordering of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(pub u16);

impl TopicId {
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl From<u16> for TopicId {
    fn from(id: u16) -> Self {
        TopicId(id)
    }
}

/// A non-owning link to a topic, as written in a document.
///
/// `slug` is what the link said; it may disagree with the slug of the topic
/// that actually holds `id`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TopicRef {
    pub id: TopicId,
    pub slug: String,
}

impl TopicRef {
    pub fn new(id: impl Into<TopicId>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
        }
    }

    /// Folder name this reference points at, e.g. `13-middleware`.
    pub fn folder_name(&self) -> String {
        format!("{}-{}", self.id, self.slug)
    }
}

impl fmt::Display for TopicRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.folder_name())
    }
}

/// A non-owning link to a guide document under some topic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GuideRef {
    pub topic: TopicId,
    pub guide: String,
}

impl GuideRef {
    pub fn new(topic: impl Into<TopicId>, guide: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            guide: guide.into(),
        }
    }
}

impl fmt::Display for GuideRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.topic, self.guide)
    }
}

/// Previous/next links written by hand in a README.
///
/// Kept only so they can be compared against the derived navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<TopicRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<TopicRef>,
}

impl NavLinks {
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

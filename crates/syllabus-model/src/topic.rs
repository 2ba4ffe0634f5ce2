//! Topic node model.

use crate::classification::Classification;
use crate::refs::{GuideRef, NavLinks, TopicId, TopicRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One numbered concept folder and its classification metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicNode {
    /// Numeric key, unique across the catalog
    pub id: TopicId,

    /// Folder-name slug without the numeric prefix
    pub slug: String,

    /// Display title
    pub title: String,

    /// Category, priority, difficulty and status
    #[serde(default)]
    pub classification: Classification,

    /// Topics this one links to (non-owning)
    #[serde(default)]
    pub related_topics: BTreeSet<TopicRef>,

    /// Guides linked from the README (non-owning)
    #[serde(default)]
    pub related_guides: BTreeSet<GuideRef>,

    /// Short overview paragraph
    #[serde(default)]
    pub overview: String,

    /// Previous/next links as written in the README
    #[serde(default, skip_serializing_if = "NavLinks::is_empty")]
    pub authored_nav: NavLinks,

    /// Path of the README this node was read from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl TopicNode {
    /// Create a topic with default classification and no references.
    pub fn new(id: impl Into<TopicId>, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            classification: Classification::default(),
            related_topics: BTreeSet::new(),
            related_guides: BTreeSet::new(),
            overview: String::new(),
            authored_nav: NavLinks::default(),
            source: None,
        }
    }

    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    pub fn with_related(mut self, target: TopicRef) -> Self {
        self.related_topics.insert(target);
        self
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    /// Reference pointing at this topic.
    pub fn to_ref(&self) -> TopicRef {
        TopicRef::new(self.id, self.slug.clone())
    }

    /// Folder name, e.g. `13-middleware`.
    pub fn folder_name(&self) -> String {
        format!("{}-{}", self.id, self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::{Category, Priority};

    #[test]
    fn builder_sets_fields() {
        let node = TopicNode::new(13, "middleware", "Middleware")
            .with_classification(Classification::new(Category::Intermediate, Priority::Medium))
            .with_related(TopicRef::new(1, "routing"))
            .with_overview("Runs before a request completes.");

        assert_eq!(node.folder_name(), "13-middleware");
        assert_eq!(node.related_topics.len(), 1);
        assert_eq!(node.to_ref(), TopicRef::new(13, "middleware"));
    }

    #[test]
    fn minimal_json_uses_defaults() {
        let node: TopicNode =
            serde_json::from_str(r#"{"id":2,"slug":"rendering","title":"Rendering"}"#).unwrap();
        assert_eq!(node.classification, Classification::default());
        assert!(node.authored_nav.is_empty());
        assert!(node.source.is_none());
    }
}

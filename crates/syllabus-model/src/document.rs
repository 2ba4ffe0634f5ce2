//! Guide documents and example bundles owned by a topic.

use crate::refs::{GuideRef, TopicId, TopicRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A deep-dive document under a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideDocument {
    /// Owning topic
    pub topic_id: TopicId,

    /// File stem, unique within the owning topic
    pub slug: String,

    pub title: String,

    #[serde(default)]
    pub body: String,

    /// Topics linked from this guide
    #[serde(default)]
    pub related_topics: BTreeSet<TopicRef>,

    /// Guides linked from this guide
    #[serde(default)]
    pub related_guides: BTreeSet<GuideRef>,
}

impl GuideDocument {
    pub fn new(topic_id: impl Into<TopicId>, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            topic_id: topic_id.into(),
            slug: slug.into(),
            title: title.into(),
            body: String::new(),
            related_topics: BTreeSet::new(),
            related_guides: BTreeSet::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_guide_ref(mut self, target: GuideRef) -> Self {
        self.related_guides.insert(target);
        self
    }

    pub fn with_topic_ref(mut self, target: TopicRef) -> Self {
        self.related_topics.insert(target);
        self
    }

    /// Reference pointing at this guide.
    pub fn to_ref(&self) -> GuideRef {
        GuideRef::new(self.topic_id, self.slug.clone())
    }
}

/// An illustrative snippet under a topic's `examples/` folder.
///
/// `body` is opaque: it is never parsed, compiled or checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleBundle {
    /// Owning topic
    pub topic_id: TopicId,

    pub filename: String,

    #[serde(default)]
    pub description: String,

    /// Display-only language tag (`tsx`, `js`, `md`, ...)
    #[serde(default)]
    pub language: String,

    #[serde(default)]
    pub body: String,
}

impl ExampleBundle {
    pub fn new(topic_id: impl Into<TopicId>, filename: impl Into<String>) -> Self {
        Self {
            topic_id: topic_id.into(),
            filename: filename.into(),
            description: String::new(),
            language: String::new(),
            body: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_body(mut self, language: impl Into<String>, body: impl Into<String>) -> Self {
        self.language = language.into();
        self.body = body.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guide_ref_points_back() {
        let guide = GuideDocument::new(4, "streaming", "Streaming");
        assert_eq!(guide.to_ref(), GuideRef::new(4, "streaming"));
    }

    #[test]
    fn example_body_is_kept_verbatim() {
        let body = "export default function Page() {\n  return <h1>unclosed\n}";
        let ex = ExampleBundle::new(1, "page.md").with_body("tsx", body);
        assert_eq!(ex.body, body);
        assert_eq!(ex.language, "tsx");
    }
}

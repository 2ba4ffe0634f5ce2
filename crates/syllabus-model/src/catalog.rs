//! The in-memory catalog.

use crate::document::{ExampleBundle, GuideDocument};
use crate::refs::TopicId;
use crate::topic::TopicNode;
use serde::{Deserialize, Serialize};

/// A snapshot of a documentation catalog.
///
/// Guides and examples are stored flat and owned by `topic_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub topics: Vec<TopicNode>,

    #[serde(default)]
    pub guides: Vec<GuideDocument>,

    #[serde(default)]
    pub examples: Vec<ExampleBundle>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topic(mut self, topic: TopicNode) -> Self {
        self.topics.push(topic);
        self
    }

    pub fn with_guide(mut self, guide: GuideDocument) -> Self {
        self.guides.push(guide);
        self
    }

    pub fn with_example(mut self, example: ExampleBundle) -> Self {
        self.examples.push(example);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// First topic carrying `id`.
    pub fn topic(&self, id: TopicId) -> Option<&TopicNode> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub fn contains_topic(&self, id: TopicId) -> bool {
        self.topic(id).is_some()
    }

    /// Topic ids in catalog order (may contain duplicates in unchecked catalogs).
    pub fn topic_ids(&self) -> impl Iterator<Item = TopicId> + '_ {
        self.topics.iter().map(|t| t.id)
    }

    pub fn guide(&self, topic: TopicId, slug: &str) -> Option<&GuideDocument> {
        self.guides.iter().find(|g| g.topic_id == topic && g.slug == slug)
    }

    pub fn guides_of(&self, topic: TopicId) -> impl Iterator<Item = &GuideDocument> + '_ {
        self.guides.iter().filter(move |g| g.topic_id == topic)
    }

    pub fn examples_of(&self, topic: TopicId) -> impl Iterator<Item = &ExampleBundle> + '_ {
        self.examples.iter().filter(move |e| e.topic_id == topic)
    }

    /// Put topics, guides and examples into canonical order.
    ///
    /// Sorting is stable, so entries sharing a key keep their relative order.
    pub fn sort(&mut self) {
        self.topics.sort_by_key(|t| t.id);
        self.guides
            .sort_by(|a, b| (a.topic_id, &a.slug).cmp(&(b.topic_id, &b.slug)));
        self.examples
            .sort_by(|a, b| (a.topic_id, &a.filename).cmp(&(b.topic_id, &b.filename)));
    }

    /// blake3 digest of the catalog's JSON form, hex encoded.
    ///
    /// Two snapshots with equal fingerprints hold identical content in the
    /// same order.
    pub fn fingerprint(&self) -> serde_json::Result<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(hex::encode(blake3::hash(&bytes).as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refs::TopicRef;

    fn sample() -> Catalog {
        Catalog::new()
            .with_topic(TopicNode::new(2, "rendering", "Rendering"))
            .with_topic(TopicNode::new(1, "routing", "Routing").with_related(TopicRef::new(2, "rendering")))
            .with_guide(GuideDocument::new(2, "streaming", "Streaming"))
            .with_guide(GuideDocument::new(1, "dynamic-routes", "Dynamic Routes"))
            .with_example(ExampleBundle::new(1, "page.md"))
    }

    #[test]
    fn lookups() {
        let catalog = sample();
        assert_eq!(catalog.topic(TopicId(1)).map(|t| t.slug.as_str()), Some("routing"));
        assert!(catalog.topic(TopicId(3)).is_none());
        assert_eq!(catalog.guides_of(TopicId(2)).count(), 1);
        assert_eq!(catalog.examples_of(TopicId(1)).count(), 1);
        assert!(catalog.guide(TopicId(1), "dynamic-routes").is_some());
    }

    #[test]
    fn sort_is_canonical() {
        let mut catalog = sample();
        catalog.sort();
        let ids: Vec<_> = catalog.topic_ids().collect();
        assert_eq!(ids, vec![TopicId(1), TopicId(2)]);
        assert_eq!(catalog.guides[0].slug, "dynamic-routes");
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = sample();
        let mut b = sample();
        assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
        assert_eq!(a.fingerprint().unwrap().len(), 64);

        b.topics[0].title = "Rendering (revised)".into();
        assert_ne!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    }

    #[test]
    fn json_round_trip() {
        let catalog = sample();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}

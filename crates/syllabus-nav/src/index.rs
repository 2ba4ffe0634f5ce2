//! The navigation index: canonical order of topics.

use serde::{Deserialize, Serialize};
use syllabus_model::{Catalog, IssueKind, Subject, TopicId, ValidationIssue};
use tracing::debug;

/// Derived neighbours of one topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbours {
    pub previous: Option<TopicId>,
    pub next: Option<TopicId>,
}

/// Strictly increasing sequence of topic ids.
///
/// Ideally contiguous from 1; gaps are tolerated and reported at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationIndex {
    order: Vec<TopicId>,
}

impl NavigationIndex {
    /// Sort and dedupe arbitrary ids.
    pub fn from_ids(ids: impl IntoIterator<Item = TopicId>) -> Self {
        let mut order: Vec<TopicId> = ids.into_iter().collect();
        order.sort_unstable();
        order.dedup();
        Self { order }
    }

    /// Build the index for a catalog.
    ///
    /// Returns a `NonContiguous` warning when the ids are not exactly `1..=N`.
    pub fn build(catalog: &Catalog) -> (Self, Vec<ValidationIssue>) {
        let index = Self::from_ids(catalog.topic_ids());
        let mut issues = Vec::new();

        let missing = index.gaps();
        if !missing.is_empty() {
            let listed: Vec<String> = missing.iter().map(ToString::to_string).collect();
            issues.push(ValidationIssue::warning(
                IssueKind::NonContiguous,
                Subject::Catalog,
                format!("topic ids are not contiguous; missing {}", listed.join(", ")),
            ));
        }

        debug!(topics = index.len(), gaps = missing.len(), "Navigation index built");
        (index, issues)
    }

    pub fn ids(&self) -> &[TopicId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn first(&self) -> Option<TopicId> {
        self.order.first().copied()
    }

    pub fn last(&self) -> Option<TopicId> {
        self.order.last().copied()
    }

    pub fn contains(&self, id: TopicId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: TopicId) -> Option<usize> {
        self.order.binary_search(&id).ok()
    }

    /// Topic before `id`, `None` for the first topic or an unknown id.
    pub fn previous(&self, id: TopicId) -> Option<TopicId> {
        let at = self.position(id)?;
        at.checked_sub(1).map(|i| self.order[i])
    }

    /// Topic after `id`, `None` for the last topic or an unknown id.
    pub fn next(&self, id: TopicId) -> Option<TopicId> {
        let at = self.position(id)?;
        self.order.get(at + 1).copied()
    }

    pub fn neighbours(&self, id: TopicId) -> Option<Neighbours> {
        self.position(id)?;
        Some(Neighbours {
            previous: self.previous(id),
            next: self.next(id),
        })
    }

    /// Ids missing from `1..=last`.
    pub fn gaps(&self) -> Vec<TopicId> {
        let Some(last) = self.last() else {
            return Vec::new();
        };
        (1..=last.0)
            .map(TopicId)
            .filter(|id| !self.contains(*id))
            .collect()
    }

    pub fn is_contiguous(&self) -> bool {
        self.gaps().is_empty()
    }

    /// Adjacent `(earlier, later)` pairs in order.
    pub fn pairs(&self) -> impl Iterator<Item = (TopicId, TopicId)> + '_ {
        self.order.windows(2).map(|w| (w[0], w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use syllabus_model::TopicNode;

    fn catalog(ids: &[u16]) -> Catalog {
        ids.iter()
            .fold(Catalog::new(), |c, &id| c.with_topic(TopicNode::new(id, format!("t{}", id), "T")))
    }

    #[test]
    fn routing_rendering_middleware() {
        let (index, issues) = NavigationIndex::build(&catalog(&[13, 1, 2]));
        assert_eq!(index.ids(), &[TopicId(1), TopicId(2), TopicId(13)]);
        assert_eq!(index.next(TopicId(1)), Some(TopicId(2)));
        assert_eq!(index.next(TopicId(2)), Some(TopicId(13)));
        assert_eq!(index.next(TopicId(13)), None);
        assert_eq!(index.previous(TopicId(1)), None);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::NonContiguous);
        assert!(issues[0].message.contains("03"));
        assert!(issues[0].message.contains("12"));
    }

    #[test]
    fn contiguous_has_no_issues() {
        let (index, issues) = NavigationIndex::build(&catalog(&[3, 1, 2]));
        assert!(issues.is_empty());
        assert!(index.is_contiguous());
    }

    #[test]
    fn not_starting_at_one_is_a_gap() {
        let (index, issues) = NavigationIndex::build(&catalog(&[2, 3]));
        assert_eq!(index.gaps(), vec![TopicId(1)]);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn unknown_ids_have_no_neighbours() {
        let index = NavigationIndex::from_ids([TopicId(1), TopicId(2)]);
        assert_eq!(index.neighbours(TopicId(9)), None);
        assert_eq!(index.next(TopicId(9)), None);
        assert_eq!(
            index.neighbours(TopicId(1)),
            Some(Neighbours { previous: None, next: Some(TopicId(2)) })
        );
    }

    #[test]
    fn empty_catalog() {
        let (index, issues) = NavigationIndex::build(&Catalog::new());
        assert!(index.is_empty());
        assert!(issues.is_empty());
        assert_eq!(index.first(), None);
    }

    proptest! {
        #[test]
        fn previous_and_next_are_inverse(ids in proptest::collection::vec(1u16..100, 0..40)) {
            let index = NavigationIndex::from_ids(ids.into_iter().map(TopicId));
            for (a, b) in index.pairs() {
                prop_assert_eq!(index.next(a), Some(b));
                prop_assert_eq!(index.previous(b), Some(a));
            }
            if let (Some(first), Some(last)) = (index.first(), index.last()) {
                prop_assert_eq!(index.previous(first), None);
                prop_assert_eq!(index.next(last), None);
            }
        }

        #[test]
        fn order_is_strictly_increasing(ids in proptest::collection::vec(0u16..100, 0..60)) {
            let index = NavigationIndex::from_ids(ids.into_iter().map(TopicId));
            prop_assert!(index.ids().windows(2).all(|w| w[0] < w[1]));
        }
    }
}

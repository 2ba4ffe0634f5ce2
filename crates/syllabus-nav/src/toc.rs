//! Table of contents grouped by category and priority.

use serde::{Deserialize, Serialize};
use syllabus_model::{Catalog, Category, Difficulty, Priority, Status, TopicId, TopicNode};

/// One line of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub id: TopicId,
    pub slug: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub status: Status,
}

impl From<&TopicNode> for TocEntry {
    fn from(topic: &TopicNode) -> Self {
        Self {
            id: topic.id,
            slug: topic.slug.clone(),
            title: topic.title.clone(),
            difficulty: topic.classification.difficulty,
            status: topic.classification.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityGroup {
    pub priority: Priority,
    pub entries: Vec<TocEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub priorities: Vec<PriorityGroup>,
}

impl CategoryGroup {
    pub fn entries(&self) -> impl Iterator<Item = &TocEntry> {
        self.priorities.iter().flat_map(|p| p.entries.iter())
    }
}

/// Topics grouped by category, then priority. Empty groups are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOfContents {
    pub groups: Vec<CategoryGroup>,
}

impl TableOfContents {
    /// Group a catalog's topics.
    ///
    /// Groups follow [`Category`] then [`Priority`] declaration order; within
    /// a group topics are ordered by id. Building twice gives identical output.
    pub fn build(catalog: &Catalog) -> Self {
        let mut topics: Vec<&TopicNode> = catalog.topics.iter().collect();
        topics.sort_by_key(|t| (t.classification.category, t.classification.priority, t.id));

        let mut groups: Vec<CategoryGroup> = Vec::new();
        for topic in topics {
            let category = topic.classification.category;
            let priority = topic.classification.priority;

            if groups.last().map(|g| g.category) != Some(category) {
                groups.push(CategoryGroup { category, priorities: Vec::new() });
            }
            let Some(group) = groups.last_mut() else {
                continue;
            };

            if group.priorities.last().map(|p| p.priority) != Some(priority) {
                group.priorities.push(PriorityGroup { priority, entries: Vec::new() });
            }
            if let Some(bucket) = group.priorities.last_mut() {
                bucket.entries.push(TocEntry::from(topic));
            }
        }

        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of entries across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries().count()).sum()
    }

    /// Ids in display order.
    pub fn topic_ids(&self) -> Vec<TopicId> {
        self.groups.iter().flat_map(|g| g.entries().map(|e| e.id)).collect()
    }

    /// Ids under one category, in display order.
    pub fn category_ids(&self, category: Category) -> Vec<TopicId> {
        self.groups
            .iter()
            .filter(|g| g.category == category)
            .flat_map(|g| g.entries().map(|e| e.id))
            .collect()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.groups.iter().map(|g| g.category).collect()
    }
}

//! Markdown pages: the table of contents and per-topic navigation footers.

use std::fmt::Write;
use syllabus_model::{Catalog, Status, TopicId, README};
use syllabus_nav::{NavigationIndex, TableOfContents};

pub fn status_marker(status: Status) -> &'static str {
    match status {
        Status::NotStarted => "⬜",
        Status::InProgress => "🚧",
        Status::Done => "✅",
    }
}

/// The concepts index page.
///
/// One `##` section per category, entries tagged with their priority and
/// linked to `NN-slug/README.md` relative to the concepts directory.
pub fn render_toc(catalog: &Catalog, toc: &TableOfContents) -> String {
    let mut out = String::from("# Concepts\n");

    for group in &toc.groups {
        let _ = write!(out, "\n## {}\n\n", group.category);
        for bucket in &group.priorities {
            for entry in &bucket.entries {
                let _ = writeln!(
                    out,
                    "- [{}] [{}. {}]({}-{}/{}) · {} · {} {}",
                    bucket.priority,
                    entry.id,
                    entry.title,
                    entry.id,
                    entry.slug,
                    README,
                    entry.difficulty,
                    status_marker(entry.status),
                    entry.status,
                );
            }
        }
    }

    let done = catalog
        .topics
        .iter()
        .filter(|t| t.classification.status == Status::Done)
        .count();
    let _ = write!(
        out,
        "\n---\n\n{} topics, {} guides, {} examples. {} of {} topics done.\n",
        catalog.topics.len(),
        catalog.guides.len(),
        catalog.examples.len(),
        done,
        catalog.topics.len(),
    );
    out
}

/// Link to another topic's README from inside a topic folder.
fn topic_link(catalog: &Catalog, id: TopicId) -> String {
    match catalog.topic(id) {
        Some(topic) => format!("[{}](../{}/{})", topic.title, topic.folder_name(), README),
        None => id.to_string(),
    }
}

/// The Previous/Next footer for one topic, derived from `index`.
///
/// `None` when `id` is not in the index or has no neighbours at all.
pub fn render_nav_footer(catalog: &Catalog, index: &NavigationIndex, id: TopicId) -> Option<String> {
    let links = index.neighbours(id)?;
    let previous = links
        .previous
        .map(|p| format!("← Previous: {}", topic_link(catalog, p)));
    let next = links.next.map(|n| format!("Next: {} →", topic_link(catalog, n)));

    match (previous, next) {
        (Some(p), Some(n)) => Some(format!("{} | {}", p, n)),
        (Some(p), None) => Some(p),
        (None, Some(n)) => Some(n),
        (None, None) => None,
    }
}

/// Reading order, one topic per line.
pub fn render_order(catalog: &Catalog, index: &NavigationIndex) -> String {
    let mut out = String::new();
    for (position, id) in index.ids().iter().enumerate() {
        let title = catalog.topic(*id).map(|t| t.title.as_str()).unwrap_or("");
        let _ = writeln!(out, "{:>3}. {} {}", position + 1, id, title);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllabus_model::{Category, Classification, Difficulty, Priority, TopicNode};

    fn catalog() -> Catalog {
        Catalog::new()
            .with_topic(
                TopicNode::new(1, "routing", "Routing").with_classification(
                    Classification::new(Category::Core, Priority::High)
                        .with_difficulty(Difficulty::Beginner)
                        .with_status(Status::Done),
                ),
            )
            .with_topic(
                TopicNode::new(2, "rendering", "Rendering")
                    .with_classification(Classification::new(Category::Core, Priority::High)),
            )
            .with_topic(
                TopicNode::new(13, "middleware", "Middleware")
                    .with_classification(Classification::new(Category::Intermediate, Priority::Medium)),
            )
    }

    fn index(catalog: &Catalog) -> NavigationIndex {
        NavigationIndex::build(catalog).0
    }

    #[test]
    fn toc_page() {
        let catalog = catalog();
        let page = render_toc(&catalog, &TableOfContents::build(&catalog));

        assert!(page.starts_with("# Concepts\n"));
        assert!(page.contains("\n## Core\n"));
        assert!(page.contains("\n## Intermediate\n"));
        assert!(!page.contains("## Advanced"));
        assert!(page.contains("- [High] [01. Routing](01-routing/README.md) · Beginner · ✅ Done\n"));
        assert!(page.contains("- [Medium] [13. Middleware](13-middleware/README.md)"));
        assert!(page.contains("1 of 3 topics done"));

        let routing = page.find("01. Routing").unwrap();
        let rendering = page.find("02. Rendering").unwrap();
        let middleware = page.find("13. Middleware").unwrap();
        assert!(routing < rendering && rendering < middleware);
    }

    #[test]
    fn footer_in_the_middle() {
        let catalog = catalog();
        let footer = render_nav_footer(&catalog, &index(&catalog), TopicId(2)).unwrap();
        assert_eq!(
            footer,
            "← Previous: [Routing](../01-routing/README.md) | Next: [Middleware](../13-middleware/README.md) →"
        );
    }

    #[test]
    fn footer_at_the_ends() {
        let catalog = catalog();
        let index = index(&catalog);
        assert_eq!(
            render_nav_footer(&catalog, &index, TopicId(1)).unwrap(),
            "Next: [Rendering](../02-rendering/README.md) →"
        );
        assert_eq!(
            render_nav_footer(&catalog, &index, TopicId(13)).unwrap(),
            "← Previous: [Rendering](../02-rendering/README.md)"
        );
        assert_eq!(render_nav_footer(&catalog, &index, TopicId(7)), None);
    }

    #[test]
    fn lone_topic_has_no_footer() {
        let catalog = Catalog::new().with_topic(TopicNode::new(1, "routing", "Routing"));
        assert_eq!(render_nav_footer(&catalog, &index(&catalog), TopicId(1)), None);
    }

    #[test]
    fn order_listing() {
        let catalog = catalog();
        let listing = render_order(&catalog, &index(&catalog));
        assert_eq!(listing, "  1. 01 Routing\n  2. 02 Rendering\n  3. 13 Middleware\n");
    }
}

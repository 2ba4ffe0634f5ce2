//! Hand-authored Previous/Next links versus the derived order.
//!
//! READMEs often carry their own navigation footer. Those links drift when
//! topics are added or renumbered, so the index is always the authority and
//! any written link that disagrees with it is reported.

use crate::index::NavigationIndex;
use syllabus_model::{Catalog, IssueKind, Subject, TopicId, TopicRef, ValidationIssue};

/// One `NavigationMismatch` warning per written link that disagrees with `index`.
///
/// Sides a README leaves out are not reported.
pub fn check_authored_links(catalog: &Catalog, index: &NavigationIndex) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for topic in &catalog.topics {
        let nav = &topic.authored_nav;
        if let Some(written) = &nav.previous {
            compare(catalog, topic.id, "Previous", written, index.previous(topic.id), &mut issues);
        }
        if let Some(written) = &nav.next {
            compare(catalog, topic.id, "Next", written, index.next(topic.id), &mut issues);
        }
    }
    issues
}

fn compare(
    catalog: &Catalog,
    owner: TopicId,
    side: &str,
    written: &TopicRef,
    derived: Option<TopicId>,
    issues: &mut Vec<ValidationIssue>,
) {
    let message = match derived {
        None => format!("{} link points to {}, but there is no {} topic", side, written, side.to_lowercase()),
        Some(id) if id != written.id => {
            format!("{} link points to {}, but the {} topic is {}", side, written, side.to_lowercase(), describe(catalog, id))
        }
        Some(id) => match catalog.topic(id) {
            Some(actual) if actual.slug != written.slug => {
                format!("{} link points to {}, but topic {} is {}", side, written, id, actual.folder_name())
            }
            _ => return,
        },
    };
    issues.push(ValidationIssue::warning(IssueKind::NavigationMismatch, Subject::topic(owner), message));
}

fn describe(catalog: &Catalog, id: TopicId) -> String {
    catalog
        .topic(id)
        .map(|t| t.folder_name())
        .unwrap_or_else(|| id.to_string())
}

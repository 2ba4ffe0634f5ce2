//! Status regression lint.
//!
//! Authoring status only moves forward. Comparing a saved catalog with the
//! current one flags topics that went backwards, e.g. `Done` to `In Progress`.

use syllabus_model::{Catalog, IssueKind, Subject, ValidationIssue};
use tracing::debug;

/// One `StatusRegression` warning per topic whose status moved backwards.
///
/// Topics are matched by id. Topics new in `current` or gone from it are
/// ignored.
pub fn check_status_transitions(baseline: &Catalog, current: &Catalog) -> Vec<ValidationIssue> {
    let issues: Vec<ValidationIssue> = current
        .topics
        .iter()
        .filter_map(|topic| {
            let before = baseline.topic(topic.id)?.classification.status;
            let now = topic.classification.status;
            (now < before).then(|| {
                ValidationIssue::warning(
                    IssueKind::StatusRegression,
                    Subject::topic(topic.id),
                    format!("status went from {} back to {}", before, now),
                )
            })
        })
        .collect();

    debug!(regressions = issues.len(), "Status transitions checked");
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllabus_model::{Category, Classification, IssueClass, Priority, Status, TopicNode};

    fn catalog(statuses: &[(u16, Status)]) -> Catalog {
        statuses.iter().fold(Catalog::new(), |c, (id, status)| {
            c.with_topic(
                TopicNode::new(*id, format!("topic-{}", id), "Topic").with_classification(
                    Classification::new(Category::Core, Priority::High).with_status(*status),
                ),
            )
        })
    }

    #[test]
    fn forward_moves_are_fine() {
        let before = catalog(&[(1, Status::NotStarted), (2, Status::InProgress), (3, Status::Done)]);
        let after = catalog(&[(1, Status::InProgress), (2, Status::Done), (3, Status::Done)]);
        assert!(check_status_transitions(&before, &after).is_empty());
    }

    #[test]
    fn backward_moves_are_flagged() {
        let before = catalog(&[(1, Status::Done), (2, Status::InProgress)]);
        let after = catalog(&[(1, Status::InProgress), (2, Status::NotStarted)]);
        let issues = check_status_transitions(&before, &after);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| !i.is_error() && i.class() == IssueClass::Lint));
        assert_eq!(issues[0].message, "status went from Done back to In Progress");
    }

    #[test]
    fn added_and_removed_topics_are_ignored() {
        let before = catalog(&[(1, Status::Done), (5, Status::Done)]);
        let after = catalog(&[(1, Status::Done), (2, Status::NotStarted)]);
        assert!(check_status_transitions(&before, &after).is_empty());
    }
}

//! Collected issues from one pipeline run.

use crate::options::CheckMode;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use syllabus_model::{IssueClass, IssueKind, Severity, ValidationIssue};

/// Every issue found, in the order found until [`Report::sort`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub issues: Vec<ValidationIssue>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn merge(&mut self, other: Report) {
        self.issues.extend(other.issues);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn of_kind(&self, kind: IssueKind) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.kind == kind)
    }

    pub fn of_class(&self, class: IssueClass) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.class() == class)
    }

    /// Errors first, then by subject, kind and message. Duplicates are removed.
    pub fn sort(&mut self) {
        self.issues.sort_by(|a, b| {
            (Reverse(a.severity), &a.subject, a.kind, &a.message)
                .cmp(&(Reverse(b.severity), &b.subject, b.kind, &b.message))
        });
        self.issues.dedup();
    }

    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }

    /// Whether this report fails a run under `mode`.
    pub fn is_failure(&self, mode: CheckMode) -> bool {
        match mode {
            CheckMode::Advisory => false,
            CheckMode::Strict => self.has_errors(),
            CheckMode::DenyWarnings => !self.is_empty(),
        }
    }
}

impl From<Vec<ValidationIssue>> for Report {
    fn from(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }
}

impl Extend<ValidationIssue> for Report {
    fn extend<I: IntoIterator<Item = ValidationIssue>>(&mut self, iter: I) {
        self.issues.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllabus_model::Subject;

    fn report() -> Report {
        Report::from(vec![
            ValidationIssue::warning(IssueKind::DanglingTopicRef, Subject::topic(2), "b"),
            ValidationIssue::error(IssueKind::OrphanedExample, Subject::topic(99), "a"),
            ValidationIssue::warning(IssueKind::NonContiguous, Subject::Catalog, "c"),
        ])
    }

    #[test]
    fn counts() {
        let r = report();
        assert_eq!(r.error_count(), 1);
        assert_eq!(r.warning_count(), 2);
        assert_eq!(r.of_class(IssueClass::Structural).count(), 1);
    }

    #[test]
    fn sort_puts_errors_first() {
        let mut r = report();
        r.push(r.issues[0].clone());
        r.sort();
        assert_eq!(r.len(), 3);
        assert_eq!(r.issues[0].severity, Severity::Error);
        assert_eq!(r.issues[1].subject, Subject::Catalog);
    }

    #[test]
    fn failure_depends_on_mode() {
        let r = report();
        assert!(!r.is_failure(CheckMode::Advisory));
        assert!(r.is_failure(CheckMode::Strict));

        let warnings_only: Report = r.warnings().cloned().collect::<Vec<_>>().into();
        assert!(!warnings_only.is_failure(CheckMode::Strict));
        assert!(warnings_only.is_failure(CheckMode::DenyWarnings));
        assert!(!Report::new().is_failure(CheckMode::DenyWarnings));
    }
}

//! Validation issues shared by the loader, navigator and checker.

use crate::refs::{GuideRef, TopicId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How bad an issue is. Callers decide whether errors fail a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// Broad family of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueClass {
    /// Breaks the tree: bad folder name, duplicate id, orphaned child
    Structural,
    /// A dangling or inconsistent optional cross-reference
    Referential,
    /// Header convention not recognized; defaults applied
    Metadata,
    /// Ordering gaps and hand-authored links that disagree with the index
    Navigation,
    /// Convention checks such as backward status moves
    Lint,
}

/// The specific condition an issue describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MalformedFolderName,
    MissingReadme,
    UnreadableEntry,
    DuplicateId,
    DuplicateSlug,
    DuplicateGuide,
    DuplicateExample,
    TopicIdOutOfRange,
    OrphanedGuide,
    OrphanedExample,
    NonContiguous,
    DanglingTopicRef,
    DanglingGuideRef,
    SlugMismatch,
    SelfReference,
    MetadataParse,
    MissingTitle,
    NavigationMismatch,
    StatusRegression,
}

impl IssueKind {
    pub fn class(self) -> IssueClass {
        use IssueKind::*;
        match self {
            MalformedFolderName | MissingReadme | UnreadableEntry | DuplicateId | DuplicateSlug
            | DuplicateGuide | DuplicateExample | TopicIdOutOfRange | OrphanedGuide
            | OrphanedExample => IssueClass::Structural,
            DanglingTopicRef | DanglingGuideRef | SlugMismatch | SelfReference => {
                IssueClass::Referential
            }
            MetadataParse | MissingTitle => IssueClass::Metadata,
            NonContiguous | NavigationMismatch => IssueClass::Navigation,
            StatusRegression => IssueClass::Lint,
        }
    }

    /// Stable kebab-case code used in rendered output.
    pub fn code(self) -> &'static str {
        use IssueKind::*;
        match self {
            MalformedFolderName => "malformed-folder-name",
            MissingReadme => "missing-readme",
            UnreadableEntry => "unreadable-entry",
            DuplicateId => "duplicate-id",
            DuplicateSlug => "duplicate-slug",
            DuplicateGuide => "duplicate-guide",
            DuplicateExample => "duplicate-example",
            TopicIdOutOfRange => "topic-id-out-of-range",
            OrphanedGuide => "orphaned-guide",
            OrphanedExample => "orphaned-example",
            NonContiguous => "non-contiguous",
            DanglingTopicRef => "dangling-topic-ref",
            DanglingGuideRef => "dangling-guide-ref",
            SlugMismatch => "slug-mismatch",
            SelfReference => "self-reference",
            MetadataParse => "metadata-parse",
            MissingTitle => "missing-title",
            NavigationMismatch => "navigation-mismatch",
            StatusRegression => "status-regression",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What an issue is about.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Subject {
    /// The catalog as a whole
    Catalog,
    /// A topic node
    Topic { id: TopicId },
    /// A guide under a topic
    Guide { guide: GuideRef },
    /// An example bundle under a topic
    Example { topic: TopicId, filename: String },
    /// A path that never became a catalog entity
    Path { path: String },
}

impl Subject {
    pub fn topic(id: impl Into<TopicId>) -> Self {
        Subject::Topic { id: id.into() }
    }

    pub fn path(path: impl Into<String>) -> Self {
        Subject::Path { path: path.into() }
    }

    /// The topic this subject belongs to, if any.
    pub fn topic_id(&self) -> Option<TopicId> {
        match self {
            Subject::Topic { id } => Some(*id),
            Subject::Guide { guide } => Some(guide.topic),
            Subject::Example { topic, .. } => Some(*topic),
            Subject::Catalog | Subject::Path { .. } => None,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Catalog => f.write_str("catalog"),
            Subject::Topic { id } => write!(f, "topic {}", id),
            Subject::Guide { guide } => write!(f, "guide {}", guide),
            Subject::Example { topic, filename } => write!(f, "example {}/{}", topic, filename),
            Subject::Path { path } => write!(f, "{}", path),
        }
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub kind: IssueKind,
    pub subject: Subject,
    pub message: String,
}

impl ValidationIssue {
    pub fn error(kind: IssueKind, subject: Subject, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            subject,
            message: message.into(),
        }
    }

    pub fn warning(kind: IssueKind, subject: Subject, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            subject,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn class(&self) -> IssueClass {
        self.kind.class()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] {}: {}", self.severity, self.kind, self.subject, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_failures_are_structural() {
        assert_eq!(IssueKind::OrphanedExample.class(), IssueClass::Structural);
        assert_eq!(IssueKind::DuplicateId.class(), IssueClass::Structural);
        assert_eq!(IssueKind::DanglingTopicRef.class(), IssueClass::Referential);
        assert_eq!(IssueKind::MetadataParse.class(), IssueClass::Metadata);
    }

    #[test]
    fn display_format() {
        let issue = ValidationIssue::error(IssueKind::DuplicateId, Subject::topic(3), "two folders");
        assert_eq!(issue.to_string(), "error[duplicate-id] topic 03: two folders");
    }

    #[test]
    fn subject_topic_id() {
        let ex = Subject::Example { topic: TopicId(99), filename: "a.md".into() };
        assert_eq!(ex.topic_id(), Some(TopicId(99)));
        assert_eq!(Subject::Catalog.topic_id(), None);
    }
}

//! Syllabus Catalog Model
//!
//! A documentation catalog is a strict ownership tree:
//!
//! ```text
//! Catalog ──► TopicNode ──► GuideDocument
//!                      └──► ExampleBundle
//! ```
//!
//! Children point at their owner by [`TopicId`] rather than being nested, so a
//! catalog assembled in code or deserialized from JSON can carry orphans that
//! the checker reports instead of silently dropping.
//!
//! Cross-references ([`TopicRef`], [`GuideRef`]) form a second, non-owning
//! relation set. They may point forwards, backwards, or at each other in cycles.
//!
//! # Issues
//!
//! Nothing in this workspace throws for recoverable conditions. Loader, checker
//! and navigator all return [`ValidationIssue`]s; callers decide whether an
//! [`Severity::Error`] fails the run.

mod catalog;
mod classification;
mod document;
mod issue;
mod refs;
mod topic;

pub use catalog::Catalog;
pub use classification::{Category, Classification, Difficulty, ParseLabelError, Priority, Status};
pub use document::{ExampleBundle, GuideDocument};
pub use issue::{IssueClass, IssueKind, Severity, Subject, ValidationIssue};
pub use refs::{GuideRef, NavLinks, TopicId, TopicRef};
pub use topic::TopicNode;

/// Name of the index document every topic folder must carry.
pub const README: &str = "README.md";

/// Default upper bound for topic ids.
pub const DEFAULT_MAX_TOPIC_ID: u16 = 40;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_classification_matches_header_fallback() {
        let c = Classification::default();
        assert_eq!(c.category, Category::Intermediate);
        assert_eq!(c.priority, Priority::Medium);
        assert_eq!(c.difficulty, Difficulty::Intermediate);
        assert_eq!(c.status, Status::NotStarted);
    }
}

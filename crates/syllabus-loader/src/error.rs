//! Error types for catalog loading.
//!
//! Only conditions that make the whole load meaningless are errors. Everything
//! scoped to one topic, guide or example becomes a
//! [`ValidationIssue`](syllabus_model::ValidationIssue) instead.

use syllabus_model::TopicId;
use thiserror::Error;

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that abort a load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The root (or its concepts directory) could not be listed
    #[error("cannot read catalog root {path}: {source}")]
    RootUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Two folders parse to the same numeric id
    #[error("duplicate topic id {id}: {first} and {second}")]
    DuplicateId {
        id: TopicId,
        first: String,
        second: String,
    },

    /// A built-in pattern failed to compile
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

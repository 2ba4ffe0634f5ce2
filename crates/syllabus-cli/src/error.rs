//! Error types for the command line.

use std::path::PathBuf;
use syllabus_loader::LoadError;
use syllabus_model::TopicId;
use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// A configuration file that could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `max_topic_id` of zero would reject every topic
    #[error("max_topic_id must be at least 1")]
    ZeroMaxTopicId,
}

/// Errors that stop a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{}: {source}", root.display())]
    Load {
        root: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("cannot read baseline {path}: {source}")]
    Baseline {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("topic {0} is not in the catalog")]
    UnknownTopic(TopicId),

    #[error("pipeline task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("interrupted")]
    Interrupted,
}

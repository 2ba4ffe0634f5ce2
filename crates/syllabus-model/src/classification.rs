//! Classification labels carried in a topic's README header.
//!
//! Labels are free text in the source documents ("🔴 High", "In Progress",
//! "core"), so parsing normalizes case, whitespace, punctuation and emoji
//! before matching.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A label that did not match any known value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {field} label: {value:?}")]
pub struct ParseLabelError {
    /// Which header field was being parsed
    pub field: &'static str,
    /// The raw text that failed to match
    pub value: String,
}

/// Keep only ASCII alphanumerics, lowercased.
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Topic category. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Core,
    #[default]
    Intermediate,
    Advanced,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Core, Category::Intermediate, Category::Advanced];
}

impl FromStr for Category {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "core" | "fundamentals" => Ok(Category::Core),
            "intermediate" => Ok(Category::Intermediate),
            "advanced" => Ok(Category::Advanced),
            _ => Err(ParseLabelError { field: "category", value: s.trim().to_string() }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Core => "Core",
            Category::Intermediate => "Intermediate",
            Category::Advanced => "Advanced",
        })
    }
}

/// Topic priority. `High` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];
}

impl FromStr for Priority {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "high" | "critical" => Ok(Priority::High),
            "medium" | "normal" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ParseLabelError { field: "priority", value: s.trim().to_string() }),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        })
    }
}

/// How hard the topic is to pick up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl FromStr for Difficulty {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "beginner" | "easy" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" | "hard" => Ok(Difficulty::Advanced),
            _ => Err(ParseLabelError { field: "difficulty", value: s.trim().to_string() }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        })
    }
}

/// Authoring status. Moves forward by convention only:
/// `NotStarted` → `InProgress` → `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Done,
}

impl FromStr for Status {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "notstarted" | "todo" | "planned" => Ok(Status::NotStarted),
            "inprogress" | "wip" | "draft" => Ok(Status::InProgress),
            "done" | "complete" | "completed" => Ok(Status::Done),
            _ => Err(ParseLabelError { field: "status", value: s.trim().to_string() }),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::NotStarted => "Not Started",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        })
    }
}

/// The four header labels of a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub priority: Priority,
    pub difficulty: Difficulty,
    pub status: Status,
}

impl Classification {
    pub fn new(category: Category, priority: Priority) -> Self {
        Self {
            category,
            priority,
            ..Self::default()
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_tolerate_decoration() {
        assert_eq!("🔴 High".parse::<Priority>(), Ok(Priority::High));
        assert_eq!(" in-progress ".parse::<Status>(), Ok(Status::InProgress));
        assert_eq!("In Progress".parse::<Status>(), Ok(Status::InProgress));
        assert_eq!("✅ Done".parse::<Status>(), Ok(Status::Done));
        assert_eq!("CORE".parse::<Category>(), Ok(Category::Core));
        assert_eq!("beginner".parse::<Difficulty>(), Ok(Difficulty::Beginner));
    }

    #[test]
    fn unknown_label_reports_field() {
        let err = "urgent-ish".parse::<Priority>().unwrap_err();
        assert_eq!(err.field, "priority");
        assert_eq!(err.value, "urgent-ish");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for status in [Status::NotStarted, Status::InProgress, Status::Done] {
            assert_eq!(status.to_string().parse::<Status>(), Ok(status));
        }
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn grouping_order() {
        assert!(Category::Core < Category::Intermediate);
        assert!(Category::Intermediate < Category::Advanced);
        assert!(Priority::High < Priority::Medium);
        assert!(Status::NotStarted < Status::InProgress);
        assert!(Status::InProgress < Status::Done);
    }
}

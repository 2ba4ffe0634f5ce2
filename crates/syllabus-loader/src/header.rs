//! README header scanning.
//!
//! Topic READMEs open with a title and a blockquote of labels:
//!
//! ```text
//! # Middleware
//!
//! > **Category**: Intermediate | **Priority**: Medium | **Difficulty**: Intermediate | **Status**: ✅ Done
//! ```
//!
//! The scanner is tolerant. Unknown keys are ignored, missing or unreadable
//! values fall back to [`Classification::default`] and produce a note
//! instead of an error.

use syllabus_model::{Category, Classification, Difficulty, Priority, Status};

/// Outcome of scanning a README.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderScan {
    pub title: Option<String>,
    pub classification: Classification,
    pub overview: String,
    /// One note per defaulted or unreadable label
    pub notes: Vec<String>,
}

#[derive(Default)]
struct Labels<'a> {
    category: Option<&'a str>,
    priority: Option<&'a str>,
    difficulty: Option<&'a str>,
    status: Option<&'a str>,
}

/// Scan title, classification header and overview out of README text.
pub fn scan_readme(text: &str) -> HeaderScan {
    let mut scan = HeaderScan {
        title: first_heading(text),
        overview: overview(text),
        ..HeaderScan::default()
    };

    let labels = scan_labels(text);
    if labels.category.is_none() && labels.priority.is_none() && labels.difficulty.is_none() && labels.status.is_none() {
        scan.notes.push("no metadata header found; using default classification".to_string());
        return scan;
    }

    scan.classification.category = label(labels.category, "Category", &mut scan.notes);
    scan.classification.priority = label(labels.priority, "Priority", &mut scan.notes);
    scan.classification.difficulty = label(labels.difficulty, "Difficulty", &mut scan.notes);
    scan.classification.status = label(labels.status, "Status", &mut scan.notes);
    scan
}

fn label<T>(raw: Option<&str>, key: &str, notes: &mut Vec<String>) -> T
where
    T: std::str::FromStr<Err = syllabus_model::ParseLabelError> + Default + std::fmt::Display,
{
    match raw.map(str::parse::<T>) {
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            let value = T::default();
            notes.push(format!("{}; defaulting {} to {}", err, key, value));
            value
        }
        None => {
            let value = T::default();
            notes.push(format!("header has no {} label; defaulting to {}", key, value));
            value
        }
    }
}

/// Collect `**Key**: Value` pairs from blockquote lines before the first section.
fn scan_labels(text: &str) -> Labels<'_> {
    let mut labels = Labels::default();
    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("## ") {
            break;
        }
        let Some(quoted) = trimmed.strip_prefix('>') else {
            continue;
        };
        for segment in quoted.split('|') {
            let Some((key, value)) = split_pair(segment) else {
                continue;
            };
            match key.as_str() {
                "category" => labels.category = Some(value),
                "priority" => labels.priority = Some(value),
                "difficulty" | "level" => labels.difficulty = Some(value),
                "status" => labels.status = Some(value),
                _ => {}
            }
        }
    }
    labels
}

/// Split `**Key**: Value` (or `**Key:** Value`) into a normalized key and trimmed value.
fn split_pair(segment: &str) -> Option<(String, &str)> {
    let (key, value) = segment.split_once(':')?;
    let key: String = key
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let value = value.trim().trim_start_matches('*').trim_end_matches('*').trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Text of the first `# ` heading.
pub fn first_heading(text: &str) -> Option<String> {
    let mut in_fence = false;
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(title) = trimmed.strip_prefix("# ") {
            let title = title.trim();
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }
    }
    None
}

/// First paragraph under `## Overview`, or else the first plain paragraph.
fn overview(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines
        .iter()
        .position(|l| {
            let l = l.trim().to_lowercase();
            l == "## overview" || l == "## what is it?" || l == "## introduction"
        })
        .map_or(0, |i| i + 1);

    let mut paragraph: Vec<&str> = Vec::new();
    for line in &lines[start..] {
        let trimmed = line.trim();
        let skip = trimmed.starts_with('#')
            || trimmed.starts_with('>')
            || trimmed.starts_with("```")
            || trimmed.starts_with("---")
            || trimmed.starts_with('|')
            || trimmed.starts_with("- ")
            || trimmed.starts_with("* ");
        if trimmed.is_empty() || skip {
            if !paragraph.is_empty() {
                break;
            }
            continue;
        }
        paragraph.push(trimmed);
    }
    paragraph.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const README: &str = "\
# Middleware

> **Category**: Intermediate | **Priority**: 🟡 Medium | **Difficulty**: Advanced | **Status**: ✅ Done
> **Time**: 30 minutes

## Overview

Middleware runs code before a request is completed.
It can rewrite, redirect or add headers.

## Details

Something else.
";

    #[test]
    fn reads_full_header() {
        let scan = scan_readme(README);
        assert_eq!(scan.title.as_deref(), Some("Middleware"));
        assert_eq!(scan.classification.category, Category::Intermediate);
        assert_eq!(scan.classification.priority, Priority::Medium);
        assert_eq!(scan.classification.difficulty, Difficulty::Advanced);
        assert_eq!(scan.classification.status, Status::Done);
        assert!(scan.notes.is_empty(), "{:?}", scan.notes);
        assert_eq!(
            scan.overview,
            "Middleware runs code before a request is completed. It can rewrite, redirect or add headers."
        );
    }

    #[test]
    fn colon_inside_bold() {
        let scan = scan_readme("# X\n\n> **Category:** Core | **Priority:** High | **Difficulty:** Beginner | **Status:** In Progress\n");
        assert_eq!(scan.classification.category, Category::Core);
        assert_eq!(scan.classification.priority, Priority::High);
        assert_eq!(scan.classification.status, Status::InProgress);
        assert!(scan.notes.is_empty());
    }

    #[test]
    fn missing_header_defaults_with_one_note() {
        let scan = scan_readme("# Fonts\n\nLoad fonts without layout shift.\n");
        assert_eq!(scan.classification, Classification::default());
        assert_eq!(scan.notes.len(), 1);
        assert_eq!(scan.overview, "Load fonts without layout shift.");
    }

    #[test]
    fn bad_values_default_individually() {
        let scan = scan_readme("# X\n> **Category**: Core | **Priority**: Urgent | **Status**: Done\n");
        assert_eq!(scan.classification.category, Category::Core);
        assert_eq!(scan.classification.priority, Priority::Medium);
        assert_eq!(scan.classification.status, Status::Done);
        // bad priority + missing difficulty
        assert_eq!(scan.notes.len(), 2);
        assert!(scan.notes[0].contains("priority"));
    }

    #[test]
    fn heading_inside_fence_is_not_a_title() {
        assert_eq!(first_heading("```md\n# Not me\n```\n# Me\n").as_deref(), Some("Me"));
        assert_eq!(first_heading("no headings"), None);
    }
}

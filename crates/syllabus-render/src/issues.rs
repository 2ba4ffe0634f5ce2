//! Plain-text issue listings.

use std::fmt::Write;
use syllabus_model::{Severity, ValidationIssue};

/// One line per issue, e.g. `error[duplicate-id] topic 03: ...`.
pub fn render_issues(issues: &[ValidationIssue]) -> String {
    let mut out = String::new();
    for issue in issues {
        let _ = writeln!(out, "{}", issue);
    }
    out
}

/// `2 errors, 1 warning`
pub fn render_summary(issues: &[ValidationIssue]) -> String {
    let errors = issues.iter().filter(|i| i.severity == Severity::Error).count();
    let warnings = issues.len() - errors;
    format!("{}, {}", plural(errors, "error"), plural(warnings, "warning"))
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllabus_model::{IssueKind, Subject};

    #[test]
    fn one_line_per_issue() {
        let issues = vec![
            ValidationIssue::error(IssueKind::DuplicateId, Subject::topic(3), "id 03 is used twice"),
            ValidationIssue::warning(IssueKind::NonContiguous, Subject::Catalog, "missing 04"),
        ];
        let text = render_issues(&issues);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "error[duplicate-id] topic 03: id 03 is used twice");
        assert!(lines[1].starts_with("warning[non-contiguous] "));
        assert_eq!(render_summary(&issues), "1 error, 1 warning");
    }

    #[test]
    fn empty() {
        assert_eq!(render_issues(&[]), "");
        assert_eq!(render_summary(&[]), "0 errors, 0 warnings");
    }
}

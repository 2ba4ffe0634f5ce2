//! Syllabus Renderer
//!
//! Turns a catalog and its derived views into text. Renderers are pure
//! string templating; writing the result anywhere is the caller's job.

mod issues;
mod markdown;

pub use issues::{render_issues, render_summary};
pub use markdown::{render_nav_footer, render_order, render_toc, status_marker};

use syllabus_model::Catalog;

/// The catalog as pretty-printed JSON.
pub fn render_json(catalog: &Catalog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(catalog)
}

//! Syllabus Navigation
//!
//! Everything here is derived from a [`Catalog`](syllabus_model::Catalog) and
//! never stored back into it:
//!
//! - [`NavigationIndex`]: the canonical linear order of topics. Previous/next
//!   links are computed from it on demand, so there is exactly one source of
//!   truth for ordering.
//! - [`TableOfContents`]: topics grouped by category, then priority, in id
//!   order within each group.
//! - [`check_authored_links`]: compares Previous/Next links written by hand in
//!   READMEs against the derived order.
//!
//! Building tolerates gaps in the id sequence. It sorts what exists and
//! reports a `NonContiguous` warning rather than failing.

mod authored;
mod index;
mod toc;

pub use authored::check_authored_links;
pub use index::{Neighbours, NavigationIndex};
pub use toc::{CategoryGroup, PriorityGroup, TableOfContents, TocEntry};

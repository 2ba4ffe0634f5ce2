//! Syllabus Catalog Checks
//!
//! [`validate`] walks a catalog once and reports every broken invariant:
//!
//! | rule | severity |
//! |---|---|
//! | duplicate topic id or slug | error |
//! | topic id outside `1..=max_topic_id` | error |
//! | guide or example owned by a missing topic | error |
//! | duplicate guide slug / example filename within a topic | error |
//! | ids not contiguous from 1 | warning |
//! | cross-reference to a missing topic or guide | warning |
//! | cross-reference with the wrong slug, or to itself | warning |
//! | hand-written Previous/Next disagreeing with the index | warning |
//!
//! The checker never fails. It always returns a [`Report`]; the caller picks
//! a [`CheckMode`] to decide what counts as failure.

mod options;
mod report;
mod rules;
mod status;

pub use options::{CheckMode, CheckOptions, ParseModeError};
pub use report::Report;
pub use rules::validate;
pub use status::check_status_transitions;

//! Core non-UI logic: result filtering, selection, and app submission.

pub mod filter;
pub mod selection;
pub mod submit;

pub use filter::{apply_filters_preserve_selection, clear_filters, cycle_category};
pub use selection::{jump_sel, move_sel};
pub use submit::{SUBMIT_CATEGORIES, SUBMIT_ISSUES_URL, SubmissionForm, submit};

//! lindagrades-report — Reports built on fetched exam records.
//!
//! The weighted grade average per study section, the list of newly posted
//! exams, and the JSON cache the latter compares against.

pub mod average;
pub mod cache;
pub mod diff;

pub use average::{AverageReport, Section, SectionSummary};
pub use cache::ExamCache;
pub use diff::{find_new_exams, render_new_exams};

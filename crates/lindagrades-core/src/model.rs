//! Core data model types for lindagrades.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Course type tag for the first study section.
pub const COURSE_TYPE_BASIC: &str = "G";
/// Course type tag for the main study section.
pub const COURSE_TYPE_MAIN: &str = "H";

/// One row of the LINDA grade table.
///
/// Equality is full structural equality; the new-exam diff relies on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamRecord {
    /// Section tag, e.g. `"G"` or `"H"`.
    pub course_type: String,
    /// ECTS credit weight.
    pub credits: f64,
    /// Grade, `0.0` while the exam is not graded yet.
    pub grade: f64,
    /// Exam number as shown by the portal.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Whether the status cell reported the exam as passed.
    pub passed: bool,
    /// Semester label, e.g. `"WS20"`.
    pub semester: String,
}

impl ExamRecord {
    /// Whether the record has a grade at all.
    pub fn is_graded(&self) -> bool {
        self.grade != 0.0
    }

    /// Whether the record contributes to a weighted average.
    pub fn counts_towards_average(&self) -> bool {
        self.is_graded() && self.passed
    }
}

impl fmt::Display for ExamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.semester, self.name)
    }
}

/// Sort records by name, stable and byte-wise.
pub fn sort_by_name(records: &mut [ExamRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name));
}

//! Per-exam ECTS credit overrides.

use std::collections::HashMap;

use crate::model::ExamRecord;

/// Replacement credit values keyed by exam id.
///
/// Some exams are listed with credits that do not match the study
/// regulations; the table corrects them after extraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EctsOverrides {
    credits: HashMap<i64, f64>,
}

impl EctsOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replacement credits for `id`, if any.
    pub fn get(&self, id: i64) -> Option<f64> {
        self.credits.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.credits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credits.is_empty()
    }

    /// Replace `credits` on every record whose id is in the table.
    pub fn apply(&self, records: &mut [ExamRecord]) {
        for record in records.iter_mut() {
            if let Some(credits) = self.get(record.id) {
                tracing::debug!(id = record.id, from = record.credits, to = credits, "ects override");
                record.credits = credits;
            }
        }
    }
}

impl From<HashMap<i64, f64>> for EctsOverrides {
    fn from(credits: HashMap<i64, f64>) -> Self {
        Self { credits }
    }
}

impl FromIterator<(i64, f64)> for EctsOverrides {
    fn from_iter<I: IntoIterator<Item = (i64, f64)>>(iter: I) -> Self {
        Self {
            credits: iter.into_iter().collect(),
        }
    }
}

//! Newly posted exams.

use lindagrades_core::ExamRecord;

/// Records in `current` that have no structurally equal counterpart in `cached`.
///
/// An empty cache means there is nothing to compare against, so nothing is
/// reported as new. Result order follows `current`.
pub fn find_new_exams(current: &[ExamRecord], cached: &[ExamRecord]) -> Vec<ExamRecord> {
    if cached.is_empty() {
        return Vec::new();
    }

    current
        .iter()
        .filter(|record| !cached.contains(record))
        .cloned()
        .collect()
}

/// One `semester: name` line per record.
pub fn render_new_exams(records: &[ExamRecord]) -> String {
    records.iter().map(|r| format!("{r}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, grade: f64) -> ExamRecord {
        ExamRecord {
            course_type: "G".into(),
            credits: 5.0,
            grade,
            id,
            name: format!("Exam {id}"),
            passed: grade > 0.0,
            semester: "SS21".into(),
        }
    }

    #[test]
    fn empty_cache_reports_nothing() {
        let current = vec![record(1, 1.0), record(2, 2.0)];
        assert!(find_new_exams(&current, &[]).is_empty());
    }

    #[test]
    fn reports_added_records_in_current_order() {
        let cached = vec![record(2, 2.0)];
        let current = vec![record(3, 1.0), record(2, 2.0), record(1, 1.7)];
        let new = find_new_exams(&current, &cached);
        let ids: Vec<i64> = new.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn changed_grade_counts_as_new() {
        let cached = vec![record(1, 0.0)];
        let current = vec![record(1, 2.3)];
        assert_eq!(find_new_exams(&current, &cached), current);
    }

    #[test]
    fn cache_order_does_not_matter() {
        let current = vec![record(1, 1.0), record(2, 2.0), record(3, 3.0)];
        let cached_a = vec![record(1, 1.0), record(2, 2.0)];
        let cached_b = vec![record(2, 2.0), record(1, 1.0)];
        assert_eq!(
            find_new_exams(&current, &cached_a),
            find_new_exams(&current, &cached_b)
        );
    }

    #[test]
    fn render_lines() {
        assert_eq!(
            render_new_exams(&[record(1, 1.0), record(2, 2.0)]),
            "SS21: Exam 1\nSS21: Exam 2\n"
        );
        assert_eq!(render_new_exams(&[]), "");
    }
}

//! Weighted grade average report.
//!
//! Records are sorted by name, split into study sections by course type,
//! and every graded, passed exam is weighted by its ECTS credits.

use std::fmt::Write;

use lindagrades_core::model::{sort_by_name, COURSE_TYPE_BASIC, COURSE_TYPE_MAIN};
use lindagrades_core::normalize::{format_decimal, justify_left, Precision};
use lindagrades_core::ExamRecord;

pub const NAME_WIDTH: usize = 52;
pub const CREDITS_WIDTH: usize = 5;
pub const GRADE_WIDTH: usize = 5;
/// Three columns plus the two separating spaces.
pub const ROW_WIDTH: usize = NAME_WIDTH + CREDITS_WIDTH + GRADE_WIDTH + 2;

/// A titled group of records sharing one course type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub course_type: String,
}

impl Section {
    pub fn new(title: &str, course_type: &str) -> Self {
        Self {
            title: title.to_string(),
            course_type: course_type.to_string(),
        }
    }

    /// Grundstudium and Hauptstudium.
    pub fn defaults() -> Vec<Section> {
        vec![
            Section::new("Grundstudium", COURSE_TYPE_BASIC),
            Section::new("Hauptstudium", COURSE_TYPE_MAIN),
        ]
    }
}

/// Counted records and totals of one section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSummary {
    pub title: String,
    /// Graded, passed records in name order.
    pub records: Vec<ExamRecord>,
    /// Sum of credits.
    pub total_credits: f64,
    /// Sum of credits × grade.
    pub weighted_grades: f64,
}

impl SectionSummary {
    fn compute(title: &str, records: impl Iterator<Item = ExamRecord>) -> Self {
        let records: Vec<ExamRecord> = records.filter(|r| r.counts_towards_average()).collect();
        let total_credits = records.iter().map(|r| r.credits).sum();
        let weighted_grades = records.iter().map(|r| r.credits * r.grade).sum();
        Self {
            title: title.to_string(),
            records,
            total_credits,
            weighted_grades,
        }
    }

    /// Weighted average, absent when nothing was counted.
    pub fn average(&self) -> Option<f64> {
        if self.total_credits > 0.0 {
            Some(self.weighted_grades / self.total_credits)
        } else {
            None
        }
    }
}

/// Average report over all sections.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageReport {
    pub sections: Vec<SectionSummary>,
}

impl AverageReport {
    /// Report over the default sections.
    pub fn compute(records: &[ExamRecord]) -> Self {
        Self::compute_with(records, &Section::defaults())
    }

    pub fn compute_with(records: &[ExamRecord], sections: &[Section]) -> Self {
        let mut sorted = records.to_vec();
        sort_by_name(&mut sorted);

        let sections = sections
            .iter()
            .map(|section| {
                SectionSummary::compute(
                    &section.title,
                    sorted
                        .iter()
                        .filter(|r| r.course_type == section.course_type)
                        .cloned(),
                )
            })
            .collect();

        Self { sections }
    }

    /// Column-aligned text, one table per section.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            let _ = write!(out, "{}:\n\n", section.title);
            render_section(&mut out, section);
        }
        out
    }
}

fn render_row(out: &mut String, name: &str, credits: &str, grade: &str) {
    let _ = writeln!(
        out,
        "{} {} {}",
        justify_left(name, NAME_WIDTH),
        justify_left(credits, CREDITS_WIDTH),
        justify_left(grade, GRADE_WIDTH)
    );
}

fn render_rule(out: &mut String) {
    out.push_str(&"-".repeat(ROW_WIDTH));
    out.push('\n');
}

fn render_section(out: &mut String, section: &SectionSummary) {
    render_row(out, "Veranstaltung", "ECTS", "Note");
    render_rule(out);

    for record in &section.records {
        render_row(
            out,
            &record.name,
            &format_decimal(record.credits, Precision::Fixed(1)),
            &format_decimal(record.grade, Precision::Fixed(1)),
        );
    }

    render_rule(out);
    render_row(
        out,
        "Summe",
        &format_decimal(section.total_credits, Precision::Shortest),
        &format_decimal(section.weighted_grades, Precision::Shortest),
    );
    let average = section
        .average()
        .map(|avg| format_decimal(avg, Precision::Fixed(2)))
        .unwrap_or_else(|| "-".to_string());
    render_row(out, "Durchschnitt", "", &average);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, course: &str, credits: f64, grade: f64, passed: bool) -> ExamRecord {
        ExamRecord {
            course_type: course.into(),
            credits,
            grade,
            id: 1,
            name: name.into(),
            passed,
            semester: "WS20".into(),
        }
    }

    #[test]
    fn weighted_average_of_two_records() {
        let records = vec![
            record("Algorithmen", "G", 5.0, 2.0, true),
            record("Betriebssysteme", "G", 3.0, 3.0, true),
        ];
        let report = AverageReport::compute(&records);
        let basic = &report.sections[0];
        assert_eq!(basic.total_credits, 8.0);
        assert_eq!(basic.weighted_grades, 19.0);
        assert_eq!(basic.average(), Some(2.375));
    }

    #[test]
    fn ungraded_and_failed_records_are_skipped() {
        let records = vec![
            record("A", "G", 5.0, 2.0, true),
            record("B", "G", 5.0, 0.0, true),
            record("C", "G", 5.0, 5.0, false),
            record("D", "G", 5.0, 0.0, false),
        ];
        let report = AverageReport::compute(&records);
        let basic = &report.sections[0];
        assert_eq!(basic.records.len(), 1);
        assert_eq!(basic.average(), Some(2.0));
    }

    #[test]
    fn sections_split_by_course_type_and_sort_by_name() {
        let records = vec![
            record("Zeta", "H", 5.0, 1.0, true),
            record("Mu", "G", 5.0, 1.0, true),
            record("Alpha", "H", 5.0, 1.0, true),
            record("Other", "X", 5.0, 1.0, true),
        ];
        let report = AverageReport::compute(&records);
        assert_eq!(report.sections.len(), 2);
        assert_eq!(report.sections[0].title, "Grundstudium");
        assert_eq!(report.sections[0].records.len(), 1);
        let main: Vec<&str> = report.sections[1]
            .records
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(main, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn empty_section_has_no_average() {
        let report = AverageReport::compute(&[record("A", "G", 5.0, 1.3, true)]);
        assert_eq!(report.sections[1].average(), None);
        assert!(report.render().contains(&format!(
            "{} {} {}\n",
            justify_left("Durchschnitt", NAME_WIDTH),
            justify_left("", CREDITS_WIDTH),
            justify_left("-", GRADE_WIDTH)
        )));
    }

    #[test]
    fn render_layout() {
        let records = vec![
            record("Mathe", "G", 5.0, 2.0, true),
            record("Physik", "G", 4.0, 1.0, true),
        ];
        let rendered = AverageReport::compute_with(&records, &[Section::new("Grundstudium", "G")])
            .render();

        let rule = "-".repeat(64);
        let expected = format!(
            "Grundstudium:\n\n\
             {} ECTS  Note \n\
             {rule}\n\
             {} 5,0   2,0  \n\
             {} 4,0   1,0  \n\
             {rule}\n\
             {} 9     14   \n\
             {}       1,56 \n",
            justify_left("Veranstaltung", 52),
            justify_left("Mathe", 52),
            justify_left("Physik", 52),
            justify_left("Summe", 52),
            justify_left("Durchschnitt", 52),
        );
        assert_eq!(rendered, expected);
    }

    fn summe_line(rendered: &str) -> &str {
        rendered
            .lines()
            .find(|line| line.starts_with("Summe"))
            .unwrap()
    }

    #[test]
    fn totals_print_without_float_noise() {
        let rendered = AverageReport::compute(&[record("A", "G", 3.0, 1.7, true)]).render();
        assert_eq!(
            summe_line(&rendered),
            format!("{} 3     5,1  ", justify_left("Summe", NAME_WIDTH))
        );

        let rendered = AverageReport::compute(&[
            record("A", "G", 3.0, 1.7, true),
            record("B", "G", 0.1, 1.0, true),
            record("C", "G", 0.2, 1.0, true),
        ])
        .render();
        assert_eq!(
            summe_line(&rendered),
            format!("{} 3,3   5,4  ", justify_left("Summe", NAME_WIDTH))
        );
    }

    #[test]
    fn long_names_overflow_the_column() {
        let name = "X".repeat(60);
        let rendered = AverageReport::compute(&[record(&name, "G", 5.0, 1.0, true)]).render();
        assert!(rendered.contains(&format!("{name} 5,0   1,0  \n")));
    }

    #[test]
    fn sections_are_separated() {
        let rendered = AverageReport::compute(&[]).render();
        assert!(rendered.starts_with("Grundstudium:\n\n"));
        assert!(rendered.contains("\n\nHauptstudium:\n\n"));
    }
}

//! The `lindagrades list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use lindagrades_core::normalize::{format_decimal, Precision};
use lindagrades_core::ExamRecord;

pub async fn execute(config_path: Option<PathBuf>, format: String) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json"),
        "unknown format: {format} (expected text or json)"
    );

    let (_, records) = super::fetch_records(config_path).await?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("{}", records_table(&records));
    }

    Ok(())
}

fn records_table(records: &[ExamRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Nr", "Veranstaltung", "Semester", "Typ", "ECTS", "Note", "Bestanden"]);

    for record in records {
        let grade = if record.is_graded() {
            format_decimal(record.grade, Precision::Fixed(1))
        } else {
            String::new()
        };
        table.add_row(vec![
            Cell::new(record.id),
            Cell::new(&record.name),
            Cell::new(&record.semester),
            Cell::new(&record.course_type),
            Cell::new(format_decimal(record.credits, Precision::Fixed(1))),
            Cell::new(grade),
            Cell::new(if record.passed { "ja" } else { "nein" }),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shows_one_row_per_record() {
        let records = vec![
            ExamRecord {
                course_type: "G".into(),
                credits: 5.0,
                grade: 2.3,
                id: 101,
                name: "Algorithmen".into(),
                passed: true,
                semester: "WS20".into(),
            },
            ExamRecord {
                course_type: "H".into(),
                credits: 12.0,
                grade: 0.0,
                id: 999,
                name: "Bachelorarbeit".into(),
                passed: false,
                semester: "SS23".into(),
            },
        ];
        let rendered = records_table(&records).to_string();
        assert!(rendered.contains("Algorithmen"));
        assert!(rendered.contains("2,3"));
        assert!(rendered.contains("12,0"));
        assert!(rendered.contains("nein"));
    }
}

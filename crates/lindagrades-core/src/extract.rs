//! Pattern-based extraction of exam records from grade pages.
//!
//! The LINDA grade listing is a fixed ten-column HTML table. Instead of a
//! general HTML parser, each known layout is described by a [`TableSchema`]
//! and compiled into a [`PatternExtractor`]. A layout change on the portal
//! means adding a schema, not touching the session engine.

use regex::Regex;

use crate::error::ExtractError;
use crate::model::ExamRecord;
use crate::normalize::parse_decimal;

/// Turns a raw grade page into exam records.
pub trait RecordExtractor: Send + Sync {
    /// Version tag of the layout this extractor understands.
    fn schema(&self) -> &str;

    /// Extract all records in document order.
    ///
    /// Returns [`ExtractError::NoRecordsFound`] when no row matches.
    fn extract(&self, html: &str) -> Result<Vec<ExamRecord>, ExtractError>;
}

/// 1-based cell positions of each record field within a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub id: usize,
    pub grade: usize,
    pub status: usize,
    pub course_type: usize,
    pub credits: usize,
    pub semester: usize,
    pub name: usize,
}

impl ColumnMap {
    fn max(&self) -> usize {
        [
            self.id,
            self.grade,
            self.status,
            self.course_type,
            self.credits,
            self.semester,
            self.name,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    fn min(&self) -> usize {
        [
            self.id,
            self.grade,
            self.status,
            self.course_type,
            self.credits,
            self.semester,
            self.name,
        ]
        .into_iter()
        .min()
        .unwrap_or(0)
    }
}

/// Description of one grade table layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    /// Layout version, e.g. `"qis-v1"`.
    pub version: String,
    /// Number of `<td>` cells per row.
    pub cell_count: usize,
    /// Pattern for the leading numeric token of the grade cell.
    pub grade_pattern: String,
    /// Where each field sits in the row.
    pub columns: ColumnMap,
    /// Status cell content meaning "passed".
    pub passed_token: String,
}

impl TableSchema {
    /// The grade listing layout served by LINDA's QIS student module.
    pub fn qis_v1() -> Self {
        Self {
            version: "qis-v1".to_string(),
            cell_count: 10,
            grade_pattern: r"^([0-9]+,[0-9]+)".to_string(),
            columns: ColumnMap {
                id: 1,
                grade: 2,
                status: 3,
                course_type: 7,
                credits: 8,
                semester: 9,
                name: 10,
            },
            passed_token: "bestanden".to_string(),
        }
    }

    /// Row pattern with one lazy capture per cell.
    pub fn row_pattern(&self) -> String {
        let mut pattern = String::from(r"(?s)<tr>\s*");
        for _ in 0..self.cell_count {
            pattern.push_str(r"<td[^>]*>(.+?)</td>\s*");
        }
        pattern.push_str("</tr>");
        pattern
    }
}

impl Default for TableSchema {
    fn default() -> Self {
        Self::qis_v1()
    }
}

/// [`RecordExtractor`] backed by a compiled [`TableSchema`].
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    schema: TableSchema,
    row: Regex,
    grade: Regex,
}

impl PatternExtractor {
    /// Compile `schema`.
    pub fn new(schema: TableSchema) -> Result<Self, ExtractError> {
        if schema.cell_count == 0 {
            return Err(ExtractError::InvalidSchema(
                "cell count must be at least 1".into(),
            ));
        }
        if schema.columns.min() == 0 || schema.columns.max() > schema.cell_count {
            return Err(ExtractError::InvalidSchema(format!(
                "column positions must be within 1..={}",
                schema.cell_count
            )));
        }

        let row = Regex::new(&schema.row_pattern())
            .map_err(|e| ExtractError::InvalidSchema(format!("row pattern: {e}")))?;
        let grade = Regex::new(&schema.grade_pattern)
            .map_err(|e| ExtractError::InvalidSchema(format!("grade pattern: {e}")))?;

        Ok(Self { schema, row, grade })
    }

    /// Extractor for the current LINDA layout.
    pub fn qis_v1() -> Self {
        Self::new(TableSchema::qis_v1()).expect("built-in schema compiles")
    }

    pub fn table_schema(&self) -> &TableSchema {
        &self.schema
    }

    fn record_from_cells(&self, cells: &[&str]) -> Result<ExamRecord, ExtractError> {
        let columns = &self.schema.columns;
        let cell = |position: usize| cells[position - 1];

        Ok(ExamRecord {
            course_type: cell(columns.course_type).to_string(),
            credits: parse_credits(cell(columns.credits))?,
            grade: self.parse_grade(cell(columns.grade)),
            id: parse_id(cell(columns.id))?,
            name: cell(columns.name).to_string(),
            passed: cell(columns.status) == self.schema.passed_token,
            semester: cell(columns.semester).to_string(),
        })
    }

    /// Leading `digits,digits` token of the grade cell; `0.0` when absent.
    fn parse_grade(&self, input: &str) -> f64 {
        // Exams without a grade carry only annotation text here.
        self.grade
            .captures(input)
            .and_then(|caps| caps.get(1))
            .and_then(|m| parse_decimal(m.as_str()))
            .unwrap_or(0.0)
    }
}

impl RecordExtractor for PatternExtractor {
    fn schema(&self) -> &str {
        &self.schema.version
    }

    fn extract(&self, html: &str) -> Result<Vec<ExamRecord>, ExtractError> {
        let mut records = Vec::new();

        for caps in self.row.captures_iter(html) {
            let cells: Vec<&str> = caps
                .iter()
                .skip(1)
                .map(|m| m.map_or("", |m| m.as_str().trim()))
                .collect();
            records.push(self.record_from_cells(&cells)?);
        }

        if records.is_empty() {
            return Err(ExtractError::NoRecordsFound);
        }

        tracing::debug!(schema = %self.schema.version, count = records.len(), "extracted exam records");
        Ok(records)
    }
}

/// Credits are finite and non-negative.
fn parse_credits(input: &str) -> Result<f64, ExtractError> {
    parse_decimal(input)
        .filter(|credits| *credits >= 0.0)
        .ok_or_else(|| ExtractError::NumericFormat {
            field: "credits",
            value: input.to_string(),
        })
}

fn parse_id(input: &str) -> Result<i64, ExtractError> {
    input.parse::<i64>().map_err(|_| ExtractError::NumericFormat {
        field: "id",
        value: input.to_string(),
    })
}

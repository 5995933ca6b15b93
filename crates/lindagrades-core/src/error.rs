//! Extraction error types.

use thiserror::Error;

/// Errors that can occur while turning a grade page into exam records.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The row pattern matched zero times.
    ///
    /// This covers an empty result as well as a page that is not the grade
    /// listing at all; callers disambiguate from context.
    #[error("no exam results found")]
    NoRecordsFound,

    /// A credits or id cell did not hold a well-formed number.
    #[error("could not parse {field} ({value:?})")]
    NumericFormat { field: &'static str, value: String },

    /// A schema pattern failed to compile.
    #[error("invalid table schema: {0}")]
    InvalidSchema(String),
}

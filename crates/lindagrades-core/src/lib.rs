//! lindagrades-core — Exam records, extraction, and normalization.
//!
//! This crate defines the exam record model, the pattern-based extractor
//! that turns LINDA grade pages into records, and the numeric helpers that
//! the session engine and reports build on.

pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod overrides;

pub use error::ExtractError;
pub use extract::{PatternExtractor, RecordExtractor, TableSchema};
pub use model::ExamRecord;
pub use overrides::EctsOverrides;

//! Error types for the analytics engine.
//!
//! Both variants are boundary errors: they are detected before any
//! aggregation or estimation runs and surfaced directly to the caller.
//! Degenerate-but-valid inputs (an empty selection after filtering, an empty
//! cohort at a fallback tier) are ordinary zero-valued or fallback results,
//! never errors.

use chrono::NaiveDate;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for engine operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The filter's date range is inverted. Surfaced to the caller rather
    /// than silently corrected.
    #[error("invalid filter: start date {start} is after end date {end}")]
    InvalidFilter { start: NaiveDate, end: NaiveDate },

    /// The appointment history contains no records, so no computation can
    /// produce a value at any fallback tier.
    #[error("appointment history is empty")]
    EmptyHistory,
}

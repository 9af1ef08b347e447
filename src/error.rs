//! Error types for the Labour Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can stop an hourly labour analysis.

use thiserror::Error;

use crate::models::HourBucket;

/// The main error type for the Labour Engine.
///
/// Every stage of the pipeline returns this error type. A failed stage never
/// hands a partial mapping to its caller.
///
/// # Example
///
/// ```
/// use labour_engine::error::EngineError;
///
/// let error = EngineError::SourceNotFound {
///     path: "/missing/shifts.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Source file not found: /missing/shifts.csv");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time string could not be normalized into `HH:MM`.
    #[error("Cannot parse time '{input}'")]
    TimeParse {
        /// The raw text that failed to parse.
        input: String,
    },

    /// Break notes were missing, malformed, or fell before the shift start.
    #[error("Invalid break notes '{notes}': {message}")]
    InvalidBreak {
        /// The raw break notes.
        notes: String,
        /// A description of what made the break invalid.
        message: String,
    },

    /// A pay rate was not a non-negative decimal.
    #[error("Invalid pay rate '{value}'")]
    InvalidPayRate {
        /// The raw pay rate text.
        value: String,
    },

    /// A shift row could not be allocated.
    #[error("Invalid shift at row {row}: {message}")]
    InvalidShift {
        /// The 1-based data row number in the shift source.
        row: usize,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A sales transaction row was malformed.
    #[error("Invalid transaction at row {row}: {message}")]
    InvalidTransaction {
        /// The 1-based data row number in the sales source.
        row: usize,
        /// A description of what made the transaction invalid.
        message: String,
    },

    /// An hour bucket key did not match the `HH:00` form.
    #[error("Invalid hour bucket '{key}': expected HH:00")]
    InvalidBucket {
        /// The offending key.
        key: String,
    },

    /// A bucket carried a zero labour cost.
    #[error("Labour cost for {bucket} is zero")]
    ZeroCost {
        /// The bucket with no cost.
        bucket: HourBucket,
    },

    /// A bucket carried zero revenue.
    #[error("Revenue for {bucket} is zero")]
    ZeroRevenue {
        /// The bucket with no revenue.
        bucket: HourBucket,
    },

    /// A labour cost total no longer fits in a decimal.
    #[error("Labour cost for {bucket} overflows")]
    CostOverflow {
        /// The bucket whose total overflowed.
        bucket: HourBucket,
    },

    /// A labour percentage no longer fits in a decimal.
    #[error("Labour percentage for {bucket} overflows")]
    PercentageOverflow {
        /// The bucket whose percentage overflowed.
        bucket: HourBucket,
    },

    /// Ranking was asked for over an empty percentage mapping.
    #[error("No hourly percentages to rank")]
    EmptyPercentages,

    /// No bucket had a strictly positive percentage.
    #[error("No hour has a positive labour percentage")]
    NoProfitableHour,

    /// A CSV source was missing or unreadable.
    #[error("Source file not found: {path}")]
    SourceNotFound {
        /// The path that could not be opened.
        path: String,
    },

    /// A CSV source was structurally broken.
    #[error("Failed to read source '{path}': {message}")]
    SourceParse {
        /// The source path, or a description of the reader.
        path: String,
        /// A description of the CSV error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

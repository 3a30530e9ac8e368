//! Error types for the puzzle framework

use thiserror::Error;

/// Error produced while parsing puzzle input
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input does not match the expected shape
    #[error("malformed input: {0}")]
    Malformed(String),
    /// Input ended before the expected shape was complete
    #[error("truncated input: {0}")]
    Truncated(String),
}

/// Error produced while solving a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part has no implementation
    #[error("part {0} is not implemented")]
    NotImplemented(u8),
    /// The requested part is outside 1..=PARTS
    #[error("part {0} is out of range")]
    OutOfRange(u8),
    /// The part ran but could not produce an answer
    #[error("solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any error as a solve failure
    pub fn failed(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        SolveError::Failed(err.into())
    }
}

/// Error produced when looking up or running a puzzle through the catalog
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// No puzzle registered for the given year and day
    #[error("no puzzle registered for {0} day {1}")]
    Unknown(u16, u8),
    /// Parsing the input failed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// Solving a part failed
    #[error("solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error produced while building the catalog
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Two puzzles claimed the same year-day slot
    #[error("duplicate puzzle registration for {0} day {1}")]
    Duplicate(u16, u8),
    /// The day is outside the advent calendar
    #[error("day {1} is outside 1..=25 (year {0})")]
    DayOutOfRange(u16, u8),
}

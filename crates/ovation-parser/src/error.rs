//! Error types for activity feed parsing.

use thiserror::Error;

/// The feed has no usable data section.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No `#` separates the header from the data.
    #[error("activity feed has no '#' delimiter before the data section")]
    MissingDelimiter,

    /// Nothing but whitespace follows the final `#`.
    #[error("activity feed data section is empty")]
    EmptyDataSection,

    /// Lines were found but none carried a single data field.
    #[error("activity feed data section has no data rows ({lines} lines, all empty)")]
    NoDataRows { lines: usize },
}

/// Result type for feed parsing.
pub type Result<T> = std::result::Result<T, ParseError>;

//! Catalog Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A catalog error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The title is empty once surrounding whitespace is removed.
    #[display("title is required")]
    EmptyTitle,
    /// The title is longer than the permitted maximum.
    #[display("title is longer than {_0} characters")]
    TitleTooLong(#[error(not(source))] usize),
    /// The notes are longer than the permitted maximum.
    #[display("notes are longer than {_0} characters")]
    NotesTooLong(#[error(not(source))] usize),
    /// A stored or user-supplied value could not be parsed.
    #[display("failed to parse field '{field}', found value: {value}")]
    ParseError {
        /// The field that failed to parse.
        field: &'static str,
        /// The offending value.
        value: String,
    },
}

impl ErrorKind {
    /// Returns `true` if the error should block a save and be shown inline
    /// next to the offending field.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyTitle | Self::TitleTooLong(_) | Self::NotesTooLong(_))
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Pure data, no I/O. Same input, same answer.
        false
    }
}

//! Lookup Error Types
//!
//! Provider failures are mostly swallowed inside the lookup service (try the
//! next provider). What escapes to callers is almost always [`NotFound`].
//!
//! [`NotFound`]: ErrorKind::NotFound

use derive_more::{Display, Error};

/// A lookup error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No provider produced usable data for the query
    #[display("no book found for '{_0}'")]
    NotFound(#[error(not(source))] String),
    /// Transport failure (DNS, TLS, timeout, connection reset) for a URL
    #[display("request to {_0} failed")]
    Network(#[error(not(source))] String),
    /// Server answered with a non-success status
    #[display("unexpected HTTP status {_0}")]
    Status(#[error(not(source))] u16),
    /// Response body did not match the expected shape
    #[display("could not decode response from {_0}")]
    Decode(#[error(not(source))] &'static str),
    /// HTTP client could not be constructed
    #[display("invalid HTTP client configuration")]
    ClientSetup,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status(status) => *status == 429 || *status >= 500,
            Self::NotFound(_) | Self::Decode(_) | Self::ClientSetup => false,
        }
    }
}

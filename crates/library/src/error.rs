//! Library Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction. Failures in other crates are raised
//! as a unit variant naming the subsystem, with the original error kept as a
//! child frame.

use bookshelf_catalog::error::{Error as CatalogError, ErrorKind as CatalogErrorKind};
use bookshelf_storage::error::{Error as StorageError, ErrorKind as StorageErrorKind};
use derive_more::{Display, Error};

/// A library error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classifies the origin of a library failure.
///
/// ### Operational Errors
/// - [`ErrorKind::Validation`] - show inline, block the save.
/// - [`ErrorKind::BlankName`]
/// - [`ErrorKind::NotFound`]
/// - [`ErrorKind::AlreadyExists`]
/// - [`ErrorKind::PermissionDenied`] - offer manual entry instead.
///
/// ### Dependency Errors
/// - [`ErrorKind::Storage`]
/// - [`ErrorKind::Lookup`]
/// - [`ErrorKind::Config`]
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// User input was rejected.
    #[display("invalid input: {_0}")]
    Validation(CatalogErrorKind),
    /// A tag or location name was blank.
    #[display("name must not be blank")]
    BlankName,
    /// The record being edited no longer exists.
    #[display("record not found: {_0}")]
    NotFound(#[error(not(source))] String),
    /// A record with this id is already stored.
    #[display("record already exists: {_0}")]
    AlreadyExists(#[error(not(source))] String),
    /// Camera access was refused.
    #[display("camera permission denied")]
    PermissionDenied,
    /// A record store operation failed.
    Storage,
    /// No metadata could be found.
    Lookup,
    /// Services could not be built from the configuration.
    Config,
}
impl ErrorKind {
    /// Convert a catalog validation error into a library error, preserving
    /// the catalog crate's `Exn` frame as a child in its own error tree.
    #[track_caller]
    pub fn validation(err: CatalogError) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::Validation(inner))
    }

    /// Convert a store error into a library error. Missing and duplicate
    /// records keep their meaning; anything else is a [`Storage`](Self::Storage)
    /// failure. The store's `Exn` frame is kept as a child.
    #[track_caller]
    pub fn storage(err: StorageError) -> Error {
        let kind = match &*err {
            StorageErrorKind::NotFound(id) => ErrorKind::NotFound(id.clone()),
            StorageErrorKind::AlreadyExists(id) => ErrorKind::AlreadyExists(id.clone()),
            StorageErrorKind::BackendError(_) => ErrorKind::Storage,
        };
        err.raise(kind)
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage)
    }
}

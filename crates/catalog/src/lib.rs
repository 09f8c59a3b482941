//! Book records and the pure logic that runs over an in-memory collection of
//! them: filtering, sorting and duplicate detection.
//!
//! Nothing in this crate performs I/O. Collections come from whatever storage
//! the caller uses, and every function here takes them by reference.

mod consts;
pub mod duplicate;
pub mod error;
pub mod filter;
pub mod form;
pub mod isbn;
pub mod models;
pub mod sort;

pub use crate::consts::{MAX_NOTES_LENGTH, MAX_TITLE_LENGTH, UNKNOWN_AUTHOR, UNKNOWN_LOCATION};
pub use crate::duplicate::find_duplicate;
pub use crate::filter::{available_genres, available_tags, matches, select};
pub use crate::form::{BookForm, LocationChoice};
pub use crate::sort::{SortDirection, SortKey, sort};

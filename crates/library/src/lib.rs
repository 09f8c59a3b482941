//! Library workflows for bookshelf.
//!
//! [`Library`] owns the record stores and implements the add, edit and
//! delete workflows on top of them. [`LibraryView`] and [`SearchView`] turn a
//! snapshot of the collection into what the screens display, and
//! [`ScanSession`] and [`Services`] handle barcode scanning and metadata
//! lookup.

pub mod error;
mod library;
mod locations;
mod scan;
mod search;
mod services;
mod settings;
mod tags;
mod view;

pub use crate::library::{AddOutcome, Library};
pub use crate::scan::{CameraPermission, ScanSession};
pub use crate::search::SearchBox;
pub use crate::services::Services;
pub use crate::view::{LibraryView, SearchView};

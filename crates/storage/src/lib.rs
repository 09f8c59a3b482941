//! Record storage for bookshelf.
//!
//! The [`Store`] trait is the only thing the rest of the workspace knows
//! about persistence. It offers whole-record operations per record type and
//! promises nothing about ordering.

pub mod error;
mod record;
mod settings;
pub mod store;

use std::sync::Arc;

pub use crate::record::Record;
pub use crate::settings::{load_settings, save_settings};
pub use crate::store::Store;

/// Shared handle to a store of `T`.
pub type StoreHandle<T> = Arc<dyn Store<T>>;

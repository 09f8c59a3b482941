//! Record store trait and implementations.
//!
//! The application persists four kinds of record (books, locations, tags and
//! the settings singleton). Where they actually live is somebody else's
//! problem: this module only defines the interface the rest of the workspace
//! talks to.

#[cfg(any(test, feature = "mock"))]
mod memory;

#[cfg(any(test, feature = "mock"))]
pub use self::memory::MemoryStore;
use crate::Record;
use crate::error::Result;
use async_trait::async_trait;

/// Unified interface for record storage.
///
/// One store per record type. It's a glorified CRUD interface, but in ✨Rust✨
///
/// # Ordering
/// [`list_all()`](Self::list_all) makes no promise about order. Callers that
/// display records sort them explicitly.
///
/// # Examples
///
/// ```
/// use bookshelf_catalog::models::Book;
/// use bookshelf_storage::{Store, error::Result};
///
/// async fn favourite_count(store: &dyn Store<Book>) -> Result<usize> {
///     let books = store.list_all().await?;
///     Ok(books.iter().filter(|book| book.is_favorite).count())
/// }
/// ```
#[async_trait]
pub trait Store<T: Record>: Send + Sync {
    /// Name of the store, used for logging only.
    fn name(&self) -> &str;

    /// Every record of this type, in no particular order.
    async fn list_all(&self) -> Result<Vec<T>>;

    /// Fetch a single record.
    ///
    /// Default implementation scans [`list_all()`](Self::list_all).
    async fn get(&self, id: &T::Id) -> Result<Option<T>> {
        Ok(self.list_all().await?.into_iter().find(|record| &record.id() == id))
    }

    /// Add a new record.
    ///
    /// Returns [`AlreadyExists`](crate::error::ErrorKind::AlreadyExists) if a
    /// record with the same id is already stored.
    async fn insert(&self, record: T) -> Result<()>;

    /// Replace an existing record, matched by id.
    ///
    /// Returns [`NotFound`](crate::error::ErrorKind::NotFound) if there is
    /// nothing to replace.
    async fn update(&self, record: T) -> Result<()>;

    /// Remove a record.
    ///
    /// Returns [`NotFound`](crate::error::ErrorKind::NotFound) if the record
    /// does not exist.
    async fn delete(&self, id: &T::Id) -> Result<()>;
}

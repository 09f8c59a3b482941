//! The [`Library`] handle and book workflows.

use std::sync::Mutex;

use bookshelf_catalog::models::{AppSettings, Book, PredefinedLocation, TagPalette, UserTag};
use bookshelf_catalog::{BookForm, find_duplicate};
use bookshelf_storage::StoreHandle;
use exn::OptionExt;
use uuid::Uuid;

use crate::error::{ErrorKind, Result};

/// What happened when a new book was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Stored.
    Saved(Book),
    /// Not stored: it looks like a book already in the library. Show
    /// `existing` to the user and call [`Library::confirm_add`] with
    /// `candidate` if they want it anyway.
    PossibleDuplicate { candidate: Book, existing: Book },
}

/// Entry point for everything that reads or changes the collection.
///
/// Holds one store per record type. All collection-level decisions
/// (duplicates, ordering, tag colours) are made here, never by the stores.
pub struct Library {
    pub(crate) books: StoreHandle<Book>,
    pub(crate) locations: StoreHandle<PredefinedLocation>,
    pub(crate) tags: StoreHandle<UserTag>,
    pub(crate) settings: StoreHandle<AppSettings>,
    /// Colour rotation for new tags, seeded from the tag count on first use.
    pub(crate) palette: Mutex<Option<TagPalette>>,
}

impl Library {
    pub fn new(
        books: StoreHandle<Book>,
        locations: StoreHandle<PredefinedLocation>,
        tags: StoreHandle<UserTag>,
        settings: StoreHandle<AppSettings>,
    ) -> Self {
        Self {
            books,
            locations,
            tags,
            settings,
            palette: Mutex::new(None),
        }
    }

    /// Every book, in no particular order.
    pub async fn books(&self) -> Result<Vec<Book>> {
        self.books.list_all().await.map_err(ErrorKind::storage)
    }

    pub async fn book(&self, id: Uuid) -> Result<Book> {
        self.books
            .get(&id)
            .await
            .map_err(ErrorKind::storage)?
            .ok_or_raise(|| ErrorKind::NotFound(id.to_string()))
    }

    /// Validates the form, checks for a likely duplicate, and saves.
    ///
    /// A possible duplicate is not an error: nothing is saved and the caller
    /// decides.
    #[tracing::instrument(level = "debug", skip_all, fields(title = %form.title))]
    pub async fn add_book(&self, form: BookForm) -> Result<AddOutcome> {
        let candidate = form.into_book().map_err(ErrorKind::validation)?;
        let existing = self.books().await?;
        if let Some(existing) = find_duplicate(&candidate.title, &candidate.authors, &existing) {
            tracing::info!(existing = %existing.id, "possible duplicate, awaiting confirmation");
            return Ok(AddOutcome::PossibleDuplicate {
                existing: existing.clone(),
                candidate,
            });
        }
        self.insert_book(candidate).await.map(AddOutcome::Saved)
    }

    /// Saves a book the user confirmed despite the duplicate warning.
    pub async fn confirm_add(&self, candidate: Book) -> Result<Book> {
        self.insert_book(candidate).await
    }

    async fn insert_book(&self, book: Book) -> Result<Book> {
        self.books.insert(book.clone()).await.map_err(ErrorKind::storage)?;
        tracing::info!(id = %book.id, title = %book.title, "book saved");
        Ok(book)
    }

    /// Applies an edit form to a stored book.
    #[tracing::instrument(level = "debug", skip(self, form))]
    pub async fn edit_book(&self, id: Uuid, form: &BookForm) -> Result<Book> {
        let mut book = self.book(id).await?;
        form.apply_to(&mut book).map_err(ErrorKind::validation)?;
        self.books.update(book.clone()).await.map_err(ErrorKind::storage)?;
        Ok(book)
    }

    pub async fn toggle_favorite(&self, id: Uuid) -> Result<Book> {
        let mut book = self.book(id).await?;
        book.toggle_favorite();
        self.books.update(book.clone()).await.map_err(ErrorKind::storage)?;
        Ok(book)
    }

    /// Permanently removes a book.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn delete_book(&self, id: Uuid) -> Result<()> {
        self.books.delete(&id).await.map_err(ErrorKind::storage)?;
        tracing::info!("book deleted");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use bookshelf_catalog::error::ErrorKind as CatalogErrorKind;
    use bookshelf_storage::Store;
    use bookshelf_storage::store::MemoryStore;
    use std::sync::Arc;

    pub(crate) struct Fixture {
        pub books: Arc<MemoryStore<Book>>,
        pub tags: Arc<MemoryStore<UserTag>>,
        pub library: Library,
    }

    pub(crate) fn fixture(books: impl IntoIterator<Item = Book>) -> Fixture {
        let books = Arc::new(MemoryStore::<Book>::with_records(books));
        let tags = Arc::new(MemoryStore::<UserTag>::default());
        let library = Library::new(
            books.clone(),
            Arc::new(MemoryStore::<PredefinedLocation>::default()),
            tags.clone(),
            Arc::new(MemoryStore::<AppSettings>::default()),
        );
        Fixture { books, tags, library }
    }

    fn form(title: &str, authors: &str) -> BookForm {
        BookForm {
            title: title.into(),
            authors: authors.into(),
            ..BookForm::default()
        }
    }

    #[tokio::test]
    async fn test_add_saves_new_book() {
        let fx = fixture([]);
        let AddOutcome::Saved(book) = fx.library.add_book(form("  Dune ", "Frank Herbert")).await.unwrap() else {
            panic!("expected the book to be saved");
        };
        assert_eq!(book.title, "Dune");
        assert_eq!(fx.books.list_all().await.unwrap(), [book]);
    }

    #[tokio::test]
    async fn test_add_detects_duplicate_then_confirm_saves() {
        let existing = Book::new("Dune", ["Frank Herbert"]);
        let fx = fixture([existing.clone()]);
        let outcome = fx.library.add_book(form(" dune ", "frank herbert, Someone Else")).await.unwrap();
        let AddOutcome::PossibleDuplicate { candidate, existing: found } = outcome else {
            panic!("expected a duplicate warning");
        };
        assert_eq!(found, existing);
        // Nothing saved yet.
        assert_eq!(fx.books.list_all().await.unwrap().len(), 1);
        fx.library.confirm_add(candidate).await.unwrap();
        assert_eq!(fx.books.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_add_rejects_blank_title() {
        let fx = fixture([]);
        let err = fx.library.add_book(form("   ", "Nobody")).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::Validation(CatalogErrorKind::EmptyTitle)));
        assert!(fx.books.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let fx = fixture([]);
        fx.books.set_unavailable(true);
        let err = fx.library.add_book(form("Dune", "Frank Herbert")).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::Storage));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_edit_book() {
        let book = Book::new("Dune", ["Frank Herbert"]);
        let fx = fixture([book.clone()]);
        let mut edit = BookForm::from_book(&book);
        edit.notes = "Signed".into();
        let edited = fx.library.edit_book(book.id, &edit).await.unwrap();
        assert_eq!(edited.notes.as_deref(), Some("Signed"));
        assert_eq!(fx.library.book(book.id).await.unwrap(), edited);
    }

    #[tokio::test]
    async fn test_edit_missing_book() {
        let fx = fixture([]);
        let err = fx.library.edit_book(Uuid::new_v4(), &form("Dune", "")).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotFound(_)));
    }

    #[tokio::test]
    async fn test_toggle_favorite_and_delete() {
        let book = Book::new("Dune", ["Frank Herbert"]);
        let fx = fixture([book.clone()]);
        assert!(fx.library.toggle_favorite(book.id).await.unwrap().is_favorite);
        assert!(!fx.library.toggle_favorite(book.id).await.unwrap().is_favorite);
        fx.library.delete_book(book.id).await.unwrap();
        assert!(fx.library.books().await.unwrap().is_empty());
        let err = fx.library.delete_book(book.id).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotFound(id) if *id == book.id.to_string()));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_missing_records_are_not_retryable() {
        let fx = fixture([]);
        let missing = Uuid::new_v4();
        for err in [
            fx.library.delete_book(missing).await.unwrap_err(),
            fx.library.toggle_favorite(missing).await.unwrap_err(),
            fx.library.delete_tag(missing).await.unwrap_err(),
            fx.library.delete_location(missing).await.unwrap_err(),
        ] {
            assert!(matches!(&*err, ErrorKind::NotFound(_)), "{err:?}");
            assert!(!err.is_retryable());
        }
    }

    #[tokio::test]
    async fn test_confirming_twice_is_not_retryable() {
        let fx = fixture([]);
        let book = Book::new("Dune", ["Frank Herbert"]);
        fx.library.confirm_add(book.clone()).await.unwrap();
        let err = fx.library.confirm_add(book).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::AlreadyExists(_)));
        assert!(!err.is_retryable());
    }
}

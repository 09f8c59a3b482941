//! Editable book fields, as typed into the add/edit screens.
//!
//! The form holds raw user input (authors as one comma-separated string,
//! blank strings for "not set") and knows how to validate it and turn it into
//! a [`Book`], or write it back onto an existing one.

use uuid::Uuid;

use crate::consts::{MAX_NOTES_LENGTH, MAX_TITLE_LENGTH};
use crate::error::{ErrorKind, Result};
use crate::models::{Book, BookLocation, Cover, PredefinedLocation};

/// Which kind of location the user picked.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LocationChoice {
    #[default]
    None,
    /// A saved location, possibly not chosen yet.
    Predefined(Option<Uuid>),
    /// Free text, possibly still empty.
    Custom(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    /// Comma-separated.
    pub authors: String,
    pub genre: String,
    pub isbn: String,
    pub notes: String,
    pub is_favorite: bool,
    pub location: LocationChoice,
    pub tags: Vec<String>,
    pub cover: Cover,
}
impl BookForm {
    /// Pre-fills a form for editing `book`.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            authors: book.authors.join(", "),
            genre: book.genre.clone().unwrap_or_default(),
            isbn: book.isbn.clone().unwrap_or_default(),
            notes: book.notes.clone().unwrap_or_default(),
            is_favorite: book.is_favorite,
            location: match &book.location {
                None => LocationChoice::None,
                Some(BookLocation::Predefined { id }) => LocationChoice::Predefined(Some(*id)),
                Some(BookLocation::Custom { text }) => LocationChoice::Custom(text.clone()),
            },
            tags: book.tags.clone(),
            cover: book.cover.clone(),
        }
    }

    /// Quick check used to enable the save button.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Full validation, run on save.
    pub fn validate(&self) -> Result<()> {
        let title = self.title.trim();
        exn::ensure!(!title.is_empty(), ErrorKind::EmptyTitle);
        exn::ensure!(title.chars().count() <= MAX_TITLE_LENGTH, ErrorKind::TitleTooLong(MAX_TITLE_LENGTH));
        exn::ensure!(self.notes.chars().count() <= MAX_NOTES_LENGTH, ErrorKind::NotesTooLong(MAX_NOTES_LENGTH));
        Ok(())
    }

    /// Authors split on commas, trimmed, blanks dropped.
    pub fn authors(&self) -> Vec<String> {
        self.authors
            .split(',')
            .map(str::trim)
            .filter(|author| !author.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The chosen location, or `None` if the choice is incomplete.
    pub fn location(&self) -> Option<BookLocation> {
        match &self.location {
            LocationChoice::None | LocationChoice::Predefined(None) => None,
            LocationChoice::Predefined(Some(id)) => Some(BookLocation::predefined(*id)),
            LocationChoice::Custom(text) if text.is_empty() => None,
            LocationChoice::Custom(text) => Some(BookLocation::custom(text)),
        }
    }

    /// Display text for the chosen location, if complete.
    pub fn location_display(&self, locations: &[PredefinedLocation]) -> Option<String> {
        self.location().map(|location| location.display_text(locations).to_string())
    }

    /// Validates and builds a brand new book.
    pub fn into_book(self) -> Result<Book> {
        self.validate()?;
        let mut book = Book::new(self.title.trim(), self.authors());
        self.write_fields(&mut book);
        Ok(book)
    }

    /// Validates and writes the form onto an existing book, keeping its id
    /// and date added.
    pub fn apply_to(&self, book: &mut Book) -> Result<()> {
        self.validate()?;
        book.title = self.title.trim().to_string();
        book.authors = self.authors();
        self.write_fields(book);
        book.touch();
        Ok(())
    }

    fn write_fields(&self, book: &mut Book) {
        book.genre = non_empty(&self.genre);
        book.isbn = non_empty(&self.isbn);
        book.notes = non_empty(&self.notes);
        book.is_favorite = self.is_favorite;
        book.location = self.location();
        book.tags = self.tags.clone();
        book.cover = self.cover.clone();
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

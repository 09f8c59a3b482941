use super::{BookLocation, Cover, PredefinedLocation, SyncStatus};
use crate::consts::UNKNOWN_AUTHOR;
use time::UtcDateTime;
use uuid::Uuid;

/// A book in the user's library. This is the primary entity in the system.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Book {
    pub id: Uuid,
    /// Required, but not length-limited at this level (see
    /// [`BookForm::validate`](crate::BookForm::validate)).
    pub title: String,
    /// In credit order. May be empty.
    pub authors: Vec<String>,
    /// Free text; usually one of [`Genre`](super::Genre).
    pub genre: Option<String>,
    /// Stored exactly as entered or looked up, never validated.
    pub isbn: Option<String>,
    pub cover: Cover,
    pub location: Option<BookLocation>,
    /// Names of [`UserTag`](super::UserTag)s, matched by value.
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub is_favorite: bool,
    pub date_added: UtcDateTime,
    pub last_modified: UtcDateTime,
    pub sync_status: SyncStatus,
}
impl AsRef<Book> for Book {
    fn as_ref(&self) -> &Book {
        self
    }
}
impl Book {
    pub fn new(title: impl Into<String>, authors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let now = UtcDateTime::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            authors: authors.into_iter().map(Into::into).collect(),
            genre: None,
            isbn: None,
            cover: Cover::None,
            location: None,
            tags: Vec::new(),
            notes: None,
            is_favorite: false,
            date_added: now,
            last_modified: now,
            sync_status: SyncStatus::default(),
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn with_cover(mut self, cover: Cover) -> Self {
        self.cover = cover;
        self
    }

    pub fn with_location(mut self, location: BookLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn with_date_added(mut self, date_added: UtcDateTime) -> Self {
        self.date_added = date_added;
        self
    }

    /// Authors joined for display, or [`UNKNOWN_AUTHOR`] when there are none.
    pub fn authors_display(&self) -> String {
        if self.authors.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            self.authors.join(", ")
        }
    }

    /// `false` when there are no authors, or the first one is blank.
    pub fn has_authors(&self) -> bool {
        self.authors.first().is_some_and(|author| !author.is_empty())
    }

    /// Display text for the book's location, `None` if it has none.
    pub fn location_display<'a>(&'a self, locations: &'a [PredefinedLocation]) -> Option<&'a str> {
        self.location.as_ref().map(|location| location.display_text(locations))
    }

    /// Marks the book as modified now.
    pub fn touch(&mut self) {
        self.last_modified = UtcDateTime::now();
    }

    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
        self.touch();
    }
}

//! Collection ordering.
//!
//! Every key is turned into a [`SortValue`] once per book, then the slice is
//! stable-sorted on it ascending. Descending is the ascending result reversed,
//! never a flipped comparator: for keys with lots of ties (favourites, books
//! added in the same batch) the two directions are exact mirror images.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::{Error, ErrorKind};
use crate::models::{Book, PredefinedLocation, sanitize};
use time::UtcDateTime;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// What to order the library by.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SortKey {
    #[default]
    DateAdded,
    Title,
    /// First author only.
    Author,
    Genre,
    /// Resolved location display text.
    Location,
    Favorites,
}
impl SortKey {
    pub const ALL: [SortKey; 6] = [
        Self::DateAdded,
        Self::Title,
        Self::Author,
        Self::Genre,
        Self::Location,
        Self::Favorites,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateAdded => "Date Added",
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Genre => "Genre",
            Self::Location => "Location",
            Self::Favorites => "Favorites",
        }
    }
}
impl FromStr for SortKey {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "dateadded" | "date" | "added" => Self::DateAdded,
            "title" => Self::Title,
            "author" => Self::Author,
            "genre" => Self::Genre,
            "location" => Self::Location,
            "favorites" | "favourites" | "favorite" => Self::Favorites,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "sort_key",
                value: s.to_string(),
            }),
        })
    }
}
impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    Ascending,
    /// Newest first when sorting by [`SortKey::DateAdded`].
    #[default]
    Descending,
}
impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}
impl FromStr for SortDirection {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "ascending" | "asc" => Self::Ascending,
            "descending" | "desc" => Self::Descending,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "sort_direction",
                value: s.to_string(),
            }),
        })
    }
}
impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Precomputed, comparable key for one book.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Timestamp(UtcDateTime),
    Text(String),
    /// `false` sorts first, so favourites are stored inverted.
    Flag(bool),
}
impl SortValue {
    fn of(book: &Book, key: SortKey, locations: &[PredefinedLocation]) -> Self {
        match key {
            SortKey::DateAdded => Self::Timestamp(book.date_added),
            SortKey::Title => Self::Text(fold(&book.title)),
            SortKey::Author => Self::Text(fold(book.authors.first().map(String::as_str).unwrap_or_default())),
            SortKey::Genre => Self::Text(fold(book.genre.as_deref().unwrap_or_default())),
            SortKey::Location => Self::Text(fold(book.location_display(locations).unwrap_or_default())),
            SortKey::Favorites => Self::Flag(!book.is_favorite),
        }
    }
}

/// Collation key: compatibility-decomposed, accents dropped, lowercased.
/// "Émile" sorts with the E's, not after "Z".
fn fold(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect::<String>().to_lowercase()
}

/// Case- and accent-insensitive string comparison, as used for every text
/// sort key.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b))
}

/// Orders `books` by `key` in `direction`.
///
/// Accepts owned books or references (anything that borrows as a [`Book`]),
/// so a filtered `Vec<&Book>` can be sorted without cloning. Missing authors,
/// genres and locations sort as empty strings, ahead of everything else when
/// ascending.
pub fn sort<B: Borrow<Book>>(
    mut books: Vec<B>,
    key: SortKey,
    direction: SortDirection,
    locations: &[PredefinedLocation],
) -> Vec<B> {
    books.sort_by_cached_key(|book| SortValue::of(book.borrow(), key, locations));
    if direction == SortDirection::Descending {
        books.reverse();
    }
    books
}

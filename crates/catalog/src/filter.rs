//! Filter engine.
//!
//! A single predicate, [`matches`], decides whether a book passes a
//! [`FilterState`]. Both the search screen (search text only) and the library
//! screen (stored structured filters plus the live search text) go through it.

use std::collections::BTreeSet;

use crate::models::{Book, FilterState, PredefinedLocation};
use crate::sort::collate;

/// Returns `true` if `book` passes every active criterion in `filter`.
///
/// Criteria are checked in order and the first failure rejects the book:
///
/// 1. **Search text** (if non-blank after trimming) must appear,
///    case-insensitively, in the title, any author, the notes, or any tag
///    name; or appear verbatim in the ISBN.
/// 2. **Genres**: the book's genre must be one of them.
/// 3. **Locations**: the book must sit in one of the selected predefined
///    locations. Custom text locations never match.
/// 4. **Tags**: the book must carry at least one of them.
/// 5. **Favourites only**: the book must be a favourite.
///
/// Structured comparisons are exact. `locations` is accepted so every
/// collection-level operation shares one signature; no criterion currently
/// needs to resolve location names.
pub fn matches(book: &Book, _locations: &[PredefinedLocation], filter: &FilterState) -> bool {
    if filter.has_search_query() && !matches_search(book, &filter.search_query) {
        return false;
    }
    if !filter.genres.is_empty() && !book.genre.as_ref().is_some_and(|genre| filter.genres.contains(genre)) {
        return false;
    }
    if !filter.location_ids.is_empty()
        && !book
            .location
            .as_ref()
            .and_then(|location| location.predefined_id())
            .is_some_and(|id| filter.location_ids.contains(&id))
    {
        return false;
    }
    if !filter.tag_names.is_empty() && !book.tags.iter().any(|tag| filter.tag_names.contains(tag)) {
        return false;
    }
    if filter.favorites_only && !book.is_favorite {
        return false;
    }
    true
}

fn matches_search(book: &Book, query: &str) -> bool {
    let raw = query.trim();
    let query = raw.to_lowercase();
    let contains = |text: &str| text.to_lowercase().contains(&query);
    contains(&book.title)
        || book.authors.iter().any(|author| contains(author))
        || book.notes.as_deref().is_some_and(contains)
        || book.tags.iter().any(|tag| contains(tag))
        // ISBNs are digits (and the odd 'X'); compare them as typed, so "957X"
        // matches "080442957X" but "957x" does not.
        || book.isbn.as_deref().is_some_and(|isbn| isbn.contains(raw))
}

/// Returns the books in `books` that pass `filter`, in their original order.
pub fn select<'a>(
    books: impl IntoIterator<Item = &'a Book>,
    locations: &[PredefinedLocation],
    filter: &FilterState,
) -> Vec<&'a Book> {
    books.into_iter().filter(|book| matches(book, locations, filter)).collect()
}

/// Distinct genres present in the collection, sorted case-insensitively.
///
/// Feeds the genre section of the filter sheet: only genres that would
/// actually match something are offered.
pub fn available_genres<'a>(books: impl IntoIterator<Item = &'a Book>) -> Vec<String> {
    sorted_distinct(books.into_iter().filter_map(|book| book.genre.as_deref()))
}

/// Distinct tag names present on books in the collection, sorted
/// case-insensitively. Tags that exist but are on no book are left out.
pub fn available_tags<'a>(books: impl IntoIterator<Item = &'a Book>) -> Vec<String> {
    sorted_distinct(books.into_iter().flat_map(|book| book.tags.iter().map(String::as_str)))
}

fn sorted_distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let unique: BTreeSet<&str> = values.collect();
    let mut values: Vec<String> = unique.into_iter().map(str::to_string).collect();
    values.sort_by(|a, b| collate(a, b));
    values
}

//! What the library and search screens show.
//!
//! Both views are pure over a snapshot of the collection: the caller passes
//! the books and locations it holds and gets back references in display
//! order. Storage order is never relied on.

use bookshelf_catalog::models::{AppSettings, Book, FilterState, PredefinedLocation};
use bookshelf_catalog::{SortDirection, SortKey, available_genres, available_tags, select, sort};
use bookshelf_config::SearchConfig;

use crate::search::SearchBox;

/// The main library screen: stored filters, the live search box and the
/// persisted sort order.
pub struct LibraryView {
    filter: FilterState,
    sort_key: SortKey,
    sort_direction: SortDirection,
    search: SearchBox,
}

impl LibraryView {
    pub fn new(settings: &AppSettings, config: &SearchConfig) -> Self {
        Self {
            filter: FilterState::default(),
            sort_key: settings.sort_key,
            sort_direction: settings.sort_direction,
            search: SearchBox::new(config),
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Structured filters, edited by the filter sheet.
    pub fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    pub fn search(&self) -> &SearchBox {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchBox {
        &mut self.search
    }

    pub fn sort_order(&self) -> (SortKey, SortDirection) {
        (self.sort_key, self.sort_direction)
    }

    /// Changes the order locally. Persist it with
    /// [`Library::set_sort`](crate::Library::set_sort).
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
    }

    /// The stored filters with the committed search text applied on top.
    pub fn effective_filter(&self) -> FilterState {
        self.filter.with_search(self.search.query())
    }

    /// Books to display, filtered then sorted.
    pub fn visible<'a>(&self, books: &'a [Book], locations: &[PredefinedLocation]) -> Vec<&'a Book> {
        let selected = select(books, locations, &self.effective_filter());
        sort(selected, self.sort_key, self.sort_direction, locations)
    }

    /// Genres offered by the filter sheet.
    pub fn genres(&self, books: &[Book]) -> Vec<String> {
        available_genres(books)
    }

    /// Tag names offered by the filter sheet.
    pub fn tags(&self, books: &[Book]) -> Vec<String> {
        available_tags(books)
    }
}

/// The search screen: free text only, results by title.
pub struct SearchView {
    search: SearchBox,
}

impl SearchView {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            search: SearchBox::new(config),
        }
    }

    pub fn search(&self) -> &SearchBox {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchBox {
        &mut self.search
    }

    /// Matching books by title. Nothing is shown until a query is committed.
    pub fn results<'a>(&self, books: &'a [Book], locations: &[PredefinedLocation]) -> Vec<&'a Book> {
        let filter = FilterState::search(self.search.query());
        if !filter.has_search_query() {
            return Vec::new();
        }
        sort(select(books, locations, &filter), SortKey::Title, SortDirection::Ascending, locations)
    }
}

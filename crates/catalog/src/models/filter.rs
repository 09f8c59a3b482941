use std::collections::HashSet;
use uuid::Uuid;

/// Current filter selection for the library.
///
/// The structured filters (genres, locations, tags, favourites) and the free
/// text search are deliberately counted separately: a search alone does not
/// make the filter "active" (no badge, no "clear filters" button).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub genres: HashSet<String>,
    pub location_ids: HashSet<Uuid>,
    pub tag_names: HashSet<String>,
    pub favorites_only: bool,
    pub search_query: String,
}
impl FilterState {
    /// A state that only searches, with no structured filters.
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if any structured filter is set. Ignores the search query.
    pub fn has_active_filters(&self) -> bool {
        !self.genres.is_empty() || !self.location_ids.is_empty() || !self.tag_names.is_empty() || self.favorites_only
    }

    /// Number of selected structured filter values. Ignores the search query.
    pub fn active_filter_count(&self) -> usize {
        self.genres.len() + self.location_ids.len() + self.tag_names.len() + usize::from(self.favorites_only)
    }

    pub fn has_search_query(&self) -> bool {
        !self.search_query.trim().is_empty()
    }

    /// Clears the structured filters, keeping the search query.
    pub fn clear(&mut self) {
        self.genres.clear();
        self.location_ids.clear();
        self.tag_names.clear();
        self.favorites_only = false;
    }

    /// Clears everything, including the search query.
    pub fn clear_all(&mut self) {
        self.clear();
        self.search_query.clear();
    }

    pub fn toggle_genre(&mut self, genre: impl Into<String>) {
        toggle(&mut self.genres, genre.into());
    }

    pub fn toggle_location(&mut self, location_id: Uuid) {
        toggle(&mut self.location_ids, location_id);
    }

    pub fn toggle_tag(&mut self, tag_name: impl Into<String>) {
        toggle(&mut self.tag_names, tag_name.into());
    }

    /// A copy of this state with `query` as the search text.
    ///
    /// The library view uses this to combine its stored filters with the
    /// live search box without writing the search back into storage.
    pub fn with_search(&self, query: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            ..self.clone()
        }
    }
}

fn toggle<T: std::hash::Hash + Eq>(set: &mut HashSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let state = FilterState::default();
        assert!(!state.has_active_filters());
        assert_eq!(state.active_filter_count(), 0);
        assert!(!state.has_search_query());
    }

    #[test]
    fn test_search_only_is_not_active() {
        let state = FilterState::search("dune");
        assert!(!state.has_active_filters());
        assert_eq!(state.active_filter_count(), 0);
        assert!(state.has_search_query());
    }

    #[test]
    fn test_whitespace_search_is_not_a_query() {
        assert!(!FilterState::search("  \n\t ").has_search_query());
    }

    #[test]
    fn test_active_filter_count() {
        let mut state = FilterState::default();
        state.toggle_genre("Fiction");
        state.toggle_genre("Mystery");
        state.toggle_location(Uuid::new_v4());
        state.toggle_tag("Signed");
        state.favorites_only = true;
        assert!(state.has_active_filters());
        assert_eq!(state.active_filter_count(), 5);
    }

    #[test]
    fn test_toggles_add_then_remove() {
        let mut state = FilterState::default();
        let id = Uuid::new_v4();
        state.toggle_genre("Fiction");
        state.toggle_location(id);
        state.toggle_tag("Signed");
        assert!(state.genres.contains("Fiction"));
        assert!(state.location_ids.contains(&id));
        assert!(state.tag_names.contains("Signed"));
        state.toggle_genre("Fiction");
        state.toggle_location(id);
        state.toggle_tag("Signed");
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_clear_keeps_search() {
        let mut state = FilterState::search("herbert");
        state.toggle_genre("Fiction");
        state.favorites_only = true;
        state.clear();
        assert!(!state.has_active_filters());
        assert_eq!(state.search_query, "herbert");
        state.clear_all();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_with_search_leaves_original_untouched() {
        let mut stored = FilterState::default();
        stored.toggle_tag("Signed");
        let merged = stored.with_search("dune");
        assert_eq!(merged.search_query, "dune");
        assert!(merged.tag_names.contains("Signed"));
        assert!(stored.search_query.is_empty());
    }
}

//! Duplicate detection when adding a book.
//!
//! This is a heuristic to catch "I already own this", not a uniqueness
//! constraint. The caller shows the match and lets the user save anyway.

use std::collections::HashSet;

use crate::models::Book;

fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

fn author_set<'a>(authors: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
    authors.into_iter().map(str::to_lowercase).collect()
}

/// Finds an existing book that looks like the candidate.
///
/// A book matches when its title equals the candidate title (ignoring case
/// and surrounding whitespace) **and** it shares at least one author with the
/// candidate (ignoring case). Author lists need not be identical. A candidate
/// without authors therefore never matches.
///
/// Returns the first match in iteration order.
///
/// # Examples
///
/// ```
/// use bookshelf_catalog::find_duplicate;
/// use bookshelf_catalog::models::Book;
///
/// let library = vec![Book::new("Dune", ["Frank Herbert"])];
/// assert!(find_duplicate(" dune ", &["frank herbert", "X"], &library).is_some());
/// assert!(find_duplicate("Dune", &["Brian Herbert"], &library).is_none());
/// ```
#[tracing::instrument(level = "debug", skip(authors, existing))]
pub fn find_duplicate<'a, S: AsRef<str>>(
    title: &str,
    authors: &[S],
    existing: impl IntoIterator<Item = &'a Book>,
) -> Option<&'a Book> {
    let title = normalize_title(title);
    let authors = author_set(authors.iter().map(AsRef::as_ref));
    existing.into_iter().find(|book| {
        normalize_title(&book.title) == title
            && !author_set(book.authors.iter().map(String::as_str)).is_disjoint(&authors)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn library() -> Vec<Book> {
        vec![
            Book::new("Emma", ["Jane Austen"]),
            Book::new("Dune", ["Frank Herbert"]),
            Book::new("Good Omens", ["Terry Pratchett", "Neil Gaiman"]),
        ]
    }

    #[rstest]
    #[case(" dune ", &["frank herbert", "X"])]
    #[case("DUNE", &["FRANK HERBERT"])]
    #[case("Good Omens", &["neil gaiman"])]
    fn test_detected(library: Vec<Book>, #[case] title: &str, #[case] authors: &[&str]) {
        let found = find_duplicate(title, authors, &library).expect("duplicate");
        assert_eq!(normalize_title(&found.title), normalize_title(title));
    }

    #[rstest]
    #[case::no_author_overlap("Dune", &["Brian Herbert"])]
    #[case::different_title("Dune Messiah", &["Frank Herbert"])]
    #[case::no_authors("Dune", &[])]
    fn test_not_detected(library: Vec<Book>, #[case] title: &str, #[case] authors: &[&str]) {
        assert!(find_duplicate(title, authors, &library).is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let library = vec![
            Book::new("Dune", ["Frank Herbert"]).with_notes("hardback"),
            Book::new("Dune", ["Frank Herbert"]).with_notes("paperback"),
        ];
        let found = find_duplicate("Dune", &["Frank Herbert"], &library).unwrap();
        assert_eq!(found.notes.as_deref(), Some("hardback"));
    }
}

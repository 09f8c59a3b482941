use std::fmt::{Display, Formatter, Result as FmtResult};

use bookshelf_catalog::BookForm;
use bookshelf_catalog::models::{Cover, Genre};

/// Which remote service a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    OpenLibrary,
    GoogleBooks,
}
impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenLibrary => "Open Library",
            Self::GoogleBooks => "Google Books",
        }
    }
}
impl Display for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Book metadata found by a lookup. Every field comes from one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub title: String,
    pub authors: Vec<String>,
    pub genre: Option<Genre>,
    pub cover_url: Option<String>,
    /// Cover bytes, when the pre-fetch succeeded.
    pub cover_data: Option<Vec<u8>>,
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub provider: Provider,
}
impl LookupResult {
    /// Downloaded bytes if we have them, otherwise the URL.
    pub fn cover(&self) -> Cover {
        Cover::from_parts(self.cover_data.clone(), self.cover_url.clone())
    }

    /// Copies what was found into an add-book form. Fields the lookup knows
    /// nothing about (and anything the user already typed for them) are left
    /// alone.
    pub fn prefill(&self, form: &mut BookForm) {
        form.title = self.title.clone();
        form.authors = self.authors.join(", ");
        if let Some(genre) = self.genre {
            form.genre = genre.to_string();
        }
        if let Some(isbn) = &self.isbn {
            form.isbn = isbn.clone();
        }
        let cover = self.cover();
        if !cover.is_none() {
            form.cover = cover;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> LookupResult {
        LookupResult {
            title: "Dune".into(),
            authors: vec!["Frank Herbert".into(), "Someone Else".into()],
            genre: Some(Genre::ScienceFiction),
            cover_url: Some("https://covers.test/dune.jpg".into()),
            cover_data: None,
            isbn: Some("9780441013593".into()),
            description: None,
            provider: Provider::OpenLibrary,
        }
    }

    #[test]
    fn test_prefill() {
        let mut form = BookForm {
            notes: "from a charity shop".into(),
            ..BookForm::default()
        };
        dune().prefill(&mut form);
        assert_eq!(form.title, "Dune");
        assert_eq!(form.authors, "Frank Herbert, Someone Else");
        assert_eq!(form.genre, "Science Fiction");
        assert_eq!(form.isbn, "9780441013593");
        assert_eq!(form.cover, Cover::url("https://covers.test/dune.jpg"));
        assert_eq!(form.notes, "from a charity shop");
    }

    #[test]
    fn test_prefill_keeps_typed_values_for_unknown_fields() {
        let mut form = BookForm {
            genre: "Classics".into(),
            isbn: "0441013597".into(),
            ..BookForm::default()
        };
        let result = LookupResult {
            genre: None,
            isbn: None,
            cover_url: None,
            ..dune()
        };
        result.prefill(&mut form);
        assert_eq!(form.genre, "Classics");
        assert_eq!(form.isbn, "0441013597");
        assert!(form.cover.is_none());
    }

    #[test]
    fn test_cover_prefers_bytes() {
        let result = LookupResult {
            cover_data: Some(vec![0xFF, 0xD8]),
            ..dune()
        };
        assert_eq!(result.cover(), Cover::fetched(vec![0xFF, 0xD8], "https://covers.test/dune.jpg"));
    }
}

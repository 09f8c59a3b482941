use std::collections::HashMap;

use bookshelf_config::LookupConfig;
use serde::Deserialize;

use super::{decode, present};
use crate::error::Result;
use crate::genre::map_category;
use crate::http::HttpClient;
use crate::result::{LookupResult, Provider};

/// `jscmd=data` response: editions keyed by `ISBN:<isbn>`.
type BooksResponse = HashMap<String, Edition>;

#[derive(Debug, Deserialize)]
struct Edition {
    title: Option<String>,
    authors: Option<Vec<Named>>,
    subjects: Option<Vec<Named>>,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: Option<String>,
}

fn names(entries: Option<Vec<Named>>) -> impl Iterator<Item = String> {
    entries.into_iter().flatten().filter_map(|entry| present(entry.name))
}

/// Open Library's Books API. ISBN lookups only.
#[derive(Debug, Clone)]
pub struct OpenLibrary {
    base_url: String,
    covers_url: String,
}
impl OpenLibrary {
    pub fn new(config: &LookupConfig) -> Self {
        Self {
            base_url: config.open_library_url.trim_end_matches('/').to_string(),
            covers_url: config.open_library_covers_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn isbn_url(&self, isbn: &str) -> String {
        format!("{}/api/books?bibkeys=ISBN:{isbn}&format=json&jscmd=data", self.base_url)
    }

    /// Large cover from the covers API. Always built from the ISBN; the
    /// Books API's own cover links are smaller.
    pub fn cover_url(&self, isbn: &str) -> String {
        format!("{}/b/isbn/{isbn}-L.jpg", self.covers_url)
    }

    /// Looks up a normalised ISBN. `Ok(None)` means the provider answered but
    /// had nothing usable.
    pub async fn lookup_isbn(&self, http: &dyn HttpClient, isbn: &str) -> Result<Option<LookupResult>> {
        let body = http.get(&self.isbn_url(isbn)).await?.into_success_body()?;
        self.parse(isbn, &body)
    }

    fn parse(&self, isbn: &str, body: &[u8]) -> Result<Option<LookupResult>> {
        let mut response: BooksResponse = decode(Provider::OpenLibrary, body)?;
        let Some(edition) = response.remove(&format!("ISBN:{isbn}")) else {
            return Ok(None);
        };
        let Some(title) = present(edition.title) else {
            return Ok(None);
        };
        let first_subject = names(edition.subjects).next();
        Ok(Some(LookupResult {
            title,
            authors: names(edition.authors).collect(),
            genre: map_category(first_subject.as_deref()),
            cover_url: Some(self.cover_url(isbn)),
            cover_data: None,
            isbn: Some(isbn.to_string()),
            description: None,
            provider: Provider::OpenLibrary,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use bookshelf_catalog::models::Genre;

    const DUNE: &str = r#"{
        "ISBN:9780441013593": {
            "title": "Dune",
            "authors": [{"name": "Frank Herbert", "url": "https://openlibrary.org/authors/OL79034A"}],
            "subjects": [{"name": "Science fiction"}, {"name": "Deserts"}],
            "cover": {"small": "https://covers.openlibrary.org/b/id/1-S.jpg"}
        }
    }"#;

    fn provider() -> OpenLibrary {
        OpenLibrary::new(&LookupConfig::default())
    }

    #[test]
    fn test_urls() {
        let provider = provider();
        assert_eq!(
            provider.isbn_url("9780441013593"),
            "https://openlibrary.org/api/books?bibkeys=ISBN:9780441013593&format=json&jscmd=data"
        );
        assert_eq!(provider.cover_url("9780441013593"), "https://covers.openlibrary.org/b/isbn/9780441013593-L.jpg");
    }

    #[test]
    fn test_parse() {
        let result = provider().parse("9780441013593", DUNE.as_bytes()).unwrap().unwrap();
        assert_eq!(result.title, "Dune");
        assert_eq!(result.authors, ["Frank Herbert"]);
        // "Science fiction" hits the "fiction" row first.
        assert_eq!(result.genre, Some(Genre::Fiction));
        assert_eq!(result.cover_url.as_deref(), Some("https://covers.openlibrary.org/b/isbn/9780441013593-L.jpg"));
        assert_eq!(result.isbn.as_deref(), Some("9780441013593"));
        assert_eq!(result.provider, Provider::OpenLibrary);
    }

    #[test]
    fn test_parse_tolerates_nulls() {
        let body = r#"{"ISBN:123": {"title": "Untitled", "authors": null, "subjects": [{"name": null}]}}"#;
        let result = provider().parse("123", body.as_bytes()).unwrap().unwrap();
        assert!(result.authors.is_empty());
        assert_eq!(result.genre, None);
    }

    #[test]
    fn test_parse_nothing_usable() {
        assert_eq!(provider().parse("123", b"{}").unwrap(), None);
        let blank_title = r#"{"ISBN:123": {"title": "  "}}"#;
        assert_eq!(provider().parse("123", blank_title.as_bytes()).unwrap(), None);
        let other_key = r#"{"ISBN:456": {"title": "Wrong"}}"#;
        assert_eq!(provider().parse("123", other_key.as_bytes()).unwrap(), None);
    }

    #[test]
    fn test_parse_garbage() {
        let err = provider().parse("123", b"<html>").unwrap_err();
        assert_eq!(*err, ErrorKind::Decode("Open Library"));
    }
}

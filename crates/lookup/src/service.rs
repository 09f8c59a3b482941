//! ISBN and title lookups with provider fallback and an in-memory TTL cache.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use bookshelf_catalog::isbn;
use bookshelf_config::LookupConfig;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::{ErrorKind, Result};
use crate::http::HttpClient;
use crate::providers::{GoogleBooks, OpenLibrary};
use crate::result::{LookupResult, Provider};

struct CachedResult {
    result: LookupResult,
    stored_at: Instant,
}

/// Looks up book metadata, Open Library first, then Google Books.
///
/// Successful ISBN lookups are cached by normalised ISBN. Entries are never
/// evicted; an expired one is simply ignored and overwritten by the next
/// successful lookup.
pub struct MetadataService {
    http: Arc<dyn HttpClient>,
    open_library: OpenLibrary,
    google: GoogleBooks,
    ttl: Duration,
    cache: Mutex<HashMap<String, CachedResult>>,
}

impl MetadataService {
    pub fn new(http: Arc<dyn HttpClient>, config: &LookupConfig) -> Self {
        Self {
            http,
            open_library: OpenLibrary::new(config),
            google: GoogleBooks::new(config),
            ttl: config.cache_ttl(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Finds a book by ISBN.
    ///
    /// The ISBN may contain hyphens, spaces or anything else; only digits and
    /// `X` are kept. Provider failures fall through to the next provider, and
    /// only when both come up empty is [`NotFound`](ErrorKind::NotFound)
    /// returned. The result is whatever the first successful provider said,
    /// never a mix of the two.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn lookup_by_isbn(&self, isbn: &str) -> Result<LookupResult> {
        let isbn = isbn::normalize(isbn);
        exn::ensure!(!isbn.is_empty(), ErrorKind::NotFound(isbn));
        if let Some(result) = self.cached(&isbn).await {
            tracing::debug!(isbn = %isbn, "lookup cache hit");
            return Ok(result);
        }
        tracing::debug!(isbn = %isbn, "lookup cache miss");

        let from_open_library = self.attempt(Provider::OpenLibrary, self.open_library.lookup_isbn(&*self.http, &isbn)).await;
        let found = match from_open_library {
            Some(result) => Some(result),
            None => self.attempt(Provider::GoogleBooks, self.google.lookup_isbn(&*self.http, &isbn)).await,
        };
        let Some(mut result) = found else {
            tracing::info!(isbn = %isbn, "no provider found the book");
            exn::bail!(ErrorKind::NotFound(isbn));
        };

        self.prefetch_cover(&mut result).await;
        tracing::info!(isbn = %isbn, provider = %result.provider, title = %result.title, "book found");
        self.cache.lock().await.insert(
            isbn,
            CachedResult {
                result: result.clone(),
                stored_at: Instant::now(),
            },
        );
        Ok(result)
    }

    /// Searches Google Books by title and optional author.
    ///
    /// One attempt, uncached, and no cover pre-fetch. Any failure is reported
    /// as [`NotFound`](ErrorKind::NotFound) with the provider error attached.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn search_by_title_author(&self, title: &str, author: Option<&str>) -> Result<LookupResult> {
        let not_found = || ErrorKind::NotFound(title.to_string());
        match self.google.search(&*self.http, title, author).await {
            Ok(Some(result)) => Ok(result),
            Ok(None) => exn::bail!(not_found()),
            Err(err) => Err(err.raise(not_found())),
        }
    }

    async fn cached(&self, isbn: &str) -> Option<LookupResult> {
        let cache = self.cache.lock().await;
        let entry = cache.get(isbn)?;
        (entry.stored_at.elapsed() <= self.ttl).then(|| entry.result.clone())
    }

    /// Runs one provider, turning errors into "nothing found".
    async fn attempt(
        &self,
        provider: Provider,
        lookup: impl Future<Output = Result<Option<LookupResult>>>,
    ) -> Option<LookupResult> {
        match lookup.await {
            Ok(Some(result)) => Some(result),
            Ok(None) => {
                tracing::debug!(%provider, "provider had no usable data");
                None
            },
            Err(err) => {
                tracing::warn!(%provider, error = %err, "provider lookup failed, trying next");
                None
            },
        }
    }

    /// Downloads the cover so it can be shown straight away. Failure leaves
    /// just the URL on the result.
    async fn prefetch_cover(&self, result: &mut LookupResult) {
        let Some(url) = result.cover_url.as_deref() else {
            return;
        };
        match self.http.get(url).await.and_then(|response| response.into_success_body()) {
            Ok(bytes) if !bytes.is_empty() => result.cover_data = Some(bytes),
            Ok(_) => tracing::warn!(url, "cover download was empty"),
            Err(err) => tracing::warn!(url, error = %err, "cover download failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::MockHttpClient;
    use bookshelf_catalog::models::Genre;

    const ISBN: &str = "9780441013593";
    const OL_URL: &str = "https://openlibrary.org/api/books?bibkeys=ISBN:9780441013593&format=json&jscmd=data";
    const OL_COVER: &str = "https://covers.openlibrary.org/b/isbn/9780441013593-L.jpg";
    const GB_URL: &str = "https://www.googleapis.com/books/v1/volumes?q=isbn:9780441013593&maxResults=1";
    const OL_BODY: &str = r#"{"ISBN:9780441013593": {"title": "Dune", "authors": [{"name": "Frank Herbert"}]}}"#;
    const GB_BODY: &str = r#"{"items": [{"volumeInfo": {
        "title": "Dune (Google)",
        "authors": ["F. Herbert"],
        "categories": ["Fiction"],
        "description": "Arrakis.",
        "imageLinks": {"thumbnail": "http://books.google.com/c?id=1&zoom=1&edge=curl"}
    }}]}"#;
    const GB_COVER: &str = "https://books.google.com/c?id=1&zoom=0";

    fn service(http: MockHttpClient) -> (Arc<MockHttpClient>, MetadataService) {
        let http = Arc::new(http);
        let service = MetadataService::new(http.clone(), &LookupConfig::default());
        (http, service)
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_ttl() {
        let (http, service) = service(MockHttpClient::new().with_ok(OL_URL, OL_BODY).with_ok(OL_COVER, b"jpeg".to_vec()));

        let first = service.lookup_by_isbn("978-0-441-01359-3").await.unwrap();
        assert_eq!(http.request_count(), 2);

        tokio::time::advance(Duration::from_secs(3599)).await;
        let second = service.lookup_by_isbn(ISBN).await.unwrap();
        assert_eq!(first, second);
        // Served from memory: no new round trips.
        assert_eq!(http.request_count(), 2);

        tokio::time::advance(Duration::from_secs(2)).await;
        service.lookup_by_isbn(ISBN).await.unwrap();
        assert_eq!(http.request_count(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_boundary_is_inclusive() {
        let (http, service) = service(MockHttpClient::new().with_ok(OL_URL, OL_BODY));
        service.lookup_by_isbn(ISBN).await.unwrap();
        let after_first = http.request_count();
        tokio::time::advance(Duration::from_secs(3600)).await;
        service.lookup_by_isbn(ISBN).await.unwrap();
        assert_eq!(http.request_count(), after_first);
    }

    #[tokio::test]
    async fn test_open_library_result_with_prefetched_cover() {
        let (_, service) = service(MockHttpClient::new().with_ok(OL_URL, OL_BODY).with_ok(OL_COVER, b"jpeg".to_vec()));
        let result = service.lookup_by_isbn(ISBN).await.unwrap();
        assert_eq!(result.provider, Provider::OpenLibrary);
        assert_eq!(result.title, "Dune");
        assert_eq!(result.isbn.as_deref(), Some(ISBN));
        assert_eq!(result.cover_url.as_deref(), Some(OL_COVER));
        assert_eq!(result.cover_data.as_deref(), Some(&b"jpeg"[..]));
    }

    #[tokio::test]
    async fn test_failed_prefetch_keeps_url() {
        let (_, service) = service(MockHttpClient::new().with_ok(OL_URL, OL_BODY).with_failure(OL_COVER));
        let result = service.lookup_by_isbn(ISBN).await.unwrap();
        assert_eq!(result.cover_url.as_deref(), Some(OL_COVER));
        assert_eq!(result.cover_data, None);
    }

    #[tokio::test]
    async fn test_falls_back_to_google_without_merging() {
        // Open Library answers, but without a title.
        let (http, service) = service(
            MockHttpClient::new()
                .with_ok(OL_URL, r#"{"ISBN:9780441013593": {"authors": [{"name": "Frank Herbert"}]}}"#)
                .with_ok(GB_URL, GB_BODY),
        );
        let result = service.lookup_by_isbn(ISBN).await.unwrap();
        assert_eq!(result.provider, Provider::GoogleBooks);
        assert_eq!(result.title, "Dune (Google)");
        assert_eq!(result.authors, ["F. Herbert"]);
        assert_eq!(result.genre, Some(Genre::Fiction));
        assert_eq!(result.cover_url.as_deref(), Some(GB_COVER));
        assert_eq!(result.description.as_deref(), Some("Arrakis."));
        assert_eq!(http.requests(), [OL_URL, GB_URL, GB_COVER]);
    }

    #[tokio::test]
    async fn test_network_failure_falls_through() {
        let (_, service) = service(MockHttpClient::new().with_failure(OL_URL).with_ok(GB_URL, GB_BODY));
        let result = service.lookup_by_isbn(ISBN).await.unwrap();
        assert_eq!(result.provider, Provider::GoogleBooks);
    }

    #[tokio::test]
    async fn test_not_found_when_exhausted() {
        let (http, service) = service(MockHttpClient::new().with_status(OL_URL, 503).with_ok(GB_URL, r#"{"totalItems": 0}"#));
        let err = service.lookup_by_isbn(ISBN).await.unwrap_err();
        assert_eq!(*err, ErrorKind::NotFound(ISBN.to_string()));
        // Each provider tried exactly once.
        assert_eq!(http.request_count(), 2);
        // Failures are not cached.
        service.lookup_by_isbn(ISBN).await.unwrap_err();
        assert_eq!(http.request_count(), 4);
    }

    #[tokio::test]
    async fn test_empty_isbn_skips_network() {
        let (http, service) = service(MockHttpClient::new());
        assert!(service.lookup_by_isbn("--").await.is_err());
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_search_by_title_author() {
        let url = "https://www.googleapis.com/books/v1/volumes?q=Dune+inauthor:Frank%20Herbert&maxResults=1";
        let (http, service) = service(MockHttpClient::new().with_ok(url, GB_BODY));
        let result = service.search_by_title_author("Dune", Some("Frank Herbert")).await.unwrap();
        assert_eq!(result.title, "Dune (Google)");
        // No pre-fetch and no cache.
        assert_eq!(result.cover_data, None);
        service.search_by_title_author("Dune", Some("Frank Herbert")).await.unwrap();
        assert_eq!(http.request_count(), 2);
    }

    #[tokio::test]
    async fn test_search_failure_is_not_found() {
        let (_, service) = service(MockHttpClient::new());
        let err = service.search_by_title_author("Nothing", None).await.unwrap_err();
        assert_eq!(*err, ErrorKind::NotFound("Nothing".to_string()));
    }
}

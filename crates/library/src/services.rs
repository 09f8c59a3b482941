//! Network-backed helpers: metadata lookup and cover images.

use std::sync::Arc;

use bookshelf_catalog::BookForm;
use bookshelf_config::Config;
use bookshelf_lookup::{CoverLoader, HttpClient, ImageCache, LookupResult, MetadataService, ReqwestClient};
use exn::ResultExt;

use crate::error::{ErrorKind, Result};

/// Everything that talks to the outside world, sharing one HTTP client.
pub struct Services {
    pub metadata: MetadataService,
    pub images: Arc<ImageCache>,
    pub covers: CoverLoader,
}

impl Services {
    /// Builds the services with a real HTTP client.
    pub fn new(config: &Config) -> Result<Self> {
        let http = ReqwestClient::new(&config.lookup).or_raise(|| ErrorKind::Config)?;
        Ok(Self::with_http(Arc::new(http), config))
    }

    pub fn with_http(http: Arc<dyn HttpClient>, config: &Config) -> Self {
        let images = Arc::new(ImageCache::new(&config.images));
        Self {
            metadata: MetadataService::new(Arc::clone(&http), &config.lookup),
            covers: CoverLoader::new(http, Arc::clone(&images)),
            images,
        }
    }

    /// Looks `isbn` up and copies what was found into `form`.
    ///
    /// On failure the form is left as it was, so the user can carry on typing.
    #[tracing::instrument(level = "debug", skip(self, form))]
    pub async fn lookup_into_form(&self, isbn: &str, form: &mut BookForm) -> Result<LookupResult> {
        let result = self.metadata.lookup_by_isbn(isbn).await.or_raise(|| ErrorKind::Lookup)?;
        result.prefill(form);
        Ok(result)
    }

    /// Cover bytes for display, from the image cache when possible.
    pub async fn cover(&self, url: &str) -> Result<Arc<[u8]>> {
        self.covers.load(url).await.or_raise(|| ErrorKind::Lookup)
    }
}

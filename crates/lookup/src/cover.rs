use std::sync::Arc;

use crate::error::Result;
use crate::http::HttpClient;
use crate::images::ImageCache;

/// Fetches cover images for display, going through the [`ImageCache`].
pub struct CoverLoader {
    http: Arc<dyn HttpClient>,
    cache: Arc<ImageCache>,
}

impl CoverLoader {
    pub fn new(http: Arc<dyn HttpClient>, cache: Arc<ImageCache>) -> Self {
        Self { http, cache }
    }

    /// Image bytes for `url`, from the cache or freshly downloaded (and then
    /// cached at a cost of their byte length).
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn load(&self, url: &str) -> Result<Arc<[u8]>> {
        if let Some(image) = self.cache.get(url) {
            tracing::debug!("image cache hit");
            return Ok(image);
        }
        let bytes = self.http.get(url).await?.into_success_body()?;
        let image: Arc<[u8]> = bytes.into();
        self.cache.set(url, Arc::clone(&image), image.len());
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::http::MockHttpClient;

    const URL: &str = "https://covers.test/1.jpg";

    fn loader(http: MockHttpClient) -> (Arc<MockHttpClient>, Arc<ImageCache>, CoverLoader) {
        let http = Arc::new(http);
        let cache = Arc::new(ImageCache::with_limits(10, 1_000));
        let loader = CoverLoader::new(http.clone(), cache.clone());
        (http, cache, loader)
    }

    #[tokio::test]
    async fn test_downloads_once() {
        let (http, cache, loader) = loader(MockHttpClient::new().with_ok(URL, vec![1u8, 2, 3]));
        assert_eq!(&*loader.load(URL).await.unwrap(), &[1, 2, 3]);
        assert_eq!(&*loader.load(URL).await.unwrap(), &[1, 2, 3]);
        assert_eq!(http.request_count(), 1);
        assert_eq!(cache.total_cost(), 3);
    }

    #[tokio::test]
    async fn test_failed_download_is_not_cached() {
        let (http, cache, loader) = loader(MockHttpClient::new().with_status(URL, 404));
        let err = loader.load(URL).await.unwrap_err();
        assert_eq!(*err, ErrorKind::Status(404));
        assert!(cache.is_empty());
        loader.load(URL).await.unwrap_err();
        assert_eq!(http.request_count(), 2);
    }
}

use bookshelf_config::LookupConfig;
use serde::Deserialize;

use super::{decode, present};
use crate::error::Result;
use crate::genre::map_category;
use crate::http::HttpClient;
use crate::result::{LookupResult, Provider};

#[derive(Debug, Deserialize)]
struct Volumes {
    items: Option<Vec<Volume>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    categories: Option<Vec<String>>,
    description: Option<String>,
    industry_identifiers: Option<Vec<IndustryIdentifier>>,
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
struct IndustryIdentifier {
    #[serde(rename = "type")]
    kind: Option<String>,
    identifier: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageLinks {
    thumbnail: Option<String>,
    small: Option<String>,
    medium: Option<String>,
    large: Option<String>,
}
impl ImageLinks {
    fn best(self) -> Option<String> {
        present(self.large)
            .or_else(|| present(self.medium))
            .or_else(|| present(self.small))
            .or_else(|| present(self.thumbnail))
    }
}

/// Asks for the full-size image over https instead of the curled-page
/// thumbnail Google hands out by default.
pub(crate) fn upgrade_cover_url(url: &str) -> String {
    url.replace("http:", "https:").replace("zoom=1", "zoom=0").replace("&edge=curl", "")
}

/// Google Books volumes search. Used as the ISBN fallback and for
/// title/author searches.
#[derive(Debug, Clone)]
pub struct GoogleBooks {
    base_url: String,
}
impl GoogleBooks {
    pub fn new(config: &LookupConfig) -> Self {
        Self {
            base_url: config.google_books_url.trim_end_matches('/').to_string(),
        }
    }

    /// `query` must already be URL-safe.
    pub fn volumes_url(&self, query: &str) -> String {
        format!("{}/volumes?q={query}&maxResults=1", self.base_url)
    }

    /// Query for a title, optionally narrowed to an author.
    pub fn title_query(title: &str, author: Option<&str>) -> String {
        let mut query = urlencoding::encode(title).into_owned();
        if let Some(author) = author.filter(|author| !author.is_empty()) {
            query.push_str("+inauthor:");
            query.push_str(&urlencoding::encode(author));
        }
        query
    }

    /// Looks up a normalised ISBN (digits and `X`, so already URL-safe).
    pub async fn lookup_isbn(&self, http: &dyn HttpClient, isbn: &str) -> Result<Option<LookupResult>> {
        self.query(http, &format!("isbn:{isbn}")).await
    }

    pub async fn search(&self, http: &dyn HttpClient, title: &str, author: Option<&str>) -> Result<Option<LookupResult>> {
        self.query(http, &Self::title_query(title, author)).await
    }

    async fn query(&self, http: &dyn HttpClient, query: &str) -> Result<Option<LookupResult>> {
        let body = http.get(&self.volumes_url(query)).await?.into_success_body()?;
        parse(&body)
    }
}

fn parse(body: &[u8]) -> Result<Option<LookupResult>> {
    let volumes: Volumes = decode(Provider::GoogleBooks, body)?;
    let Some(info) = volumes.items.into_iter().flatten().next().and_then(|volume| volume.volume_info) else {
        return Ok(None);
    };
    let Some(title) = present(info.title) else {
        return Ok(None);
    };
    let isbn = info.industry_identifiers.into_iter().flatten().find_map(|id| {
        let is_isbn = id.kind.as_deref().is_some_and(|kind| kind.contains("ISBN"));
        if is_isbn { present(id.identifier) } else { None }
    });
    let first_category = info.categories.and_then(|categories| categories.into_iter().next());
    Ok(Some(LookupResult {
        title,
        authors: info.authors.unwrap_or_default(),
        genre: map_category(first_category.as_deref()),
        cover_url: info.image_links.and_then(ImageLinks::best).map(|url| upgrade_cover_url(&url)),
        cover_data: None,
        isbn,
        description: info.description,
        provider: Provider::GoogleBooks,
    }))
}

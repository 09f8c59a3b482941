/// Cover artwork for a book.
///
/// Downloaded (or user-picked) image bytes always win over a remote URL for
/// display. When the bytes were fetched from a URL the URL is kept alongside
/// them so the cover can be re-downloaded later.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
pub enum Cover {
    #[default]
    None,
    /// Remote image, not downloaded yet.
    Url { url: String },
    /// Image bytes held locally.
    Blob { bytes: Vec<u8>, source: Option<String> },
}
impl Cover {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    pub fn blob(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Blob { bytes: bytes.into(), source: None }
    }

    /// Image bytes that were downloaded from `source`.
    pub fn fetched(bytes: impl Into<Vec<u8>>, source: impl Into<String>) -> Self {
        Self::Blob {
            bytes: bytes.into(),
            source: Some(source.into()),
        }
    }

    /// Builds a cover from independently optional bytes and URL, bytes first.
    pub fn from_parts(bytes: Option<Vec<u8>>, url: Option<String>) -> Self {
        match (bytes, url) {
            (Some(bytes), source) => Self::Blob { bytes, source },
            (None, Some(url)) => Self::Url { url },
            (None, None) => Self::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Local image bytes, if any.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Blob { bytes, .. } => Some(bytes),
            _ => None,
        }
    }

    /// The remote URL, whether or not the image has been downloaded.
    pub fn remote_url(&self) -> Option<&str> {
        match self {
            Self::Url { url } => Some(url),
            Self::Blob { source, .. } => source.as_deref(),
            Self::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_wins_over_url() {
        let cover = Cover::from_parts(Some(vec![1, 2, 3]), Some("https://example.com/c.jpg".into()));
        assert_eq!(cover.bytes(), Some(&[1u8, 2, 3][..]));
        assert_eq!(cover.remote_url(), Some("https://example.com/c.jpg"));
    }

    #[test]
    fn test_url_only() {
        let cover = Cover::from_parts(None, Some("https://example.com/c.jpg".into()));
        assert_eq!(cover.bytes(), None);
        assert_eq!(cover.remote_url(), Some("https://example.com/c.jpg"));
    }

    #[test]
    fn test_nothing() {
        assert!(Cover::from_parts(None, None).is_none());
        assert_eq!(Cover::default(), Cover::None);
    }
}

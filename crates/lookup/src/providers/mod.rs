//! Remote metadata providers.
//!
//! Each provider knows its URLs and its JSON shape and nothing else. The
//! order they are tried in, caching, and cover pre-fetching all live in
//! [`MetadataService`](crate::MetadataService).
//!
//! Response schemas are deliberately loose: every field is optional, and a
//! missing or `null` value just means "the provider didn't say".

mod google;
mod openlibrary;

pub use self::google::GoogleBooks;
pub use self::openlibrary::OpenLibrary;
use exn::ResultExt;
use serde::de::DeserializeOwned;

use crate::error::{ErrorKind, Result};
use crate::result::Provider;

fn decode<T: DeserializeOwned>(provider: Provider, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).or_raise(|| ErrorKind::Decode(provider.name()))
}

/// `Some(s)` unless `s` is missing or blank.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

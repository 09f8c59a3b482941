//! Book metadata from the outside world.
//!
//! [`MetadataService`] turns an ISBN (or a title and author) into a
//! [`LookupResult`] using Open Library and Google Books. [`ImageCache`] and
//! [`CoverLoader`] keep downloaded cover art around for display.

mod cover;
pub mod error;
mod genre;
pub mod http;
mod images;
pub mod providers;
mod result;
mod service;

pub use crate::cover::CoverLoader;
pub use crate::genre::map_category;
pub use crate::http::{HttpClient, HttpResponse, ReqwestClient};
pub use crate::images::ImageCache;
pub use crate::result::{LookupResult, Provider};
pub use crate::service::MetadataService;

//! Predefined locations.
//!
//! Deleting a location does not touch the books stored there; they display
//! as [`UNKNOWN_LOCATION`](bookshelf_catalog::UNKNOWN_LOCATION) until moved.

use bookshelf_catalog::models::PredefinedLocation;
use exn::OptionExt;
use uuid::Uuid;

use crate::error::{ErrorKind, Result};
use crate::library::Library;

impl Library {
    /// Saved locations, sorted by name.
    pub async fn locations(&self) -> Result<Vec<PredefinedLocation>> {
        let mut locations = self.locations.list_all().await.map_err(ErrorKind::storage)?;
        locations.sort_by_cached_key(|location| location.name.to_lowercase());
        Ok(locations)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn create_location(&self, name: &str) -> Result<PredefinedLocation> {
        let name = name.trim();
        exn::ensure!(!name.is_empty(), ErrorKind::BlankName);
        let location = PredefinedLocation::new(name);
        self.locations.insert(location.clone()).await.map_err(ErrorKind::storage)?;
        Ok(location)
    }

    pub async fn rename_location(&self, id: Uuid, name: &str) -> Result<PredefinedLocation> {
        let name = name.trim();
        exn::ensure!(!name.is_empty(), ErrorKind::BlankName);
        let mut location = self
            .locations
            .get(&id)
            .await
            .map_err(ErrorKind::storage)?
            .ok_or_raise(|| ErrorKind::NotFound(id.to_string()))?;
        location.name = name.to_string();
        self.locations.update(location.clone()).await.map_err(ErrorKind::storage)?;
        Ok(location)
    }

    pub async fn delete_location(&self, id: Uuid) -> Result<()> {
        self.locations.delete(&id).await.map_err(ErrorKind::storage)
    }
}

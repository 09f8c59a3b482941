//! User tags.
//!
//! Books hold tag names, so renaming or deleting a tag here leaves existing
//! books untouched.

use bookshelf_catalog::models::{TagPalette, UserTag};
use exn::OptionExt;
use uuid::Uuid;

use crate::error::{ErrorKind, Result};
use crate::library::Library;

impl Library {
    pub async fn tags(&self) -> Result<Vec<UserTag>> {
        let mut tags = self.tags.list_all().await.map_err(ErrorKind::storage)?;
        tags.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(tags)
    }

    /// Creates a tag. Without an explicit colour it takes the next one in
    /// the palette rotation.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn create_tag(&self, name: &str, color_hex: Option<String>) -> Result<UserTag> {
        let name = name.trim();
        exn::ensure!(!name.is_empty(), ErrorKind::BlankName);
        let seed = if self.palette_seeded() {
            0
        } else {
            self.tags.list_all().await.map_err(ErrorKind::storage)?.len()
        };
        let tag = {
            let mut palette = self.palette.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let palette = palette.get_or_insert_with(|| TagPalette::starting_at(seed));
            UserTag::new(name, color_hex, palette)
        };
        self.tags.insert(tag.clone()).await.map_err(ErrorKind::storage)?;
        tracing::info!(id = %tag.id, color = %tag.color_hex, "tag created");
        Ok(tag)
    }

    fn palette_seeded(&self) -> bool {
        self.palette.lock().is_ok_and(|palette| palette.is_some())
    }

    pub async fn rename_tag(&self, id: Uuid, name: &str) -> Result<UserTag> {
        let name = name.trim();
        exn::ensure!(!name.is_empty(), ErrorKind::BlankName);
        let mut tag = self
            .tags
            .get(&id)
            .await
            .map_err(ErrorKind::storage)?
            .ok_or_raise(|| ErrorKind::NotFound(id.to_string()))?;
        tag.name = name.to_string();
        self.tags.update(tag.clone()).await.map_err(ErrorKind::storage)?;
        Ok(tag)
    }

    pub async fn delete_tag(&self, id: Uuid) -> Result<()> {
        self.tags.delete(&id).await.map_err(ErrorKind::storage)
    }
}

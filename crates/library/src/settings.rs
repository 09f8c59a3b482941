use bookshelf_catalog::models::{AppSettings, ViewMode};
use bookshelf_catalog::{SortDirection, SortKey};

use crate::error::{ErrorKind, Result};
use crate::library::Library;

impl Library {
    /// Stored settings, or the defaults if nothing has been saved.
    pub async fn settings(&self) -> Result<AppSettings> {
        bookshelf_storage::load_settings(&*self.settings)
            .await
            .map_err(ErrorKind::storage)
    }

    pub async fn save_settings(&self, settings: &AppSettings) -> Result<()> {
        bookshelf_storage::save_settings(&*self.settings, settings)
            .await
            .map_err(ErrorKind::storage)
    }

    /// Persists a new sort order.
    pub async fn set_sort(&self, key: SortKey, direction: SortDirection) -> Result<AppSettings> {
        self.update_settings(|settings| {
            settings.sort_key = key;
            settings.sort_direction = direction;
        })
        .await
    }

    pub async fn toggle_view_mode(&self) -> Result<ViewMode> {
        let settings = self
            .update_settings(|settings| settings.view_mode = settings.view_mode.toggled())
            .await?;
        Ok(settings.view_mode)
    }

    async fn update_settings(&self, change: impl FnOnce(&mut AppSettings)) -> Result<AppSettings> {
        let mut settings = self.settings().await?;
        change(&mut settings);
        self.save_settings(&settings).await?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::tests::fixture;

    #[tokio::test]
    async fn test_defaults_until_changed() {
        let fx = fixture([]);
        let settings = fx.library.settings().await.unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.sort_key, SortKey::DateAdded);
        assert_eq!(settings.sort_direction, SortDirection::Descending);
    }

    #[tokio::test]
    async fn test_changes_persist() {
        let fx = fixture([]);
        fx.library.set_sort(SortKey::Title, SortDirection::Ascending).await.unwrap();
        assert_eq!(fx.library.toggle_view_mode().await.unwrap(), ViewMode::List);
        let settings = fx.library.settings().await.unwrap();
        assert_eq!(settings.sort_key, SortKey::Title);
        assert_eq!(settings.sort_direction, SortDirection::Ascending);
        assert_eq!(settings.view_mode, ViewMode::List);
    }
}

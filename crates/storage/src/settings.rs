//! The settings singleton.
//!
//! Settings are stored as a single [`AppSettings`] record under
//! [`SETTINGS_ID`]. Nothing is written until the user changes something.

use bookshelf_catalog::models::{AppSettings, SETTINGS_ID};

use crate::Store;
use crate::error::Result;

/// Current settings, or the defaults if none have been saved yet.
#[tracing::instrument(level = "debug", skip_all, fields(store = store.name()))]
pub async fn load_settings(store: &dyn Store<AppSettings>) -> Result<AppSettings> {
    match store.get(&SETTINGS_ID.to_string()).await? {
        Some(settings) => Ok(settings),
        None => {
            tracing::debug!("no stored settings, using defaults");
            Ok(AppSettings::default())
        },
    }
}

/// Writes `settings`, creating the record on first save.
#[tracing::instrument(level = "debug", skip_all, fields(store = store.name()))]
pub async fn save_settings(store: &dyn Store<AppSettings>, settings: &AppSettings) -> Result<()> {
    let mut settings = settings.clone();
    settings.id = SETTINGS_ID.to_string();
    if store.get(&settings.id).await?.is_some() {
        store.update(settings).await
    } else {
        tracing::info!("creating settings record");
        store.insert(settings).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use bookshelf_catalog::SortKey;
    use bookshelf_catalog::models::ViewMode;

    #[tokio::test]
    async fn test_load_defaults_without_writing() {
        let store = MemoryStore::<AppSettings>::default();
        assert_eq!(load_settings(&store).await.unwrap(), AppSettings::default());
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_creates_then_updates() {
        let store = MemoryStore::<AppSettings>::default();
        let mut settings = AppSettings {
            view_mode: ViewMode::List,
            ..AppSettings::default()
        };
        save_settings(&store, &settings).await.unwrap();
        settings.sort_key = SortKey::Title;
        save_settings(&store, &settings).await.unwrap();
        let stored = store.list_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], settings);
        assert_eq!(load_settings(&store).await.unwrap(), settings);
    }

    #[tokio::test]
    async fn test_save_forces_singleton_id() {
        let store = MemoryStore::<AppSettings>::default();
        let settings = AppSettings {
            id: "something-else".into(),
            ..AppSettings::default()
        };
        save_settings(&store, &settings).await.unwrap();
        assert!(store.get(&SETTINGS_ID.to_string()).await.unwrap().is_some());
    }
}

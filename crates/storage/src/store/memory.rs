//! In-memory record store for testing.

use crate::error::{ErrorKind, Result};
use crate::{Record, Store};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// In-memory record store for testing.
///
/// Records are kept in a `HashMap` behind a [`RwLock`], so all trait methods
/// can operate on `&self` without external synchronisation. Listing order is
/// whatever the map gives back, which keeps callers honest about sorting.
pub struct MemoryStore<T: Record> {
    name: String,
    records: RwLock<HashMap<T::Id, T>>,
    unavailable: AtomicBool,
}

impl<T: Record> MemoryStore<T> {
    /// Create a store pre-populated with records.
    ///
    /// Panics on duplicate ids. If test setup is wrong, then test should not
    /// pass.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let mut map = HashMap::new();
        for record in records {
            if let Some(previous) = map.insert(record.id(), record) {
                panic!("MemoryStore::with_records: duplicate id {}", previous.id());
            }
        }
        Self {
            name: "memory".to_string(),
            records: RwLock::new(map),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Change the name of the store.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Make every subsequent operation fail with
    /// [`BackendError`](ErrorKind::BackendError), or recover from that.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        exn::ensure!(
            !self.unavailable.load(Ordering::SeqCst),
            ErrorKind::BackendError(format!("{} is unavailable", self.name))
        );
        Ok(())
    }
}
impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::with_records([])
    }
}

#[async_trait]
impl<T: Record> Store<T> for MemoryStore<T> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn list_all(&self) -> Result<Vec<T>> {
        self.check_available()?;
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &T::Id) -> Result<Option<T>> {
        self.check_available()?;
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn insert(&self, record: T) -> Result<()> {
        self.check_available()?;
        let mut guard = self.records.write().await;
        let id = record.id();
        exn::ensure!(!guard.contains_key(&id), ErrorKind::AlreadyExists(id.to_string()));
        guard.insert(id, record);
        Ok(())
    }

    async fn update(&self, record: T) -> Result<()> {
        self.check_available()?;
        let mut guard = self.records.write().await;
        let slot = guard.get_mut(&record.id()).ok_or_else(|| exn::Exn::from(ErrorKind::NotFound(record.id().to_string())))?;
        *slot = record;
        Ok(())
    }

    async fn delete(&self, id: &T::Id) -> Result<()> {
        self.check_available()?;
        self.records
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| exn::Exn::from(ErrorKind::NotFound(id.to_string())))
    }
}

// In-memory favorites store.
// Drop-in substitute for tests and ephemeral sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::model::FavoriteSnapshot;

use super::FavoriteStore;

/// Favorites store keeping snapshots in process memory.
#[derive(Default)]
pub struct MemoryStore {
    snapshots: RwLock<HashMap<String, FavoriteSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoriteStore for MemoryStore {
    async fn save(&self, snapshot: FavoriteSnapshot) -> Result<()> {
        self.snapshots
            .write()
            .await
            .insert(snapshot.id().to_string(), snapshot);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.snapshots.write().await.remove(id);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<FavoriteSnapshot>> {
        Ok(self.snapshots.read().await.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<FavoriteSnapshot>> {
        let mut snapshots: Vec<FavoriteSnapshot> =
            self.snapshots.read().await.values().cloned().collect();
        snapshots.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(snapshots)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.snapshots.read().await.len())
    }

    async fn clear(&self) -> Result<()> {
        self.snapshots.write().await.clear();
        Ok(())
    }
}

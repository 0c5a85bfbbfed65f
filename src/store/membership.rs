// Favorite membership index.
// Existence-only view of the store, rebuilt on demand and never persisted.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::Result;

use super::FavoriteStore;

/// Fast favorite-membership queries derived from the offline store.
#[derive(Clone)]
pub struct MembershipIndex {
    store: Arc<dyn FavoriteStore>,
}

impl MembershipIndex {
    pub fn new(store: Arc<dyn FavoriteStore>) -> Self {
        Self { store }
    }

    /// Rebuild the full id set from the store.
    pub async fn snapshot(&self) -> Result<HashSet<String>> {
        let snapshots = self.store.list_all().await?;
        Ok(snapshots
            .into_iter()
            .map(|snapshot| snapshot.recipe.id)
            .collect())
    }

    /// Whether an id is currently favorited.
    pub async fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.store.get(id).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FavoriteSnapshot, Recipe};
    use crate::store::MemoryStore;

    fn snapshot(id: &str) -> FavoriteSnapshot {
        FavoriteSnapshot::new(Recipe {
            id: id.to_string(),
            title: String::new(),
            instructions: String::new(),
            thumbnail: String::new(),
            ingredients: Vec::new(),
        })
    }

    #[tokio::test]
    async fn test_snapshot_tracks_store_contents() {
        let store = Arc::new(MemoryStore::new());
        let index = MembershipIndex::new(store.clone());

        assert!(index.snapshot().await.unwrap().is_empty());

        store.save(snapshot("1")).await.unwrap();
        store.save(snapshot("2")).await.unwrap();
        let ids = index.snapshot().await.unwrap();
        assert!(ids.contains("1") && ids.contains("2"));

        store.delete("1").await.unwrap();
        let ids = index.snapshot().await.unwrap();
        assert!(!ids.contains("1"));
        assert!(index.contains("2").await.unwrap());
        assert!(!index.contains("1").await.unwrap());
    }
}

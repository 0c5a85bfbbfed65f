// Offline-first recipe resolution.
// Prefers the local snapshot store over the network and annotates favorite status.

use std::sync::Arc;

use log::debug;

use crate::error::Result;
use crate::model::{FavoriteSnapshot, Recipe};
use crate::remote::RemoteSource;
use crate::store::{FavoriteStore, MembershipIndex};

/// A resolved recipe annotated with favorite membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub recipe: Recipe,
    pub is_favorite: bool,
}

/// Decides offline-store versus network authority per lookup.
#[derive(Clone)]
pub struct Resolver {
    remote: Arc<dyn RemoteSource>,
    store: Arc<dyn FavoriteStore>,
    membership: MembershipIndex,
}

impl Resolver {
    pub fn new(remote: Arc<dyn RemoteSource>, store: Arc<dyn FavoriteStore>) -> Self {
        let membership = MembershipIndex::new(Arc::clone(&store));
        Self {
            remote,
            store,
            membership,
        }
    }

    /// The membership index shared with pagination consumers.
    pub fn membership(&self) -> &MembershipIndex {
        &self.membership
    }

    /// Resolve a recipe by id.
    ///
    /// A stored snapshot answers the lookup outright with `is_favorite` set;
    /// the network is consulted only on a miss, even when it is reachable.
    pub async fn fetch_recipe(&self, id: &str) -> Result<Resolved> {
        if let Some(snapshot) = self.store.get(id).await? {
            debug!("resolved {} from offline store", id);
            return Ok(Resolved {
                recipe: snapshot.recipe,
                is_favorite: true,
            });
        }

        let record = self.remote.lookup_by_id(id).await?;
        let recipe = record.decode();
        let is_favorite = self.membership.contains(id).await?;
        debug!("resolved {} from network", id);
        Ok(Resolved {
            recipe,
            is_favorite,
        })
    }

    /// Persist the displayed recipe as a favorite snapshot. No re-fetch: the
    /// snapshot is taken from the recipe the caller already holds.
    pub async fn add_favorite(&self, recipe: &Recipe) -> Result<()> {
        self.store.save(FavoriteSnapshot::new(recipe.clone())).await
    }

    /// Remove a favorite by id; a no-op when absent.
    pub async fn remove_favorite(&self, id: &str) -> Result<()> {
        self.store.delete(id).await
    }

    /// All favorite snapshots, newest first.
    pub async fn list_favorites(&self) -> Result<Vec<FavoriteSnapshot>> {
        self.store.list_all().await
    }

    /// Number of favorites.
    pub async fn favorites_count(&self) -> Result<usize> {
        self.store.count().await
    }
}

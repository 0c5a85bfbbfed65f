// Favorites store module.
// Durable keyed storage of complete recipe snapshots.

pub mod disk;
pub mod membership;
pub mod memory;
pub mod paths;

pub use disk::DiskStore;
pub use membership::MembershipIndex;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::FavoriteSnapshot;

/// Contract of the offline favorites store.
///
/// Implementations serialize writes relative to each other and to reads, so
/// concurrent callers observe a total order over mutations.
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// Upsert a snapshot by recipe id, replacing any prior snapshot.
    async fn save(&self, snapshot: FavoriteSnapshot) -> Result<()>;

    /// Remove the snapshot for an id; a no-op when absent.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Fetch the snapshot for an id.
    async fn get(&self, id: &str) -> Result<Option<FavoriteSnapshot>>;

    /// All snapshots ordered by saved-at timestamp, newest first.
    async fn list_all(&self) -> Result<Vec<FavoriteSnapshot>>;

    /// Number of stored snapshots.
    async fn count(&self) -> Result<usize>;

    /// Remove every snapshot. Irreversible.
    async fn clear(&self) -> Result<()>;
}

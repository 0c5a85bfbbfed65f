// Disk-backed favorites store.
// One JSON snapshot file per recipe id, with atomic writes and a single-writer lock.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use crate::error::{LarderError, Result};
use crate::model::FavoriteSnapshot;

use super::FavoriteStore;
use super::paths;

/// Favorites store persisting snapshots under a root directory.
///
/// Snapshots are self-contained: each file carries the full recipe including
/// its ingredient list, readable without network access.
pub struct DiskStore {
    root: PathBuf,
    // Writers hold the lock exclusively; readers share it.
    lock: RwLock<()>,
}

impl DiskStore {
    /// Open a store rooted at the platform data directory.
    pub fn open_default() -> Result<Self> {
        let root = paths::favorites_dir().ok_or_else(|| {
            LarderError::Unknown("no data directory available on this platform".to_string())
        })?;
        Self::open(root)
    }

    /// Open a store rooted at an explicit directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            lock: RwLock::new(()),
        })
    }

    fn snapshot_path(&self, id: &str) -> PathBuf {
        paths::snapshot_path(&self.root, id)
    }

    fn read_snapshot(path: &Path) -> Result<Option<FavoriteSnapshot>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        let snapshot: FavoriteSnapshot = serde_json::from_str(&contents)?;
        Ok(Some(snapshot))
    }

    fn snapshot_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                files.push(path);
            }
        }
        Ok(files)
    }
}

#[async_trait]
impl FavoriteStore for DiskStore {
    async fn save(&self, snapshot: FavoriteSnapshot) -> Result<()> {
        let _guard = self.lock.write().await;

        let path = self.snapshot_path(snapshot.id());
        let json = serde_json::to_string_pretty(&snapshot)?;

        // Write atomically via temp file.
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &path)?;

        debug!("saved snapshot {}", snapshot.id());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.lock.write().await;

        let path = self.snapshot_path(id);
        if path.exists() {
            fs::remove_file(&path)?;
            debug!("deleted snapshot {}", id);
        }
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<FavoriteSnapshot>> {
        let _guard = self.lock.read().await;
        Self::read_snapshot(&self.snapshot_path(id))
    }

    async fn list_all(&self) -> Result<Vec<FavoriteSnapshot>> {
        let _guard = self.lock.read().await;

        let mut snapshots = Vec::new();
        for path in self.snapshot_files()? {
            if let Some(snapshot) = Self::read_snapshot(&path)? {
                snapshots.push(snapshot);
            }
        }
        snapshots.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(snapshots)
    }

    async fn count(&self) -> Result<usize> {
        let _guard = self.lock.read().await;
        Ok(self.snapshot_files()?.len())
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.lock.write().await;
        fs::remove_dir_all(&self.root)?;
        fs::create_dir_all(&self.root)?;
        Ok(())
    }
}

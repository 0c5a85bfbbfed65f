// Store path utilities.
// Constructs filesystem paths for persisted favorite snapshots.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Base data directory (~/.local/share/larder on Linux).
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "larder").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Default directory holding one snapshot file per favorited recipe.
pub fn favorites_dir() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("favorites"))
}

/// Snapshot file path for a recipe id under a store root.
pub fn snapshot_path(root: &Path, id: &str) -> PathBuf {
    root.join(format!("{}.json", sanitize_name(id)))
}

/// Sanitize an id for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("52772"), "52772");
        assert_eq!(sanitize_name("odd/id"), "odd_id");
        assert_eq!(sanitize_name("a:b?c"), "a_b_c");
    }

    #[test]
    fn test_snapshot_path() {
        let path = snapshot_path(Path::new("/tmp/favorites"), "52772");
        assert!(path.ends_with("favorites/52772.json"));
    }
}

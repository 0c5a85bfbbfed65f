// Canonical recipe model.
// Structured entities produced by the field decoder and persisted as snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single ingredient paired with its measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// Fully structured recipe.
///
/// Core fields degrade to empty strings when the source omits them; the
/// ingredient list is always derived from a raw record, never stored raw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// Summary shape returned by category listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
}

/// A recipe category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
}

/// A favorited recipe persisted in full, readable without network access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSnapshot {
    pub recipe: Recipe,
    pub saved_at: DateTime<Utc>,
}

impl FavoriteSnapshot {
    /// Snapshot a recipe at the current instant.
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            saved_at: Utc::now(),
        }
    }

    /// Id of the underlying recipe, used as the storage key.
    pub fn id(&self) -> &str {
        &self.recipe.id
    }
}

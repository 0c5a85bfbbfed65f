// Recipe provider wire types.
// Response wrappers for deserializing provider JSON payloads.

use serde::Deserialize;

use crate::model::{Category, RecipeSummary};
use crate::record::RawRecord;

/// Wrapper for the categories listing.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesResponse {
    pub categories: Vec<Category>,
}

/// Wrapper for category filter results; the list is null when nothing matches.
#[derive(Debug, Deserialize)]
pub(crate) struct SummariesResponse {
    pub recipes: Option<Vec<RecipeSummary>>,
}

/// Wrapper for a by-id lookup carrying zero or one full record.
#[derive(Debug, Deserialize)]
pub(crate) struct RecordsResponse {
    pub recipes: Option<Vec<RawRecord>>,
}

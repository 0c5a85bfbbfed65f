// Recipe provider module.
// Defines the remote source contract and the HTTP client implementing it.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::HttpSource;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Category, RecipeSummary};
use crate::record::RawRecord;

/// Contract of the upstream recipe provider.
///
/// The engine consumes the provider exclusively through this trait, so tests
/// and alternative transports can be injected in place of live HTTP.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// List all recipe categories.
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// List recipe summaries for a category.
    async fn list_by_category(&self, category: &str) -> Result<Vec<RecipeSummary>>;

    /// Look up the full raw record for a recipe id.
    async fn lookup_by_id(&self, id: &str) -> Result<RawRecord>;
}

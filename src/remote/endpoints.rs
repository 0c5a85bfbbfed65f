// Recipe provider endpoints.
// Implements the remote source contract over the HTTP client.

use async_trait::async_trait;

use crate::error::{LarderError, Result};
use crate::model::{Category, RecipeSummary};
use crate::record::RawRecord;

use super::RemoteSource;
use super::client::HttpSource;
use super::types::{CategoriesResponse, RecordsResponse, SummariesResponse};

#[async_trait]
impl RemoteSource for HttpSource {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let response = self.get("/categories").await?;
        let wrapper: CategoriesResponse = response.json().await.map_err(LarderError::from)?;
        Ok(wrapper.categories)
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<RecipeSummary>> {
        let params = [("category", category)];
        let response = self.get_with_params("/recipes", &params).await?;
        let wrapper: SummariesResponse = response.json().await.map_err(LarderError::from)?;
        // The provider answers an unknown category with a null list.
        wrapper.recipes.ok_or(LarderError::EmptyResult)
    }

    async fn lookup_by_id(&self, id: &str) -> Result<RawRecord> {
        let response = self.get(&format!("/recipes/{}", id)).await?;
        let wrapper: RecordsResponse = response.json().await.map_err(LarderError::from)?;
        // Zero or one record; null and empty both mean the id is unknown.
        wrapper
            .recipes
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| LarderError::NotFound(id.to_string()))
    }
}

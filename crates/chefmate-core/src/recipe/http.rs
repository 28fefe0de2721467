//! HTTP-backed recipe source.

use async_trait::async_trait;
use log::warn;

use crate::error::{CompanionError, Result};
use crate::models::RecipeListing;

use super::raw::RawRecipeDocument;
use super::RecipeSource;

/// Recipe source talking to the companion backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRecipeSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecipeSource {
    /// Create a source rooted at the given base URL ("http://localhost:8000").
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    async fn fetch(&self, recipe_id: &str) -> Result<Option<RawRecipeDocument>> {
        let url = format!("{}/api/recipes/{recipe_id}", self.base_url);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Recipe fetch failed for '{recipe_id}': {e}");
                return Ok(None);
            }
        };
        if !response.status().is_success() {
            warn!(
                "Recipe fetch for '{recipe_id}' returned {}",
                response.status()
            );
            return Ok(None);
        }
        match response.json::<RawRecipeDocument>().await {
            Ok(document) => Ok(Some(document)),
            Err(e) => {
                warn!("Recipe document for '{recipe_id}' is not valid JSON: {e}");
                Ok(None)
            }
        }
    }

    async fn list(&self) -> Result<Vec<RecipeListing>> {
        let url = format!("{}/api/recipes", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CompanionError::RecipeSource {
                message: format!("list request failed: {e}"),
            })?;
        if !response.status().is_success() {
            return Err(CompanionError::RecipeSource {
                message: format!("list request returned {}", response.status()),
            });
        }
        response
            .json::<Vec<RecipeListing>>()
            .await
            .map_err(|e| CompanionError::RecipeSource {
                message: format!("list response is not valid JSON: {e}"),
            })
    }
}

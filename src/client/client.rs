use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::client::{
    endpoint::{self, Endpoint},
    types::*,
};

/// Public TheMealDB API root, using the developer test key `1`.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Client-side cap on filter and ingredient-listing results, applied after
/// envelope normalization. Bounds rendering cost; not a pagination cursor.
pub const FILTER_RESULT_CAP: usize = 20;

/// Stateless client for TheMealDB recipe directory.
///
/// Every operation issues exactly one GET request against the configured
/// base URL, with no retry, no caching, and no shared state between calls.
/// A null or absent response envelope normalizes to an empty result, so
/// list operations never surface null and lookup returns an explicit
/// `None`; transport and decode failures surface as errors.
pub struct MealDbClient {
    base_url: String,
    client: Client,
}

impl MealDbClient {
    /// Creates a client against the given API root, e.g. a mock server in
    /// tests. Use [`MealDbClient::default`] for the public API.
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Lookup operations

    /// Fetches full detail for one meal by id.
    ///
    /// The service replies with a one-element sequence under `meals`; the
    /// element is unwrapped. An unknown id yields `Ok(None)`.
    pub async fn get_recipe_by_id(&self, id: &str) -> Result<Option<Meal>> {
        let meals: Vec<Meal> = self.fetch_entries(&endpoint::LOOKUP_BY_ID, Some(id)).await?;
        Ok(meals.into_iter().next())
    }

    // Search operations

    /// Searches meals by full or partial name. An empty string is allowed
    /// and returns the service's unfiltered result set, untruncated.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Meal>> {
        self.fetch_entries(&endpoint::SEARCH_BY_NAME, Some(name)).await
    }

    /// Lists meals whose name starts with the given letter. The value is
    /// passed through as-is; the service ignores anything it cannot match.
    pub async fn find_by_first_letter(&self, letter: &str) -> Result<Vec<Meal>> {
        self.fetch_entries(&endpoint::SEARCH_BY_FIRST_LETTER, Some(letter))
            .await
    }

    // Category operations

    /// Lists all meal categories with thumbnails and descriptions.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.fetch_entries(&endpoint::ALL_CATEGORIES, None).await
    }

    /// Lists meal stubs in one category, capped at the first 20.
    pub async fn find_by_category(&self, category: &str) -> Result<Vec<Meal>> {
        let mut meals = self
            .fetch_entries(&endpoint::FILTER_BY_CATEGORY, Some(category))
            .await?;
        meals.truncate(FILTER_RESULT_CAP);
        Ok(meals)
    }

    // Area operations

    /// Lists all cuisine areas.
    pub async fn list_areas(&self) -> Result<Vec<Area>> {
        self.fetch_entries(&endpoint::LIST_AREAS, Some(endpoint::LIST_SELECTOR))
            .await
    }

    /// Lists meal stubs from one area, capped at the first 20.
    pub async fn find_by_area(&self, area: &str) -> Result<Vec<Meal>> {
        let mut meals = self
            .fetch_entries(&endpoint::FILTER_BY_AREA, Some(area))
            .await?;
        meals.truncate(FILTER_RESULT_CAP);
        Ok(meals)
    }

    // Ingredient operations

    /// Lists ingredients, capped at the first 20.
    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>> {
        let mut ingredients = self
            .fetch_entries(&endpoint::LIST_INGREDIENTS, Some(endpoint::LIST_SELECTOR))
            .await?;
        ingredients.truncate(FILTER_RESULT_CAP);
        Ok(ingredients)
    }

    /// Lists meal stubs containing one ingredient, capped at the first 20.
    pub async fn find_by_ingredient(&self, ingredient: &str) -> Result<Vec<Meal>> {
        let mut meals = self
            .fetch_entries(&endpoint::FILTER_BY_INGREDIENT, Some(ingredient))
            .await?;
        meals.truncate(FILTER_RESULT_CAP);
        Ok(meals)
    }

    /// Shared execution path for all operations: build the URL from the
    /// endpoint table, issue one GET, check the status, parse the body,
    /// and unwrap the envelope. A missing or null envelope key means zero
    /// matches, not a failure.
    async fn fetch_entries<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        value: Option<&str>,
    ) -> Result<Vec<T>> {
        let url = endpoint.url(&self.base_url, value);
        tracing::debug!("Requesting {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Network error requesting {}: {}", endpoint.path, e);
            anyhow::anyhow!("Failed to reach recipe service: {}", e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Request to {} failed with status {}", endpoint.path, status);
            anyhow::bail!("Failed to query {}: {}", endpoint.path, status);
        }

        let mut body: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response from {}: {}", endpoint.path, e);
            anyhow::anyhow!("Invalid response from recipe service: {}", e)
        })?;

        match body.get_mut(endpoint.key.as_str()) {
            None | Some(serde_json::Value::Null) => Ok(Vec::new()),
            Some(entries) => serde_json::from_value(entries.take()).map_err(|e| {
                tracing::error!(
                    "Unexpected {} payload from {}: {}",
                    endpoint.key.as_str(),
                    endpoint.path,
                    e
                );
                anyhow::anyhow!("Invalid response from recipe service: {}", e)
            }),
        }
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}

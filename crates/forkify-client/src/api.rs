//! The remote data contract the state store depends on.

use async_trait::async_trait;
use forkify_core::payload::{NewRecipe, RawRecipe, RawSearchItem};

use crate::error::ClientResult;

/// Operations of the recipe service.
///
/// [`crate::HttpClient`] is the network implementation; tests substitute
/// their own.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetches one recipe by id.
    async fn fetch_recipe(&self, id: &str) -> ClientResult<RawRecipe>;

    /// Fetches every recipe matching `query`.
    async fn fetch_search(&self, query: &str) -> ClientResult<Vec<RawSearchItem>>;

    /// Submits a new recipe and returns it as stored by the service.
    async fn submit_recipe(&self, recipe: &NewRecipe) -> ClientResult<RawRecipe>;
}

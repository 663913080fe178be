//! # Wire Payloads
//!
//! Shapes exchanged with the recipe service and their normalization into
//! domain types.
//!
//! ## Payload Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Recipe Service JSON                               │
//! │                                                                         │
//! │  GET /{id}        { status, data: { recipe: RawRecipe } }              │
//! │  GET ?search=q    { status, results, data: { recipes: [RawSearchItem] }}│
//! │  POST             body: NewRecipe  →  { status, data: { recipe } }      │
//! │  failure          { status: "fail", message }                           │
//! │                          │                                              │
//! │                          ▼                                              │
//! │  recipe_from_payload(raw, is_bookmarked)  →  Recipe                     │
//! │  search_item_from_payload(raw)            →  SearchResultItem           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The wire format is snake_case (`source_url`, `image_url`, `cooking_time`).

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{Ingredient, Recipe, SearchResultItem};

// =============================================================================
// Inbound Payloads
// =============================================================================

/// A recipe as sent by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image_url: String,
    pub servings: u32,
    pub cooking_time: u32,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// A search hit as sent by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSearchItem {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Envelope of single-recipe responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeEnvelope {
    #[serde(default)]
    pub status: String,
    pub data: RecipeData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeData {
    pub recipe: RawRecipe,
}

/// Envelope of search responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub results: usize,
    pub data: SearchData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub recipes: Vec<RawSearchItem>,
}

/// Body of a failed request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FailureBody {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// Outbound Payload
// =============================================================================

/// A user-submitted recipe, serialized in the service's snake_case format.
///
/// Built from the upload form by [`crate::upload::build_new_recipe`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    pub source_url: String,
    pub image_url: String,
    pub publisher: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
}

// =============================================================================
// Normalization
// =============================================================================

/// Maps a raw recipe into the canonical [`Recipe`].
///
/// `is_bookmarked` answers bookmark membership by id. It is injected so the
/// normalizer does not depend on when, or whether, bookmarks were restored.
///
/// ## Errors
/// `InvalidPayload` if the recipe has zero servings, since scaling divides
/// by the serving count.
pub fn recipe_from_payload<F>(raw: RawRecipe, is_bookmarked: F) -> CoreResult<Recipe>
where
    F: Fn(&str) -> bool,
{
    if raw.servings == 0 {
        return Err(CoreError::InvalidPayload {
            reason: format!("recipe {} has zero servings", raw.id),
        });
    }

    let bookmarked = is_bookmarked(&raw.id);

    Ok(Recipe {
        id: raw.id,
        title: raw.title,
        publisher: raw.publisher,
        source_url: raw.source_url,
        image: raw.image_url,
        servings: raw.servings,
        cooking_time: raw.cooking_time,
        ingredients: raw.ingredients,
        bookmarked,
        key: raw.key,
    })
}

/// Maps a raw search hit into a [`SearchResultItem`].
pub fn search_item_from_payload(raw: RawSearchItem) -> SearchResultItem {
    SearchResultItem {
        id: raw.id,
        title: raw.title,
        publisher: raw.publisher,
        image: raw.image_url,
        key: raw.key,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

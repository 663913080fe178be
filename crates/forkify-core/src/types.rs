//! # Domain Types
//!
//! Core domain types used throughout Forkify.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐      │
//! │  │     Recipe      │   │ SearchResultItem │   │   SearchState   │      │
//! │  │  ─────────────  │   │  ─────────────── │   │  ─────────────  │      │
//! │  │  id             │──►│  id              │◄──│  query          │      │
//! │  │  title          │   │  title           │   │  results        │      │
//! │  │  servings       │   │  publisher       │   │  results_per_pg │      │
//! │  │  ingredients[]  │   │  image           │   │  page           │      │
//! │  │  bookmarked     │   │  key?            │   └─────────────────┘      │
//! │  │  key?           │   └──────────────────┘                            │
//! │  └────────┬────────┘                                                    │
//! │           │ 1..n                                                        │
//! │  ┌────────▼────────┐                                                    │
//! │  │   Ingredient    │   quantity: None means "to taste"                  │
//! │  │  quantity?      │                                                    │
//! │  │  unit           │                                                    │
//! │  │  description    │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialized Shape
//! Domain types serialize in camelCase (`sourceUrl`, `cookingTime`). This is
//! the persisted bookmark format and the shape the frontend bindings expose.
//! The service's snake_case wire format lives in [`crate::payload`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::RESULTS_PER_PAGE;

// =============================================================================
// Ingredient
// =============================================================================

/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Ingredient {
    /// Amount for the recipe's current servings. `None` means unspecified.
    pub quantity: Option<f64>,

    /// Unit of measure, may be empty (e.g. "2 eggs").
    #[serde(default)]
    pub unit: String,

    /// What the ingredient is.
    pub description: String,
}

impl Ingredient {
    /// Creates an ingredient.
    pub fn new(quantity: Option<f64>, unit: impl Into<String>, description: impl Into<String>) -> Self {
        Ingredient {
            quantity,
            unit: unit.into(),
            description: description.into(),
        }
    }
}

// =============================================================================
// Recipe
// =============================================================================

/// A full recipe, as shown in the detail view.
///
/// ## Invariants
/// - `servings > 0`
/// - For every ingredient, `quantity / servings` is preserved by scaling
///   (see [`crate::servings`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Identifier assigned by the recipe service.
    pub id: String,

    pub title: String,

    pub publisher: String,

    /// Link to the original directions.
    pub source_url: String,

    /// Image URL.
    pub image: String,

    /// Number of servings the quantities are computed for.
    pub servings: u32,

    /// Cooking time in minutes.
    pub cooking_time: u32,

    /// Ordered ingredient list.
    pub ingredients: Vec<Ingredient>,

    /// Whether the recipe is in the bookmark set.
    #[serde(default)]
    pub bookmarked: bool,

    /// API key of the uploader. Present only for user-submitted recipes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub key: Option<String>,
}

impl Recipe {
    /// Returns true if the recipe was submitted by a user.
    #[inline]
    pub fn is_user_generated(&self) -> bool {
        self.key.is_some()
    }
}

/// A bookmark is a persisted recipe snapshot.
pub type Bookmark = Recipe;

// =============================================================================
// Search Result Item
// =============================================================================

/// Listing projection of a recipe used by search results and bookmarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub key: Option<String>,
}

impl From<&Recipe> for SearchResultItem {
    fn from(recipe: &Recipe) -> Self {
        SearchResultItem {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            publisher: recipe.publisher.clone(),
            image: recipe.image.clone(),
            key: recipe.key.clone(),
        }
    }
}

// =============================================================================
// Search State
// =============================================================================

/// The current query, its cached result set, and the pagination cursor.
///
/// Page views are derived on demand from `results`, see
/// [`crate::pagination`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    pub query: String,
    pub results: Vec<SearchResultItem>,
    pub results_per_page: usize,
    pub page: usize,
}

impl SearchState {
    /// Creates an empty search state.
    ///
    /// A zero page size is clamped to 1.
    pub fn new(results_per_page: usize) -> Self {
        SearchState {
            query: String::new(),
            results: Vec::new(),
            results_per_page: results_per_page.max(1),
            page: 1,
        }
    }

    /// Replaces the query and its cached results.
    ///
    /// The page cursor is left where it is; callers re-derive page 1
    /// explicitly.
    pub fn replace_results(&mut self, query: impl Into<String>, results: Vec<SearchResultItem>) {
        self.query = query.into();
        self.results = results;
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(RESULTS_PER_PAGE)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

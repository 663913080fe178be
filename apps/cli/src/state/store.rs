//! # App State Store
//!
//! Owns [`AppState`] and performs every operation that changes it.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     load_recipe / load_search_results                   │
//! │                                                                         │
//! │  1. take ticket  ────────► generation += 1  (ticket = new value)       │
//! │  2. await RecipeApi      (lock NOT held)                               │
//! │  3. lock state                                                         │
//! │       ticket == generation?  ──no──► LoadOutcome::Stale (discarded)    │
//! │              │ yes                                                      │
//! │              ▼                                                          │
//! │       normalize + write ───────────► LoadOutcome::Applied              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Recipe loads and search loads keep separate generations, so a search in
//! flight never invalidates a recipe load.
//!
//! ## Thread Safety
//! State sits behind `Arc<Mutex<AppState>>` and the lock is only taken
//! inside synchronous closures, never across an `.await`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use forkify_client::RecipeApi;
use forkify_core::payload::{recipe_from_payload, search_item_from_payload};
use forkify_core::upload::{build_new_recipe, RawForm};
use forkify_core::{Bookmark, Recipe, SearchResultItem, SearchState};
use forkify_store::BookmarkStore;
use tracing::{debug, info, warn};

use super::app_state::AppState;
use crate::error::AppResult;

/// Whether a finished load was written to state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response was the latest one and is now in state.
    Applied,
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Applied)
    }
}

/// Monotonic request counter.
#[derive(Debug, Default)]
struct Generation(AtomicU64);

impl Generation {
    fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}

/// The application state store.
pub struct AppStateStore {
    state: Arc<Mutex<AppState>>,
    api: Arc<dyn RecipeApi>,
    recipe_generation: Generation,
    search_generation: Generation,
}

impl AppStateStore {
    pub fn new(api: Arc<dyn RecipeApi>, bookmarks: BookmarkStore, results_per_page: usize) -> Self {
        AppStateStore {
            state: Arc::new(Mutex::new(AppState::new(bookmarks, results_per_page))),
            api,
            recipe_generation: Generation::default(),
            search_generation: Generation::default(),
        }
    }

    /// Executes a function with read access to the state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let id = store.with_state(|s| s.recipe_id().map(str::to_string));
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        let state = self.state.lock().expect("State mutex poisoned");
        f(&state)
    }

    /// Executes a function with write access to the state.
    pub fn with_state_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AppState) -> R,
    {
        let mut state = self.state.lock().expect("State mutex poisoned");
        f(&mut state)
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    pub fn recipe(&self) -> Option<Recipe> {
        self.with_state(|s| s.recipe.clone())
    }

    pub fn search(&self) -> SearchState {
        self.with_state(|s| s.search.clone())
    }

    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.with_state(AppState::bookmark_list)
    }

    // =========================================================================
    // Remote Loads
    // =========================================================================

    /// Fetches recipe `id` and makes it the open recipe.
    ///
    /// On failure the previous recipe stays in place.
    pub async fn load_recipe(&self, id: &str) -> AppResult<LoadOutcome> {
        let ticket = self.recipe_generation.next();
        debug!(id, ticket, "Loading recipe");

        let fetched = self.api.fetch_recipe(id).await;

        self.with_state_mut(|state| -> AppResult<LoadOutcome> {
            if !self.recipe_generation.is_current(ticket) {
                debug!(id, ticket, "Discarding stale recipe response");
                return Ok(LoadOutcome::Stale);
            }

            let bookmarks = &state.bookmarks;
            let recipe = recipe_from_payload(fetched?, |id| bookmarks.contains(id))?;

            info!(id = %recipe.id, title = %recipe.title, "Recipe loaded");
            state.recipe = Some(recipe);
            Ok(LoadOutcome::Applied)
        })
    }

    /// Fetches the results of `query` and caches them.
    ///
    /// The page cursor is not touched; callers ask for page 1 explicitly.
    pub async fn load_search_results(&self, query: &str) -> AppResult<LoadOutcome> {
        let ticket = self.search_generation.next();
        debug!(query, ticket, "Searching");

        let fetched = self.api.fetch_search(query).await;

        self.with_state_mut(|state| -> AppResult<LoadOutcome> {
            if !self.search_generation.is_current(ticket) {
                debug!(query, ticket, "Discarding stale search response");
                return Ok(LoadOutcome::Stale);
            }

            let results: Vec<SearchResultItem> =
                fetched?.into_iter().map(search_item_from_payload).collect();

            info!(query, count = results.len(), "Search results loaded");
            state.search.replace_results(query, results);
            Ok(LoadOutcome::Applied)
        })
    }

    // =========================================================================
    // Local Updates
    // =========================================================================

    /// Moves the page cursor (current page when `None`) and returns that
    /// page's items.
    pub fn search_results_page(&self, page: Option<usize>) -> Vec<SearchResultItem> {
        self.with_state_mut(|state| {
            let page = page.unwrap_or(state.search.page);
            state.search.page_slice(page).to_vec()
        })
    }

    /// Rescales the open recipe. State is unchanged on error.
    pub fn update_servings(&self, servings: i64) -> AppResult<()> {
        self.with_state_mut(|state| state.update_servings(servings))?;
        debug!(servings, "Servings updated");
        Ok(())
    }

    /// Validates `form`, submits it, opens the stored recipe and bookmarks it.
    ///
    /// Validation runs before any network call. A recipe load issued while
    /// the upload was in flight wins the open-recipe slot; the upload is
    /// still bookmarked.
    pub async fn upload_recipe(&self, form: &RawForm) -> AppResult<Recipe> {
        let payload = build_new_recipe(form)?;
        let ticket = self.recipe_generation.next();
        debug!(title = %payload.title, "Uploading recipe");

        let stored = self.api.submit_recipe(&payload).await?;
        let recipe = recipe_from_payload(stored, |_| false)?;

        self.with_state_mut(|state| {
            if self.recipe_generation.is_current(ticket) {
                state.recipe = Some(recipe.clone());
            } else {
                warn!(id = %recipe.id, "Recipe changed during upload, not opening upload");
            }
            state.add_bookmark(&recipe)
        })?;

        info!(id = %recipe.id, "Recipe uploaded");
        Ok(Recipe {
            bookmarked: true,
            ..recipe
        })
    }

    // =========================================================================
    // Bookmarks
    // =========================================================================

    pub fn add_bookmark(&self, recipe: &Recipe) -> AppResult<()> {
        self.with_state_mut(|state| state.add_bookmark(recipe))?;
        Ok(())
    }

    pub fn delete_bookmark(&self, id: &str) -> AppResult<()> {
        self.with_state_mut(|state| state.delete_bookmark(id))?;
        Ok(())
    }

    /// Bookmarks the open recipe, or un-bookmarks it if already bookmarked.
    pub fn toggle_bookmark(&self) -> AppResult<bool> {
        Ok(self.with_state_mut(AppState::toggle_bookmark)?)
    }

    /// Removes the persisted bookmark blob.
    pub fn clear_bookmarks(&self) -> AppResult<()> {
        self.with_state_mut(AppState::clear_bookmarks)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

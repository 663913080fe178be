//! # App State
//!
//! The single mutable record of the session: the open recipe, the search
//! cache, and the bookmark set.
//!
//! ## Invariants
//! - `recipe.bookmarked` is true exactly when its id is in `bookmarks`
//! - `bookmarks` always equals what is persisted under its key
//! - `search.page` is only moved by an explicit page request

use forkify_core::{Bookmark, CoreError, CoreResult, Recipe, SearchState};
use forkify_store::{BookmarkStore, StoreResult};

/// Everything the views render from.
#[derive(Debug)]
pub struct AppState {
    /// Recipe currently open, if any.
    pub recipe: Option<Recipe>,

    /// Query, cached results and page cursor.
    pub search: SearchState,

    /// Persisted bookmark set.
    pub bookmarks: BookmarkStore,
}

impl AppState {
    pub fn new(bookmarks: BookmarkStore, results_per_page: usize) -> Self {
        AppState {
            recipe: None,
            search: SearchState::new(results_per_page),
            bookmarks,
        }
    }

    /// Id of the open recipe.
    pub fn recipe_id(&self) -> Option<&str> {
        self.recipe.as_ref().map(|r| r.id.as_str())
    }

    /// Bookmarks `recipe` and flags the open recipe if it is the same one.
    ///
    /// Returns `false` if it was already bookmarked.
    pub fn add_bookmark(&mut self, recipe: &Recipe) -> StoreResult<bool> {
        let added = self.bookmarks.add(recipe)?;
        self.sync_flag(&recipe.id, true);
        Ok(added)
    }

    /// Removes the bookmark with `id` and clears the open recipe's flag if
    /// it matches.
    pub fn delete_bookmark(&mut self, id: &str) -> StoreResult<bool> {
        let removed = self.bookmarks.remove(id)?;
        self.sync_flag(id, false);
        Ok(removed)
    }

    /// Flips the bookmark state of the open recipe. Returns the new state.
    pub fn toggle_bookmark(&mut self) -> Result<bool, ToggleError> {
        let recipe = self.recipe.clone().ok_or(CoreError::NoRecipeLoaded)?;

        if recipe.bookmarked {
            self.delete_bookmark(&recipe.id)?;
            Ok(false)
        } else {
            self.add_bookmark(&recipe)?;
            Ok(true)
        }
    }

    /// Deletes the persisted bookmark blob.
    pub fn clear_bookmarks(&mut self) -> StoreResult<()> {
        self.bookmarks.clear()?;
        if let Some(recipe) = self.recipe.as_mut() {
            recipe.bookmarked = false;
        }
        Ok(())
    }

    /// Scales the open recipe to `servings`.
    pub fn update_servings(&mut self, servings: i64) -> CoreResult<()> {
        self.recipe
            .as_mut()
            .ok_or(CoreError::NoRecipeLoaded)?
            .update_servings(servings)
    }

    pub fn bookmark_list(&self) -> Vec<Bookmark> {
        self.bookmarks.all().to_vec()
    }

    fn sync_flag(&mut self, id: &str, bookmarked: bool) {
        if let Some(recipe) = self.recipe.as_mut().filter(|r| r.id == id) {
            recipe.bookmarked = bookmarked;
        }
    }
}

/// Failure of [`AppState::toggle_bookmark`].
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] forkify_store::StoreError),
}

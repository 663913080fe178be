//! # Recipe Controllers
//!
//! Opening a recipe, rescaling it, and bookmarking it.
//!
//! ## Patch vs. Render
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  control_recipes       full render of .recipe (new recipe)             │
//! │  control_servings      update: quantity texts + servings buttons       │
//! │  control_add_bookmark  update: bookmark icon href only                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use forkify_view::Render;
use tracing::{debug, error, warn};

use crate::error::AppResult;
use crate::state::{AppStateStore, LoadOutcome};
use crate::ui::Ui;

/// Opens recipe `id` (the location hash). An empty id shows the welcome
/// message.
pub async fn control_recipes(store: &AppStateStore, ui: &mut Ui, id: &str) -> AppResult<()> {
    ui.set_location(id);
    let Some(id) = ui.location().map(str::to_string) else {
        ui.recipe.render_initial();
        return Ok(());
    };

    debug!(id = %id, "control_recipes");
    ui.recipe.render_spinner();

    // Move the active highlight in both lists
    let page = ui.results_list(store.search_results_page(None));
    ui.results.update(&page);
    let bookmarks = ui.bookmarks_list(&store.bookmarks());
    ui.bookmarks.update(&bookmarks);

    match store.load_recipe(&id).await {
        Ok(LoadOutcome::Applied) => {
            if let Some(recipe) = store.recipe() {
                ui.recipe.render(&recipe);
            }
            Ok(())
        }
        Ok(LoadOutcome::Stale) => Ok(()),
        Err(err) => {
            error!(id = %id, error = %err, "Failed to load recipe");
            ui.recipe.render_error(None);
            Err(err)
        }
    }
}

/// Rescales the open recipe to `servings` and patches the recipe view.
pub fn control_servings(store: &AppStateStore, ui: &mut Ui, servings: i64) -> AppResult<()> {
    if let Err(err) = store.update_servings(servings) {
        warn!(servings, error = %err, "Servings update rejected");
        ui.alert(err.message.clone());
        return Err(err);
    }

    if let Some(recipe) = store.recipe() {
        ui.recipe.update(&recipe);
    }
    Ok(())
}

/// Bookmarks the open recipe, or removes its bookmark.
pub fn control_add_bookmark(store: &AppStateStore, ui: &mut Ui) -> AppResult<()> {
    if let Err(err) = store.toggle_bookmark() {
        warn!(error = %err, "Bookmark toggle failed");
        ui.alert(err.message.clone());
        return Err(err);
    }

    if let Some(recipe) = store.recipe() {
        ui.recipe.update(&recipe);
    }
    let bookmarks = ui.bookmarks_list(&store.bookmarks());
    ui.bookmarks.render(&bookmarks);
    Ok(())
}

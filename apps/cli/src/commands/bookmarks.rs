//! Bookmark list controllers.

use forkify_view::Render;
use tracing::{error, info};

use crate::error::AppResult;
use crate::state::AppStateStore;
use crate::ui::Ui;

/// Renders the bookmark list. Runs once at startup.
pub fn control_bookmarks(store: &AppStateStore, ui: &mut Ui) {
    let bookmarks = ui.bookmarks_list(&store.bookmarks());
    ui.bookmarks.render(&bookmarks);
}

/// Deletes every bookmark and re-renders the list and the open recipe.
pub fn control_clear_bookmarks(store: &AppStateStore, ui: &mut Ui) -> AppResult<()> {
    if let Err(err) = store.clear_bookmarks() {
        error!(error = %err, "Failed to clear bookmarks");
        ui.alert(err.message.clone());
        return Err(err);
    }

    info!("Bookmarks cleared");
    if let Some(recipe) = store.recipe() {
        ui.recipe.update(&recipe);
    }
    control_bookmarks(store, ui);
    Ok(())
}

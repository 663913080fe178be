//! # Upload Controller
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  spinner (.upload)                                                      │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  upload_recipe(form) ──Err──► form error placeholder                    │
//! │     │ Ok                                                                │
//! │     ▼                                                                   │
//! │  render recipe ─► success message ─► render bookmarks ─► #id            │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  close window after the configured delay                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use forkify_core::upload::RawForm;
use forkify_view::Render;
use tracing::{debug, error};

use crate::error::AppResult;
use crate::state::AppStateStore;
use crate::ui::Ui;

/// Submits the upload form.
///
/// The window closes `close_delay` after success; see [`Ui::tick`] and
/// [`Ui::settle`].
pub async fn control_add_recipe(
    store: &AppStateStore,
    ui: &mut Ui,
    form: &RawForm,
    close_delay: Duration,
) -> AppResult<()> {
    debug!(fields = form.fields().count(), "control_add_recipe");
    ui.add_recipe.render_spinner();

    match store.upload_recipe(form).await {
        Ok(recipe) => {
            ui.recipe.render(&recipe);
            ui.add_recipe.render_message(None);

            let bookmarks = ui.bookmarks_list(&store.bookmarks());
            ui.bookmarks.render(&bookmarks);

            ui.set_location(&recipe.id);
            ui.schedule_close(close_delay);
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "Upload failed");
            ui.add_recipe.render_error(Some(&err.message));
            Err(err)
        }
    }
}

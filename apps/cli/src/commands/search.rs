//! Search and pagination controllers.

use forkify_view::Render;
use tracing::{debug, error, warn};

use crate::error::{AppError, AppResult};
use crate::state::{AppStateStore, LoadOutcome};
use crate::ui::Ui;

/// Runs `query` and shows page 1 of its results. A blank query is ignored.
pub async fn control_search_results(store: &AppStateStore, ui: &mut Ui, query: &str) -> AppResult<()> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(());
    }

    debug!(query, "control_search_results");
    ui.results.render_spinner();

    match store.load_search_results(query).await {
        Ok(LoadOutcome::Applied) => {
            let page = ui.results_list(store.search_results_page(Some(1)));
            ui.results.render(&page);
            ui.pagination.render(&store.search());
            Ok(())
        }
        Ok(LoadOutcome::Stale) => Ok(()),
        Err(err) => {
            error!(query, error = %err, "Search failed");
            ui.results.render_error(None);
            Err(err)
        }
    }
}

/// Shows page `page` of the cached results.
pub fn control_pagination(store: &AppStateStore, ui: &mut Ui, page: usize) -> AppResult<()> {
    let pages = store.search().num_pages().max(1);
    if page == 0 || page > pages {
        warn!(page, pages, "Page out of range");
        let err = AppError::invalid_argument(format!("Page must be between 1 and {}", pages));
        ui.alert(err.message.clone());
        return Err(err);
    }

    let items = ui.results_list(store.search_results_page(Some(page)));
    ui.results.render(&items);
    ui.pagination.render(&store.search());
    Ok(())
}

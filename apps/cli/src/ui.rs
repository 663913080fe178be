//! # Terminal UI Surface
//!
//! The five views of the page plus the bits of browser chrome the
//! controllers touch: the location hash, alerts, and the delayed close of
//! the upload window.

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use forkify_core::{Bookmark, SearchResultItem};
use forkify_view::{
    AddRecipeView, BookmarksView, Container, PaginationView, PreviewList, RecipeView, Render,
    ResultsView,
};
use tracing::debug;

/// Live views and page-level state of one session.
pub struct Ui {
    pub recipe: RecipeView,
    pub results: ResultsView,
    pub pagination: PaginationView,
    pub bookmarks: BookmarksView,
    pub add_recipe: AddRecipeView,

    /// Recipe id in the location hash.
    location: Option<String>,

    /// Last alert not yet shown.
    alert: Option<String>,

    /// When the upload window closes.
    close_at: Option<Instant>,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    /// Creates the page with the recipe area on its welcome message and the
    /// upload form in place.
    pub fn new() -> Self {
        let mut ui = Ui {
            recipe: RecipeView::default(),
            results: ResultsView::default(),
            pagination: PaginationView::default(),
            bookmarks: BookmarksView::default(),
            add_recipe: AddRecipeView::default(),
            location: None,
            alert: None,
            close_at: None,
        };
        ui.recipe.render_initial();
        ui.add_recipe.render(&());
        ui
    }

    // =========================================================================
    // Location
    // =========================================================================

    /// Id in the location hash, if any.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Sets the hash to `#id`. An empty id clears it.
    pub fn set_location(&mut self, id: &str) {
        let id = id.trim_start_matches('#');
        self.location = (!id.is_empty()).then(|| id.to_string());
    }

    /// Results list with the open recipe highlighted.
    pub fn results_list(&self, items: Vec<SearchResultItem>) -> PreviewList {
        PreviewList::new(items, self.location())
    }

    /// Bookmark list with the open recipe highlighted.
    pub fn bookmarks_list(&self, bookmarks: &[Bookmark]) -> PreviewList {
        PreviewList::from_recipes(bookmarks, self.location())
    }

    // =========================================================================
    // Alerts
    // =========================================================================

    pub fn alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    /// Returns and clears the pending alert.
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    // =========================================================================
    // Upload Window
    // =========================================================================

    /// Opens the upload window on a fresh form.
    pub fn open_upload_window(&mut self) {
        self.add_recipe.render(&());
        if !self.add_recipe.is_window_open() {
            self.add_recipe.toggle_window();
        }
        self.close_at = None;
    }

    /// Closes the upload window once `delay` has passed.
    pub fn schedule_close(&mut self, delay: Duration) {
        self.close_at = Some(Instant::now() + delay);
    }

    /// Applies a due close. Returns whether the window was closed.
    pub fn tick(&mut self) -> bool {
        match self.close_at {
            Some(at) if Instant::now() >= at => {
                self.close_at = None;
                if self.add_recipe.is_window_open() {
                    self.add_recipe.toggle_window();
                    debug!("Upload window closed");
                    return true;
                }
                false
            }
            _ => false,
        }
    }

    /// Waits for a scheduled close, then applies it.
    pub async fn settle(&mut self) {
        if let Some(at) = self.close_at {
            tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await;
            self.tick();
        }
    }

    pub fn close_pending(&self) -> bool {
        self.close_at.is_some()
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Every container, in page order.
    pub fn containers(&self) -> [&Container; 5] {
        [
            self.results.container(),
            self.pagination.container(),
            self.recipe.container(),
            self.bookmarks.container(),
            self.add_recipe.container(),
        ]
    }

    /// Renders `containers` as `[selector]` headed HTML blocks.
    pub fn dump(containers: &[&Container]) -> String {
        let mut out = String::new();
        for container in containers {
            let _ = writeln!(out, "[{}]", container.selector());
            let _ = writeln!(out, "{}", container);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forkify_view::view::INITIAL_MESSAGE;

    #[test]
    fn test_new_page() {
        let ui = Ui::new();
        assert_eq!(ui.recipe.container().text_content(), INITIAL_MESSAGE);
        assert!(ui.add_recipe.container().to_html().contains("name=\"ingredient-1\""));
        assert!(!ui.add_recipe.is_window_open());
        assert!(ui.location().is_none());
    }

    #[test]
    fn test_location_strips_hash() {
        let mut ui = Ui::new();
        ui.set_location("#abc");
        assert_eq!(ui.location(), Some("abc"));

        ui.set_location("");
        assert_eq!(ui.location(), None);
    }

    #[test]
    fn test_due_close_toggles_window() {
        let mut ui = Ui::new();
        ui.open_upload_window();
        assert!(ui.add_recipe.is_window_open());

        ui.schedule_close(Duration::ZERO);
        assert!(ui.tick());
        assert!(!ui.add_recipe.is_window_open());
        assert!(!ui.close_pending());
    }

    #[test]
    fn test_future_close_waits() {
        let mut ui = Ui::new();
        ui.open_upload_window();
        ui.schedule_close(Duration::from_secs(60));

        assert!(!ui.tick());
        assert!(ui.add_recipe.is_window_open());
    }

    #[tokio::test]
    async fn test_settle_applies_close() {
        let mut ui = Ui::new();
        ui.open_upload_window();
        ui.schedule_close(Duration::from_millis(5));

        ui.settle().await;
        assert!(!ui.add_recipe.is_window_open());
    }

    #[test]
    fn test_dump_heads_each_container() {
        let ui = Ui::new();
        let out = Ui::dump(&[ui.recipe.container()]);
        assert!(out.starts_with("[.recipe]\n<div class=\"message\">"));
    }
}

//! # Controllers
//!
//! One controller per UI event. Each drives the store, then brings the
//! affected views up to date.
//!
//! ## Controller Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── recipe.rs     ◄─── control_recipes, control_servings, control_add_bookmark
//! ├── search.rs     ◄─── control_search_results, control_pagination
//! ├── bookmarks.rs  ◄─── control_bookmarks, control_clear_bookmarks
//! └── upload.rs     ◄─── control_add_recipe
//! ```
//!
//! ## Controller Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UiEvent ──► control_*(store, ui, ..)                                   │
//! │                  │                                                      │
//! │                  ├── spinner on the target view                         │
//! │                  ├── AppStateStore operation                            │
//! │                  │       Applied ─► render / update views               │
//! │                  │       Stale   ─► nothing (a newer request renders)   │
//! │                  │       Err     ─► error placeholder, Err returned     │
//! │                  ▼                                                      │
//! │              AppResult<()>                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors are rendered before they are returned, so callers only decide
//! about exit status.

mod bookmarks;
mod recipe;
mod search;
mod upload;

pub use bookmarks::{control_bookmarks, control_clear_bookmarks};
pub use recipe::{control_add_bookmark, control_recipes, control_servings};
pub use search::{control_pagination, control_search_results};
pub use upload::control_add_recipe;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::testing::{raw_recipe, store_with, upload_form, MockApi};
    use crate::ui::Ui;
    use forkify_view::view::INITIAL_MESSAGE;
    use forkify_view::Render;
    use std::time::Duration;

    fn entries(html: &str) -> usize {
        html.matches("class=\"preview\"").count()
    }

    #[tokio::test]
    async fn test_empty_location_shows_welcome() {
        let (store, api) = store_with(MockApi::default(), 10);
        let mut ui = Ui::new();

        control_recipes(&store, &mut ui, "").await.unwrap();
        assert_eq!(ui.recipe.container().text_content(), INITIAL_MESSAGE);
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_open_recipe_renders_detail() {
        let (store, _) = store_with(MockApi::default().with_recipe(raw_recipe("a")), 10);
        let mut ui = Ui::new();

        control_recipes(&store, &mut ui, "#a").await.unwrap();
        let html = ui.recipe.container().to_html();
        assert!(html.contains("Recipe a"));
        assert!(html.contains("icon-bookmark\""));
        assert_eq!(ui.location(), Some("a"));
    }

    #[tokio::test]
    async fn test_unknown_recipe_renders_error() {
        let (store, _) = store_with(MockApi::default(), 10);
        let mut ui = Ui::new();

        let err = control_recipes(&store, &mut ui, "nope").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RequestFailed);
        assert_eq!(
            ui.recipe.container().text_content(),
            "We could not find that recipe. Please try another one!"
        );
    }

    #[tokio::test]
    async fn test_search_then_paginate() {
        let (store, _) = store_with(MockApi::default().with_search("pizza", 15), 10);
        let mut ui = Ui::new();

        control_search_results(&store, &mut ui, "  pizza ").await.unwrap();
        assert_eq!(entries(&ui.results.container().to_html()), 10);
        let pagination = ui.pagination.container().to_html();
        assert!(pagination.contains("data-goto=\"2\""));
        assert!(!pagination.contains("pagination__btn--prev"));

        control_pagination(&store, &mut ui, 2).unwrap();
        assert_eq!(entries(&ui.results.container().to_html()), 5);
        assert!(ui.pagination.container().to_html().contains("data-goto=\"1\""));

        let err = control_pagination(&store, &mut ui, 3).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert!(ui.take_alert().is_some());
    }

    #[tokio::test]
    async fn test_blank_query_is_ignored() {
        let (store, api) = store_with(MockApi::default(), 10);
        let mut ui = Ui::new();

        control_search_results(&store, &mut ui, "   ").await.unwrap();
        assert_eq!(api.calls(), 0);
        assert!(ui.results.container().is_empty());
    }

    #[tokio::test]
    async fn test_empty_search_shows_no_results() {
        let (store, _) = store_with(MockApi::default(), 10);
        let mut ui = Ui::new();

        control_search_results(&store, &mut ui, "xyz").await.unwrap();
        assert_eq!(
            ui.results.container().text_content(),
            "No results for your query. Search another!"
        );
    }

    #[tokio::test]
    async fn test_opening_result_moves_highlight() {
        let api = MockApi::default()
            .with_search("pizza", 3)
            .with_recipe(raw_recipe("pizza-1"));
        let (store, _) = store_with(api, 10);
        let mut ui = Ui::new();

        control_search_results(&store, &mut ui, "pizza").await.unwrap();
        let renders = ui.results.container().full_renders();

        control_recipes(&store, &mut ui, "pizza-1").await.unwrap();
        let html = ui.results.container().to_html();
        assert_eq!(html.matches("preview__link--active").count(), 1);
        assert!(html.contains("preview__link preview__link--active\" href=\"#pizza-1\""));
        assert_eq!(ui.results.container().full_renders(), renders);
    }

    #[tokio::test]
    async fn test_servings_patch_in_place() {
        let (store, _) = store_with(MockApi::default().with_recipe(raw_recipe("a")), 10);
        let mut ui = Ui::new();
        control_recipes(&store, &mut ui, "a").await.unwrap();
        let renders = ui.recipe.container().full_renders();

        control_servings(&store, &mut ui, 8).unwrap();
        let html = ui.recipe.container().to_html();
        assert!(html.contains("data-update-to=\"9\""));
        assert!(html.contains(">4</div>"));
        assert_eq!(ui.recipe.container().full_renders(), renders);

        let err = control_servings(&store, &mut ui, 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert!(ui.take_alert().unwrap().contains("positive"));
        assert_eq!(store.recipe().unwrap().servings, 8);
    }

    #[tokio::test]
    async fn test_bookmark_toggle_updates_views() {
        let (store, _) = store_with(MockApi::default().with_recipe(raw_recipe("a")), 10);
        let mut ui = Ui::new();
        control_bookmarks(&store, &mut ui);
        assert!(ui.bookmarks.container().text_content().starts_with("No bookmarks yet"));

        control_recipes(&store, &mut ui, "a").await.unwrap();
        control_add_bookmark(&store, &mut ui).unwrap();

        assert!(ui.recipe.container().to_html().contains("icon-bookmark-fill"));
        assert_eq!(entries(&ui.bookmarks.container().to_html()), 1);

        control_add_bookmark(&store, &mut ui).unwrap();
        assert!(!ui.recipe.container().to_html().contains("icon-bookmark-fill"));
        assert!(store.bookmarks().is_empty());
    }

    #[tokio::test]
    async fn test_clear_bookmarks() {
        let (store, _) = store_with(MockApi::default().with_recipe(raw_recipe("a")), 10);
        let mut ui = Ui::new();
        control_recipes(&store, &mut ui, "a").await.unwrap();
        control_add_bookmark(&store, &mut ui).unwrap();

        control_clear_bookmarks(&store, &mut ui).unwrap();
        assert!(ui.bookmarks.container().text_content().starts_with("No bookmarks yet"));
        assert!(!store.recipe().unwrap().bookmarked);
    }

    #[tokio::test]
    async fn test_upload_success_flow() {
        let (store, _) = store_with(MockApi::default(), 10);
        let mut ui = Ui::new();
        ui.open_upload_window();

        control_add_recipe(&store, &mut ui, &upload_form(), Duration::ZERO)
            .await
            .unwrap();

        assert!(ui.recipe.container().to_html().contains("Rice Bowl"));
        assert_eq!(
            ui.add_recipe.container().text_content(),
            "Recipe was uploaded successfully :)"
        );
        assert_eq!(entries(&ui.bookmarks.container().to_html()), 1);
        assert_eq!(ui.location(), Some("uploaded-1"));

        assert!(ui.add_recipe.is_window_open());
        ui.settle().await;
        assert!(!ui.add_recipe.is_window_open());
    }

    #[tokio::test]
    async fn test_upload_error_shows_in_form() {
        let (store, api) = store_with(MockApi::default(), 10);
        let mut ui = Ui::new();
        let form = upload_form().with("ingredient-3", "kg,Rice");

        let err = control_add_recipe(&store, &mut ui, &form, Duration::ZERO)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(api.calls(), 0);
        assert!(ui
            .add_recipe
            .container()
            .text_content()
            .contains("Quantity,Unit,Description"));
        assert!(!ui.close_pending());
    }
}

//! # forkify-view: Rendering & Reconciliation
//!
//! Host-agnostic view layer of Forkify.
//!
//! ## Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          forkify-view                                   │
//! │                                                                         │
//! │  views/*      RecipeView, ResultsView, BookmarksView, PaginationView,   │
//! │               AddRecipeView  (ViewKind: markup + default messages)      │
//! │                   │                                                     │
//! │  view         View<K>: render / update / markup / placeholders          │
//! │                   │                                                     │
//! │  reconcile    lock-step pre-order patching of a live container          │
//! │                   │                                                     │
//! │  container    live output region of one view                            │
//! │  node         Element / Text tree, HTML output                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A browser host maps [`Node`] onto real DOM elements. The CLI host prints
//! each [`Container`] as HTML.
//!
//! ## Example
//! ```rust
//! use forkify_view::{Render, ResultsView, PreviewList};
//!
//! let mut results = ResultsView::default();
//! results.render(&PreviewList::default());
//! assert!(results.container().text_content().starts_with("No results"));
//! ```

pub mod container;
pub mod node;
pub mod reconcile;
pub mod view;
pub mod views;

pub use container::Container;
pub use node::{el, text, Element, Node};
pub use reconcile::{reconcile, PatchStats, Reconciliation};
pub use view::{Render, View, ViewData, ViewKind};
pub use views::{
    AddRecipeView, BookmarksView, PaginationView, PreviewList, RecipeView, ResultsView,
};

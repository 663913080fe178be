//! # forkify-core: Pure Domain Logic for Forkify
//!
//! This crate is the **heart** of Forkify. It contains all recipe logic as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Forkify Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Views (forkify-view)                            │   │
//! │  │    Results ──► Pagination ──► Recipe ──► Bookmarks ──► Upload   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ render / update                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 AppStateStore (apps/cli)                        │   │
//! │  │    load_recipe, load_search_results, update_servings, ...       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ forkify-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ servings  │  │pagination │  │  upload   │  │   │
//! │  │   │  Recipe   │  │  scaling  │  │  windows  │  │ form rules│  │   │
//! │  │   │Ingredient │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Recipe, Ingredient, SearchState, etc.)
//! - [`payload`] - Wire payloads and their normalization into domain types
//! - [`servings`] - Proportional ingredient scaling
//! - [`pagination`] - Page windows over cached search results
//! - [`upload`] - User-submitted recipe form parsing and validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use forkify_core::pagination::page_window;
//!
//! // 5 results, 3 per page: page 2 holds items 3 and 4
//! assert_eq!(page_window(5, 2, 3), 3..5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pagination;
pub mod payload;
pub mod servings;
pub mod types;
pub mod upload;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default number of search results shown per page.
pub const RESULTS_PER_PAGE: usize = 10;

/// Storage key holding the serialized bookmark sequence.
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Form fields whose name starts with this prefix are ingredient lines.
pub const INGREDIENT_FIELD_PREFIX: &str = "ingredient";

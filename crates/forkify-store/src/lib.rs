//! # forkify-store: Persistence Layer for Forkify
//!
//! The bookmark set and the key-value storage it writes through.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Forkify Data Flow                                │
//! │                                                                         │
//! │  AppStateStore::add_bookmark / delete_bookmark                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 forkify-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   BookmarkStore ──persist──► KeyValueStorage                    │   │
//! │  │                                 ├── MemoryStorage               │   │
//! │  │                                 └── FileStorage                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data_dir>/bookmarks.json                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`storage`] - Storage contract and backends
//! - [`bookmarks`] - The persisted bookmark set
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use forkify_store::{BookmarkStore, MemoryStorage};
//!
//! let store = BookmarkStore::restore(Arc::new(MemoryStorage::new()), "bookmarks").unwrap();
//! assert!(store.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bookmarks;
pub mod error;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use bookmarks::BookmarkStore;
pub use error::{StoreError, StoreResult};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};

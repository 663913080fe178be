//! # State Module
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  AppStateStore                                                  │   │
//! │  │    Arc<Mutex<AppState>>   Arc<dyn RecipeApi>   generations      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │   recipe     │  │   search     │  │   bookmarks      │              │
//! │  │ Option<      │  │ SearchState  │  │  BookmarkStore   │              │
//! │  │   Recipe>    │  │              │  │  (write-through) │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod app_state;
mod store;

pub use app_state::{AppState, ToggleError};
pub use store::{AppStateStore, LoadOutcome};

#[cfg(test)]
pub(crate) use store::tests as testing;

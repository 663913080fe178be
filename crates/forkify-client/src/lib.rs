//! # forkify-client: Remote Data Client for Forkify
//!
//! Fetches recipes and search results from the recipe service and submits
//! new recipes.
//!
//! ## Modules
//!
//! - [`api`] - The `RecipeApi` contract
//! - [`http`] - reqwest implementation with a timeout race
//! - [`config`] - Endpoint, key and timeouts
//! - [`error`] - Client error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forkify_client::{ClientConfig, HttpClient, RecipeApi};
//!
//! let client = HttpClient::new(ClientConfig::default())?;
//! let hits = client.fetch_search("pizza").await?;
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::RecipeApi;
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

//! # HTTP Client
//!
//! [`RecipeApi`] over reqwest.
//!
//! ## Timeout Race
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tokio::time::timeout(config.timeout, send + read body)                 │
//! │        │                                                                │
//! │        ├── request first  → status check → JSON decode                  │
//! │        └── timer first    → ClientError::Timeout, request dropped       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Status Mapping
//! ```text
//! 2xx        → decode envelope
//! 404        → NotFound { message }
//! other      → Request { message, status }
//!              message from { "status": "fail", "message": ... } if present
//! ```

use async_trait::async_trait;
use forkify_core::payload::{
    FailureBody, NewRecipe, RawRecipe, RawSearchItem, RecipeEnvelope, SearchEnvelope,
};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::RecipeApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Network implementation of [`RecipeApi`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Builds the client. Fails only if the TLS backend cannot initialize.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("forkify/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpClient { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // =========================================================================
    // URL Construction
    // =========================================================================

    fn base(&self) -> ClientResult<Url> {
        Url::parse(&self.config.base_url)
            .map_err(|e| ClientError::Transport(format!("Invalid API URL '{}': {}", self.config.base_url, e)))
    }

    fn with_params(mut url: Url, params: &[(&str, &str)]) -> Url {
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
        }
        url
    }

    fn key_param(&self) -> Vec<(&str, &str)> {
        self.config
            .api_key
            .as_deref()
            .map(|key| vec![("key", key)])
            .unwrap_or_default()
    }

    /// `{base}/{id}?key=`
    pub fn recipe_url(&self, id: &str) -> ClientResult<Url> {
        let mut url = self.base()?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Transport(format!("API URL cannot take a path: {}", self.config.base_url)))?
            .pop_if_empty()
            .push(id);
        Ok(Self::with_params(url, &self.key_param()))
    }

    /// `{base}?search={query}&key=`
    pub fn search_url(&self, query: &str) -> ClientResult<Url> {
        let mut params = vec![("search", query)];
        params.extend(self.key_param());
        Ok(Self::with_params(self.base()?, &params))
    }

    /// `{base}?key=`
    pub fn upload_url(&self) -> ClientResult<Url> {
        Ok(Self::with_params(self.base()?, &self.key_param()))
    }

    // =========================================================================
    // Execution
    // =========================================================================

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.bytes().await?;

            if !status.is_success() {
                return Err(failure(status, &body));
            }
            Ok::<T, ClientError>(serde_json::from_slice(&body)?)
        };

        match tokio::time::timeout(self.config.timeout, exchange).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout = ?self.config.timeout, "Request timed out");
                Err(ClientError::Timeout {
                    secs: self.config.timeout.as_secs_f64(),
                })
            }
        }
    }
}

/// Maps a failure status and body to a [`ClientError`].
fn failure(status: StatusCode, body: &[u8]) -> ClientError {
    let parsed: FailureBody = serde_json::from_slice(body).unwrap_or_default();
    let message = if parsed.message.is_empty() {
        status.canonical_reason().unwrap_or("Request failed").to_string()
    } else {
        parsed.message
    };

    if status == StatusCode::NOT_FOUND {
        ClientError::NotFound { message }
    } else {
        ClientError::Request {
            message,
            status: status.as_u16(),
        }
    }
}

#[async_trait]
impl RecipeApi for HttpClient {
    async fn fetch_recipe(&self, id: &str) -> ClientResult<RawRecipe> {
        let url = self.recipe_url(id)?;
        debug!(%url, "Fetching recipe");

        let envelope: RecipeEnvelope = self.execute(self.http.get(url)).await?;
        Ok(envelope.data.recipe)
    }

    async fn fetch_search(&self, query: &str) -> ClientResult<Vec<RawSearchItem>> {
        let url = self.search_url(query)?;
        debug!(%url, "Searching recipes");

        let envelope: SearchEnvelope = self.execute(self.http.get(url)).await?;
        debug!(results = envelope.results, "Search complete");
        Ok(envelope.data.recipes)
    }

    async fn submit_recipe(&self, recipe: &NewRecipe) -> ClientResult<RawRecipe> {
        let url = self.upload_url()?;
        debug!(%url, title = %recipe.title, "Submitting recipe");

        let envelope: RecipeEnvelope = self.execute(self.http.post(url).json(recipe)).await?;
        Ok(envelope.data.recipe)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

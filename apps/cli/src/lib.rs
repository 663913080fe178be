//! # Forkify CLI Library
//!
//! Terminal host of the Forkify recipe client. Builds the state store and
//! the views, then drives the controllers from a subcommand or an
//! interactive shell.
//!
//! ## Module Organization
//! ```text
//! forkify_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap definitions
//! ├── config.rs       ◄─── AppConfig (toml + FORKIFY_* env)
//! ├── error.rs        ◄─── AppError for controllers
//! ├── state/
//! │   ├── mod.rs      ◄─── State exports
//! │   ├── app_state.rs◄─── recipe, search, bookmarks
//! │   └── store.rs    ◄─── AppStateStore + generation guard
//! ├── commands/       ◄─── control_* controllers
//! ├── ui.rs           ◄─── the five views + location hash
//! └── shell.rs        ◄─── UiEvent parsing and read loop
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod shell;
pub mod state;
pub mod ui;

use std::sync::Arc;

use forkify_client::HttpClient;
use forkify_store::{BookmarkStore, FileStorage};
use forkify_view::views::{AddRecipe, BookmarkList, Pagination, RecipeDetail, SearchResults};
use forkify_view::ViewKind;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::AppConfig;
use error::AppResult;
use state::AppStateStore;
use ui::Ui;

/// Runs the CLI.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → forkify.toml → FORKIFY_* env → validate                │
/// │                                                                         │
/// │  2. Restore Bookmarks ────────────────────────────────────────────────► │
/// │     • Linux: ~/.local/share/forkify/bookmarks.json                      │
/// │     • Malformed file: empty set + warning                               │
/// │                                                                         │
/// │  3. Build State Store ────────────────────────────────────────────────► │
/// │     • HttpClient (reqwest, timeout race)                                │
/// │                                                                         │
/// │  4. Render Bookmarks, then run the subcommand                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> AppResult<()> {
    let config = AppConfig::load(cli.config.clone())?;
    let data_dir = config.data_dir()?;
    info!(?data_dir, api = %config.api.url, "Starting Forkify");

    let storage = FileStorage::open(data_dir)?;
    let bookmarks = BookmarkStore::restore(Arc::new(storage), config.storage.bookmarks_key.clone())?;
    let client = HttpClient::new(config.client_config())?;
    let store = AppStateStore::new(Arc::new(client), bookmarks, config.ui.results_per_page);

    let mut ui = Ui::new();
    commands::control_bookmarks(&store, &mut ui);

    execute(cli.command, &store, &mut ui, &config).await
}

/// Runs one subcommand and prints the containers it touched.
pub async fn execute(
    command: Commands,
    store: &AppStateStore,
    ui: &mut Ui,
    config: &AppConfig,
) -> AppResult<()> {
    let outcome = match command {
        Commands::Search { query, page } => {
            let mut outcome = commands::control_search_results(store, ui, &query).await;
            if outcome.is_ok() && page != 1 {
                outcome = commands::control_pagination(store, ui, page);
            }
            print(ui, &[SearchResults::CONTAINER, Pagination::CONTAINER]);
            outcome
        }

        Commands::Recipe {
            id,
            servings,
            toggle_bookmark,
        } => {
            let mut outcome = commands::control_recipes(store, ui, &id).await;
            if let (Ok(()), Some(n)) = (&outcome, servings) {
                outcome = commands::control_servings(store, ui, n);
            }
            if outcome.is_ok() && toggle_bookmark {
                outcome = commands::control_add_bookmark(store, ui);
            }
            print(ui, &[RecipeDetail::CONTAINER, BookmarkList::CONTAINER]);
            outcome
        }

        Commands::Bookmarks { clear } => {
            let outcome = if clear {
                commands::control_clear_bookmarks(store, ui)
            } else {
                Ok(())
            };
            print(ui, &[BookmarkList::CONTAINER]);
            outcome
        }

        Commands::Upload { fields } => {
            let form = shell::parse_form(fields.iter().map(String::as_str))?;
            ui.open_upload_window();
            let outcome =
                commands::control_add_recipe(store, ui, &form, config.modal_close_delay()).await;
            print(
                ui,
                &[RecipeDetail::CONTAINER, BookmarkList::CONTAINER, AddRecipe::CONTAINER],
            );
            ui.settle().await;
            outcome
        }

        Commands::Shell => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            shell::run(stdin, &mut stdout, store, ui, config.modal_close_delay()).await
        }
    };

    if let Err(err) = &outcome {
        tracing::error!(code = ?err.code, "{}", err.message);
    }
    outcome
}

/// Prints the pending alert and the containers named by `selectors`.
fn print(ui: &mut Ui, selectors: &[&str]) {
    if let Some(alert) = ui.take_alert() {
        println!("! {}", alert);
    }
    let containers: Vec<_> = ui
        .containers()
        .into_iter()
        .filter(|c| selectors.contains(&c.selector()))
        .collect();
    print!("{}", Ui::dump(&containers));
}

/// Initializes tracing. `RUST_LOG` overrides the default filter. Logs go to
/// stderr so container output on stdout stays clean.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,forkify=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

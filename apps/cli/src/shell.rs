//! # Interactive Shell
//!
//! Reads one UI event per line and prints every container the event
//! changed.
//!
//! ## Event Syntax
//! ```text
//! search <query>                 submit the search form
//! page <n>                       click a pagination button
//! open <id> | #<id>              change the location hash
//! servings <n>                   click a servings button
//! bookmark                       click the bookmark button
//! bookmarks                      re-render the bookmark list
//! clear-bookmarks                delete every bookmark
//! form                           open the upload window
//! upload k=v; k=v; ...           submit the upload form
//! show                           print the whole page
//! help                           list events
//! quit | exit                    leave the shell
//! ```

use std::io::Write;
use std::str::FromStr;
use std::time::Duration;

use forkify_core::upload::RawForm;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::commands;
use crate::error::{AppError, AppResult};
use crate::state::AppStateStore;
use crate::ui::Ui;

const HELP: &str = "events: search <query> | page <n> | open <id> | servings <n> | bookmark | \
bookmarks | clear-bookmarks | form | upload k=v; k=v; ... | show | help | quit";

// =============================================================================
// UI Events
// =============================================================================

/// A user interaction with the page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Search(String),
    Page(usize),
    Open(String),
    Servings(i64),
    ToggleBookmark,
    Bookmarks,
    ClearBookmarks,
    OpenForm,
    Upload(RawForm),
    Show,
    Help,
    Quit,
}

impl FromStr for UiEvent {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if let Some(id) = line.strip_prefix('#') {
            return Ok(UiEvent::Open(id.trim().to_string()));
        }

        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match name.to_lowercase().as_str() {
            "search" => Ok(UiEvent::Search(rest.to_string())),
            "page" => Ok(UiEvent::Page(number(name, rest)?)),
            "open" => Ok(UiEvent::Open(rest.to_string())),
            "servings" => Ok(UiEvent::Servings(number(name, rest)?)),
            "bookmark" => Ok(UiEvent::ToggleBookmark),
            "bookmarks" => Ok(UiEvent::Bookmarks),
            "clear-bookmarks" => Ok(UiEvent::ClearBookmarks),
            "form" => Ok(UiEvent::OpenForm),
            "upload" => Ok(UiEvent::Upload(parse_form(rest.split(';'))?)),
            "show" => Ok(UiEvent::Show),
            "help" => Ok(UiEvent::Help),
            "quit" | "exit" => Ok(UiEvent::Quit),
            other => Err(AppError::invalid_argument(format!(
                "Unknown event '{}'. Type 'help' for the list",
                other
            ))),
        }
    }
}

fn number<T: FromStr>(event: &str, value: &str) -> AppResult<T> {
    value
        .parse()
        .map_err(|_| AppError::invalid_argument(format!("{} expects a number, got '{}'", event, value)))
}

/// Builds a form from `name=value` pairs. Blank pairs are skipped.
pub fn parse_form<'a, I>(pairs: I) -> AppResult<RawForm>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut form = RawForm::new();
    for pair in pairs.into_iter().map(str::trim).filter(|p| !p.is_empty()) {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| AppError::invalid_argument(format!("Expected name=value, got '{}'", pair)))?;
        form.push(name.trim(), value.trim());
    }
    Ok(form)
}

// =============================================================================
// Dispatch
// =============================================================================

/// Whether the shell keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Routes `event` to its controller.
pub async fn dispatch(
    store: &AppStateStore,
    ui: &mut Ui,
    event: UiEvent,
    close_delay: Duration,
) -> AppResult<Flow> {
    debug!(?event, "Dispatching UI event");

    match event {
        UiEvent::Search(query) => commands::control_search_results(store, ui, &query).await?,
        UiEvent::Page(page) => commands::control_pagination(store, ui, page)?,
        UiEvent::Open(id) => commands::control_recipes(store, ui, &id).await?,
        UiEvent::Servings(n) => commands::control_servings(store, ui, n)?,
        UiEvent::ToggleBookmark => commands::control_add_bookmark(store, ui)?,
        UiEvent::Bookmarks => commands::control_bookmarks(store, ui),
        UiEvent::ClearBookmarks => commands::control_clear_bookmarks(store, ui)?,
        UiEvent::OpenForm => ui.open_upload_window(),
        UiEvent::Upload(form) => commands::control_add_recipe(store, ui, &form, close_delay).await?,
        UiEvent::Show | UiEvent::Help => {}
        UiEvent::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

// =============================================================================
// Read Loop
// =============================================================================

/// Runs the shell until `quit` or end of input.
pub async fn run<R, W>(
    input: R,
    out: &mut W,
    store: &AppStateStore,
    ui: &mut Ui,
    close_delay: Duration,
) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let io_err = |e: std::io::Error| AppError::internal(e.to_string());
    let mut lines = input.lines();

    writeln!(out, "{}", HELP).map_err(io_err)?;
    info!("Shell started");

    while let Some(line) = lines.next_line().await.map_err(io_err)? {
        if line.trim().is_empty() {
            continue;
        }
        ui.tick();

        let event = match line.parse::<UiEvent>() {
            Ok(event) => event,
            Err(err) => {
                writeln!(out, "! {}", err).map_err(io_err)?;
                continue;
            }
        };

        let show_all = matches!(event, UiEvent::Show);
        let show_help = matches!(event, UiEvent::Help);
        let before: Vec<String> = ui.containers().iter().map(|c| c.to_html()).collect();

        let flow = match dispatch(store, ui, event, close_delay).await {
            Ok(flow) => flow,
            Err(err) => {
                debug!(code = ?err.code, "Event failed");
                Flow::Continue
            }
        };

        if let Some(alert) = ui.take_alert() {
            writeln!(out, "! {}", alert).map_err(io_err)?;
        }
        if show_help {
            writeln!(out, "{}", HELP).map_err(io_err)?;
        }

        let changed: Vec<_> = ui
            .containers()
            .into_iter()
            .zip(&before)
            .filter(|(c, old)| show_all || c.to_html() != **old)
            .map(|(c, _)| c)
            .collect();
        if !changed.is_empty() {
            write!(out, "{}", Ui::dump(&changed)).map_err(io_err)?;
        }

        if flow == Flow::Quit {
            break;
        }
    }

    info!("Shell finished");
    Ok(())
}

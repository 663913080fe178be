//! # View Base
//!
//! Shared rendering behavior for every view kind.
//!
//! ## Render Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          View<K: ViewKind>                              │
//! │                                                                         │
//! │  render(data)   blank? ──yes──► render_error(default message)          │
//! │                   │ no                                                  │
//! │                   ▼                                                     │
//! │                 store data → K::generate_markup → container.replace    │
//! │                                                                         │
//! │  update(data)   store data → K::generate_markup → reconcile(live, new) │
//! │                                                                         │
//! │  markup(data)   K::generate_markup only, container untouched           │
//! │                                                                         │
//! │  render_spinner / render_initial / render_error / render_message       │
//! │                 fixed placeholder → container.replace                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A [`ViewKind`] supplies the markup and default messages; [`View`]
//! supplies everything else through the [`Render`] trait.

use forkify_core::{Recipe, SearchState};
use tracing::debug;

use crate::container::Container;
use crate::node::{el, Element, Node};
use crate::reconcile::{reconcile, Reconciliation};

/// Sprite sheet the icon references point into.
pub const ICONS: &str = "img/icons.svg";

/// Initial placeholder text of the recipe area.
pub const INITIAL_MESSAGE: &str = "Start by searching for a recipe or an ingredient. Have fun!";

/// Builds `<svg><use href="{ICONS}#icon-{name}"></use></svg>`.
pub fn icon(name: &str) -> Element {
    el("svg").child(el("use").attr("href", format!("{}#icon-{}", ICONS, name)))
}

// =============================================================================
// View Data
// =============================================================================

/// Data a view can render.
///
/// Blank data (absent, or an empty sequence) renders the error placeholder
/// instead of content.
pub trait ViewData {
    fn is_blank(&self) -> bool;
}

impl<T> ViewData for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: ViewData> ViewData for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().map_or(true, ViewData::is_blank)
    }
}

impl ViewData for Recipe {
    fn is_blank(&self) -> bool {
        self.id.is_empty()
    }
}

impl ViewData for SearchState {
    fn is_blank(&self) -> bool {
        false
    }
}

impl ViewData for () {
    fn is_blank(&self) -> bool {
        false
    }
}

// =============================================================================
// View Kind
// =============================================================================

/// What distinguishes one view from another.
pub trait ViewKind {
    type Data: ViewData + Clone;

    /// Selector of the container the view owns.
    const CONTAINER: &'static str;

    /// Builds the content markup for `data`.
    fn generate_markup(&self, data: &Self::Data) -> Vec<Node>;

    /// Default text of the error placeholder.
    fn error_message(&self) -> &str {
        "Something went wrong. Please try again!"
    }

    /// Default text of the success placeholder.
    fn message(&self) -> &str {
        ""
    }
}

// =============================================================================
// Render Capability
// =============================================================================

/// Rendering operations every view offers.
pub trait Render {
    type Data;

    /// Full render. Blank data shows the error placeholder.
    fn render(&mut self, data: &Self::Data);

    /// Patches the live container to match `data`.
    fn update(&mut self, data: &Self::Data) -> Reconciliation;

    fn render_spinner(&mut self);

    fn render_initial(&mut self);

    /// Shows the error placeholder, with the view's default text if `None`.
    fn render_error(&mut self, message: Option<&str>);

    /// Shows the success placeholder, with the view's default text if `None`.
    fn render_message(&mut self, message: Option<&str>);

    fn container(&self) -> &Container;
}

/// A view: a kind, its container, and the data last rendered.
pub struct View<K: ViewKind> {
    kind: K,
    container: Container,
    data: Option<K::Data>,
}

impl<K: ViewKind + Default> Default for View<K> {
    fn default() -> Self {
        View::new(K::default())
    }
}

impl<K: ViewKind> View<K> {
    pub fn new(kind: K) -> Self {
        View {
            kind,
            container: Container::new(K::CONTAINER),
            data: None,
        }
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut K {
        &mut self.kind
    }

    /// Data of the last `render` or `update`.
    pub fn data(&self) -> Option<&K::Data> {
        self.data.as_ref()
    }

    /// Generates markup for `data` without touching the container.
    ///
    /// Blank data yields no nodes.
    pub fn markup(&self, data: &K::Data) -> Vec<Node> {
        if data.is_blank() {
            return Vec::new();
        }
        self.kind.generate_markup(data)
    }

    fn placeholder(&mut self, class: &str, icon_name: &str, message: Option<&str>) {
        let mut body = el("div")
            .attr("class", class)
            .child(el("div").child(icon(icon_name)));
        if let Some(message) = message {
            body = body.child(el("p").text(message));
        }
        self.container.replace(vec![body.into()]);
    }
}

impl<K: ViewKind> Render for View<K> {
    type Data = K::Data;

    fn render(&mut self, data: &K::Data) {
        if data.is_blank() {
            debug!(container = K::CONTAINER, "Blank view data, showing error");
            self.render_error(None);
            return;
        }

        self.data = Some(data.clone());
        let markup = self.kind.generate_markup(data);
        self.container.replace(markup);
    }

    fn update(&mut self, data: &K::Data) -> Reconciliation {
        self.data = Some(data.clone());
        let candidate = self.kind.generate_markup(data);
        reconcile(self.container.nodes_mut(), candidate)
    }

    fn render_spinner(&mut self) {
        let spinner = el("div").attr("class", "spinner").child(icon("loader"));
        self.container.replace(vec![spinner.into()]);
    }

    fn render_initial(&mut self) {
        self.placeholder("message", "smile", Some(INITIAL_MESSAGE));
    }

    fn render_error(&mut self, message: Option<&str>) {
        let text = message.unwrap_or(self.kind.error_message()).to_string();
        self.placeholder("error", "alert-triangle", Some(&text));
    }

    fn render_message(&mut self, message: Option<&str>) {
        let text = message.unwrap_or(self.kind.message()).to_string();
        self.placeholder("message", "smile", (!text.is_empty()).then_some(text.as_str()));
    }

    fn container(&self) -> &Container {
        &self.container
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default)]
    struct Words;

    impl ViewKind for Words {
        type Data = Vec<String>;
        const CONTAINER: &'static str = ".words";

        fn generate_markup(&self, data: &Vec<String>) -> Vec<Node> {
            vec![el("ul")
                .children(data.iter().map(|w| el("li").text(w.as_str())))
                .into()]
        }

        fn error_message(&self) -> &str {
            "No words"
        }

        fn message(&self) -> &str {
            "Saved"
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_render_replaces_container() {
        let mut view = View::<Words>::default();
        view.render(&words(&["a", "b"]));

        assert_eq!(view.container().to_html(), "<ul><li>a</li><li>b</li></ul>");
        assert_eq!(view.container().full_renders(), 1);
        assert_eq!(view.data().unwrap().len(), 2);
    }

    #[test]
    fn test_blank_data_renders_default_error() {
        let mut view = View::<Words>::default();
        view.render(&Vec::new());

        assert!(view.container().text_content().contains("No words"));
        assert!(view.data().is_none());
    }

    #[test]
    fn test_update_patches_without_full_render() {
        let mut view = View::<Words>::default();
        view.render(&words(&["a", "b"]));

        let outcome = view.update(&words(&["a", "c"]));

        assert_eq!(outcome.stats().unwrap().text_writes, 1);
        assert_eq!(view.container().full_renders(), 1);
        assert_eq!(view.container().text_content(), "ac");
    }

    #[test]
    fn test_markup_leaves_container_untouched() {
        let view = View::<Words>::default();
        let nodes = view.markup(&words(&["x"]));

        assert_eq!(nodes.len(), 1);
        assert!(view.container().is_empty());
        assert!(view.markup(&Vec::new()).is_empty());
    }

    #[test]
    fn test_placeholders() {
        let mut view = View::<Words>::default();

        view.render_spinner();
        assert!(view.container().to_html().contains("icon-loader"));

        view.render_initial();
        assert_eq!(view.container().text_content(), INITIAL_MESSAGE);

        view.render_error(Some("Boom"));
        assert!(view.container().to_html().starts_with("<div class=\"error\">"));
        assert_eq!(view.container().text_content(), "Boom");

        view.render_message(None);
        assert_eq!(view.container().text_content(), "Saved");
        assert_eq!(view.container().full_renders(), 4);
    }
}

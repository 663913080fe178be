//! Search results list.

use crate::node::Node;
use crate::view::{View, ViewKind};
use crate::views::preview::{list_markup, PreviewItem, PreviewList};

/// Results list view kind. Shows one page of the current search.
#[derive(Default)]
pub struct SearchResults {
    preview: View<PreviewItem>,
}

impl ViewKind for SearchResults {
    type Data = PreviewList;
    const CONTAINER: &'static str = ".results";

    fn error_message(&self) -> &str {
        "No results for your query. Search another!"
    }

    fn generate_markup(&self, data: &PreviewList) -> Vec<Node> {
        list_markup(&self.preview, data)
    }
}

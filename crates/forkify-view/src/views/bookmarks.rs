//! Bookmark list.

use crate::node::Node;
use crate::view::{View, ViewKind};
use crate::views::preview::{list_markup, PreviewItem, PreviewList};

/// Bookmark list view kind.
#[derive(Default)]
pub struct BookmarkList {
    preview: View<PreviewItem>,
}

impl ViewKind for BookmarkList {
    type Data = PreviewList;
    const CONTAINER: &'static str = ".bookmarks__list";

    fn error_message(&self) -> &str {
        "No bookmarks yet. Find a nice recipe and bookmark it :)"
    }

    fn generate_markup(&self, data: &PreviewList) -> Vec<Node> {
        list_markup(&self.preview, data)
    }
}

//! Preview entries shared by the results and bookmarks lists.

use forkify_core::{Recipe, SearchResultItem};

use crate::node::{el, Node};
use crate::view::{icon, View, ViewData, ViewKind};

/// One list entry and whether it is the recipe currently open.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub item: SearchResultItem,
    pub active: bool,
}

impl ViewData for Preview {
    fn is_blank(&self) -> bool {
        self.item.id.is_empty()
    }
}

/// Items of a preview list plus the id of the open recipe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewList {
    pub items: Vec<SearchResultItem>,
    pub active_id: Option<String>,
}

impl PreviewList {
    pub fn new(items: Vec<SearchResultItem>, active_id: Option<&str>) -> Self {
        PreviewList {
            items,
            active_id: active_id.map(str::to_string),
        }
    }

    /// Builds a list from full recipes, e.g. the bookmark set.
    pub fn from_recipes(recipes: &[Recipe], active_id: Option<&str>) -> Self {
        PreviewList::new(recipes.iter().map(SearchResultItem::from).collect(), active_id)
    }

    /// Pairs each item with its active flag.
    pub fn previews(&self) -> impl Iterator<Item = Preview> + '_ {
        self.items.iter().map(|item| Preview {
            item: item.clone(),
            active: self.active_id.as_deref() == Some(item.id.as_str()),
        })
    }
}

impl ViewData for PreviewList {
    fn is_blank(&self) -> bool {
        self.items.is_empty()
    }
}

/// Markup of a single preview entry. Never rendered into a container of
/// its own; list views call [`View::markup`] on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewItem;

impl ViewKind for PreviewItem {
    type Data = Preview;
    const CONTAINER: &'static str = ".preview";

    fn generate_markup(&self, data: &Preview) -> Vec<Node> {
        let item = &data.item;
        let link_class = if data.active {
            "preview__link preview__link--active"
        } else {
            "preview__link"
        };
        let user_class = if item.key.is_some() {
            "preview__user-generated"
        } else {
            "preview__user-generated hidden"
        };

        let entry = el("li").attr("class", "preview").child(
            el("a")
                .attr("class", link_class)
                .attr("href", format!("#{}", item.id))
                .child(
                    el("figure").attr("class", "preview__fig").child(
                        el("img")
                            .attr("src", item.image.as_str())
                            .attr("alt", item.title.as_str()),
                    ),
                )
                .child(
                    el("div")
                        .attr("class", "preview__data")
                        .child(el("h4").attr("class", "preview__title").text(item.title.as_str()))
                        .child(
                            el("p")
                                .attr("class", "preview__publisher")
                                .text(item.publisher.as_str()),
                        )
                        .child(el("div").attr("class", user_class).child(icon("user"))),
                ),
        );

        vec![entry.into()]
    }
}

/// Generates the markup of every entry in `list`.
pub fn list_markup(preview: &View<PreviewItem>, list: &PreviewList) -> Vec<Node> {
    list.previews()
        .flat_map(|entry| preview.markup(&entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> SearchResultItem {
        SearchResultItem {
            id: id.to_string(),
            title: format!("Recipe {}", id),
            publisher: "Publisher".to_string(),
            image: format!("http://img/{}.jpg", id),
            key: None,
        }
    }

    #[test]
    fn test_active_entry_is_marked() {
        let list = PreviewList::new(vec![item("a"), item("b")], Some("b"));
        let html: String = list_markup(&View::default(), &list)
            .iter()
            .map(Node::to_string)
            .collect();

        assert_eq!(html.matches("preview__link--active").count(), 1);
        assert!(html.contains("href=\"#b\""));
    }

    #[test]
    fn test_user_generated_badge() {
        let mut own = item("c");
        own.key = Some("k".to_string());
        let nodes = PreviewItem.generate_markup(&Preview {
            item: own,
            active: false,
        });

        assert!(!nodes[0].to_string().contains("hidden"));
    }
}

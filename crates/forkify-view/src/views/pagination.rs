//! Previous/next page buttons under the results list.

use forkify_core::SearchState;

use crate::node::{el, Element, Node};
use crate::view::{icon, ViewKind};

fn page_button(direction: &str, page: usize) -> Element {
    let arrow = if direction == "prev" { "arrow-left" } else { "arrow-right" };
    let label = el("span").text(format!("Page {}", page));
    let arrow_icon = icon(arrow).attr("class", "search__icon");

    let button = el("button")
        .attr("data-goto", page.to_string())
        .attr("class", format!("btn--inline pagination__btn--{}", direction));

    // The arrow sits on the side it points to.
    if direction == "prev" {
        button.child(arrow_icon).child(label)
    } else {
        button.child(label).child(arrow_icon)
    }
}

/// Pagination view kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pagination;

impl ViewKind for Pagination {
    type Data = SearchState;
    const CONTAINER: &'static str = ".pagination";

    fn generate_markup(&self, search: &SearchState) -> Vec<Node> {
        let page = search.page;
        let mut buttons = Vec::new();

        if search.has_previous() && page <= search.num_pages() {
            buttons.push(page_button("prev", page - 1).into());
        }
        if search.has_next() {
            buttons.push(page_button("next", page + 1).into());
        }

        buttons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forkify_core::SearchResultItem;

    fn search(len: usize, page: usize) -> SearchState {
        let mut state = SearchState::new(3);
        let results = (0..len)
            .map(|i| SearchResultItem {
                id: i.to_string(),
                title: "t".to_string(),
                publisher: "p".to_string(),
                image: "i".to_string(),
                key: None,
            })
            .collect();
        state.replace_results("pizza", results);
        state.page = page;
        state
    }

    fn targets(state: &SearchState) -> Vec<String> {
        Pagination
            .generate_markup(state)
            .iter()
            .filter_map(|n| n.as_element()?.get_attribute("data-goto").map(str::to_string))
            .collect()
    }

    #[test]
    fn test_single_page_has_no_buttons() {
        assert!(targets(&search(3, 1)).is_empty());
    }

    #[test]
    fn test_first_middle_and_last_pages() {
        assert_eq!(targets(&search(9, 1)), vec!["2"]);
        assert_eq!(targets(&search(9, 2)), vec!["1", "3"]);
        assert_eq!(targets(&search(9, 3)), vec!["2"]);
    }
}

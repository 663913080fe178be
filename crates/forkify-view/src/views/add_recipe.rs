//! Upload form and its modal window.

use crate::node::{el, Element, Node};
use crate::view::{icon, View, ViewKind};

/// Fields of the upload form, as `(name, label)` pairs.
const FIELDS: [(&str, &str); 6] = [
    ("title", "Title"),
    ("sourceUrl", "URL"),
    ("image", "Image URL"),
    ("publisher", "Publisher"),
    ("cookingTime", "Prep time"),
    ("servings", "Servings"),
];

/// Number of ingredient inputs the form offers.
const INGREDIENT_INPUTS: usize = 6;

fn input(name: &str, label: &str, input_type: &str) -> [Element; 2] {
    [
        el("label").text(label),
        el("input")
            .attr("required", "")
            .attr("name", name)
            .attr("type", input_type),
    ]
}

/// Upload form view kind. Also tracks whether the modal window is open.
#[derive(Debug, Clone)]
pub struct AddRecipe {
    window_hidden: bool,
}

impl Default for AddRecipe {
    fn default() -> Self {
        AddRecipe {
            window_hidden: true,
        }
    }
}

impl ViewKind for AddRecipe {
    type Data = ();
    const CONTAINER: &'static str = ".upload";

    fn message(&self) -> &str {
        "Recipe was uploaded successfully :)"
    }

    fn generate_markup(&self, _: &()) -> Vec<Node> {
        let data = el("div")
            .attr("class", "upload__column")
            .child(el("h3").attr("class", "upload__heading").text("Recipe data"))
            .children(FIELDS.iter().flat_map(|(name, label)| {
                let kind = if matches!(*name, "cookingTime" | "servings") {
                    "number"
                } else {
                    "text"
                };
                input(name, label, kind)
            }));

        let ingredients = el("div")
            .attr("class", "upload__column")
            .child(el("h3").attr("class", "upload__heading").text("Ingredients"))
            .children((1..=INGREDIENT_INPUTS).flat_map(|i| {
                [
                    el("label").text(format!("Ingredient {}", i)),
                    el("input")
                        .attr("type", "text")
                        .attr("name", format!("ingredient-{}", i))
                        .attr("placeholder", "Format: 'Quantity,Unit,Description'"),
                ]
            }));

        let submit = el("button")
            .attr("class", "btn upload__btn")
            .child(icon("upload-cloud"))
            .child(el("span").text("Upload"));

        vec![data.into(), ingredients.into(), submit.into()]
    }
}

impl View<AddRecipe> {
    /// Opens the window if closed, closes it if open.
    pub fn toggle_window(&mut self) {
        let kind = self.kind_mut();
        kind.window_hidden = !kind.window_hidden;
    }

    pub fn is_window_open(&self) -> bool {
        !self.kind().window_hidden
    }
}

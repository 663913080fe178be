//! # Recipe Detail View
//!
//! The open recipe: header, serving controls, bookmark button, ingredient
//! list and directions link.
//!
//! Serving and bookmark changes go through [`crate::Render::update`], so
//! only the quantity cells, the serving count, the `data-update-to`
//! attributes and the bookmark icon are rewritten.

use forkify_core::{Ingredient, Recipe};

use crate::node::{el, Element, Node};
use crate::view::{icon, ViewKind};

/// Largest denominator tried when printing a quantity as a fraction.
const MAX_DENOMINATOR: u32 = 16;

/// Prints a quantity the way a cook reads it: `2`, `1/2`, `1 1/3`.
///
/// Values with no small-denominator fraction fall back to two decimals.
///
/// ## Example
/// ```rust
/// use forkify_view::views::recipe::format_quantity;
///
/// assert_eq!(format_quantity(0.5), "1/2");
/// assert_eq!(format_quantity(1.5), "1 1/2");
/// assert_eq!(format_quantity(3.0), "3");
/// ```
pub fn format_quantity(quantity: f64) -> String {
    if !quantity.is_finite() {
        return String::new();
    }

    let whole = quantity.trunc();
    let fraction = quantity - whole;
    if fraction.abs() < 1e-9 {
        return format!("{}", whole as i64);
    }

    for denominator in 2..=MAX_DENOMINATOR {
        let numerator = (fraction * f64::from(denominator)).round();
        if numerator > 0.0 && (numerator / f64::from(denominator) - fraction).abs() < 1e-6 {
            return if whole == 0.0 {
                format!("{}/{}", numerator as u32, denominator)
            } else {
                format!("{} {}/{}", whole as i64, numerator as u32, denominator)
            };
        }
    }

    let decimal = format!("{:.2}", quantity);
    decimal.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn ingredient_markup(ingredient: &Ingredient) -> Element {
    let mut quantity = el("div").attr("class", "recipe__quantity");
    if let Some(value) = ingredient.quantity {
        quantity = quantity.text(format_quantity(value));
    }

    el("li")
        .attr("class", "recipe__ingredient")
        .child(icon("check").attr("class", "recipe__icon"))
        .child(quantity)
        .child(
            el("div")
                .attr("class", "recipe__description")
                .child(el("span").attr("class", "recipe__unit").text(ingredient.unit.as_str()))
                .text(ingredient.description.as_str()),
        )
}

/// Recipe detail view kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeDetail;

impl ViewKind for RecipeDetail {
    type Data = Recipe;
    const CONTAINER: &'static str = ".recipe";

    fn error_message(&self) -> &str {
        "We could not find that recipe. Please try another one!"
    }

    fn generate_markup(&self, recipe: &Recipe) -> Vec<Node> {
        let header = el("figure")
            .attr("class", "recipe__fig")
            .child(
                el("img")
                    .attr("src", recipe.image.as_str())
                    .attr("alt", recipe.title.as_str())
                    .attr("class", "recipe__img"),
            )
            .child(
                el("h1")
                    .attr("class", "recipe__title")
                    .child(el("span").text(recipe.title.as_str())),
            );

        let minutes = el("div")
            .attr("class", "recipe__info")
            .child(icon("clock").attr("class", "recipe__info-icon"))
            .child(
                el("span")
                    .attr("class", "recipe__info-data recipe__info-data--minutes")
                    .text(recipe.cooking_time.to_string()),
            )
            .child(el("span").attr("class", "recipe__info-text").text("minutes"));

        let servings = el("div")
            .attr("class", "recipe__info")
            .child(icon("users").attr("class", "recipe__info-icon"))
            .child(
                el("span")
                    .attr("class", "recipe__info-data recipe__info-data--people")
                    .text(recipe.servings.to_string()),
            )
            .child(el("span").attr("class", "recipe__info-text").text("servings"))
            .child(
                el("div")
                    .attr("class", "recipe__info-buttons")
                    .child(
                        el("button")
                            .attr("class", "btn--tiny btn--update-servings")
                            .attr("data-update-to", recipe.servings.saturating_sub(1).to_string())
                            .child(icon("minus-circle")),
                    )
                    .child(
                        el("button")
                            .attr("class", "btn--tiny btn--update-servings")
                            .attr("data-update-to", recipe.servings.saturating_add(1).to_string())
                            .child(icon("plus-circle")),
                    ),
            );

        let user_class = if recipe.is_user_generated() {
            "recipe__user-generated"
        } else {
            "recipe__user-generated hidden"
        };
        let bookmark_icon = if recipe.bookmarked {
            "bookmark-fill"
        } else {
            "bookmark"
        };

        let details = el("div")
            .attr("class", "recipe__details")
            .child(minutes)
            .child(servings)
            .child(el("div").attr("class", user_class).child(icon("user")))
            .child(
                el("button")
                    .attr("class", "btn--round btn--bookmark")
                    .child(icon(bookmark_icon)),
            );

        let ingredients = el("div")
            .attr("class", "recipe__ingredients")
            .child(el("h2").attr("class", "heading--2").text("Recipe ingredients"))
            .child(
                el("ul")
                    .attr("class", "recipe__ingredient-list")
                    .children(recipe.ingredients.iter().map(ingredient_markup)),
            );

        let directions = el("div")
            .attr("class", "recipe__directions")
            .child(el("h2").attr("class", "heading--2").text("How to cook it"))
            .child(
                el("p")
                    .attr("class", "recipe__directions-text")
                    .text("This recipe was carefully designed and tested by ")
                    .child(el("span").attr("class", "recipe__publisher").text(recipe.publisher.as_str()))
                    .text(". Please check out directions at their website."),
            )
            .child(
                el("a")
                    .attr("class", "btn--small recipe__btn")
                    .attr("href", recipe.source_url.as_str())
                    .attr("target", "_blank")
                    .child(el("span").text("Directions"))
                    .child(icon("arrow-right").attr("class", "search__icon")),
            );

        vec![header.into(), details.into(), ingredients.into(), directions.into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Render, View};

    fn recipe() -> Recipe {
        Recipe {
            id: "r1".to_string(),
            title: "Pizza".to_string(),
            publisher: "Closet Cooking".to_string(),
            source_url: "http://example.com/pizza".to_string(),
            image: "http://example.com/pizza.jpg".to_string(),
            servings: 4,
            cooking_time: 30,
            ingredients: vec![
                Ingredient::new(Some(0.5), "kg", "flour"),
                Ingredient::new(None, "", "salt"),
                Ingredient::new(Some(2.0), "", "eggs"),
            ],
            bookmarked: false,
            key: None,
        }
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(0.25), "1/4");
        assert_eq!(format_quantity(2.0 / 3.0), "2/3");
        assert_eq!(format_quantity(2.375), "2 3/8");
        assert_eq!(format_quantity(0.15), "0.15");
        assert_eq!(format_quantity(f64::NAN), "");
    }

    #[test]
    fn test_render_shows_recipe() {
        let mut view = View::<RecipeDetail>::default();
        view.render(&recipe());

        let html = view.container().to_html();
        assert!(html.contains("<span>Pizza</span>"));
        assert!(html.contains("data-update-to=\"3\""));
        assert!(html.contains("data-update-to=\"5\""));
        assert!(html.contains("icon-bookmark\""));
        assert!(html.contains("recipe__user-generated hidden"));
    }

    #[test]
    fn test_servings_update_touches_only_changed_nodes() {
        let mut view = View::<RecipeDetail>::default();
        let mut r = recipe();
        view.render(&r);

        r.update_servings(8).unwrap();
        let stats = view.update(&r).stats().unwrap();

        // serving count + two non-null quantities
        assert_eq!(stats.text_writes, 3);
        // the two data-update-to buttons
        assert_eq!(stats.attribute_writes, 2);
        assert_eq!(view.container().full_renders(), 1);

        let mut fresh = View::<RecipeDetail>::default();
        fresh.render(&r);
        assert_eq!(view.container().to_html(), fresh.container().to_html());
    }

    #[test]
    fn test_bookmark_update_swaps_icon_only() {
        let mut view = View::<RecipeDetail>::default();
        let mut r = recipe();
        view.render(&r);

        r.bookmarked = true;
        let stats = view.update(&r).stats().unwrap();

        assert_eq!(stats.text_writes, 0);
        assert_eq!(stats.attribute_writes, 1);
        assert!(view.container().to_html().contains("icon-bookmark-fill"));
    }

    #[test]
    fn test_blank_recipe_shows_error() {
        let mut view = View::<RecipeDetail>::default();
        let mut r = recipe();
        r.id.clear();
        view.render(&r);

        assert_eq!(
            view.container().text_content(),
            "We could not find that recipe. Please try another one!"
        );
    }
}

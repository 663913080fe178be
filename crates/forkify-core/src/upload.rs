//! # Upload Form Validation
//!
//! Turns the raw field mapping of the "add recipe" form into a [`NewRecipe`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Upload Validation                                  │
//! │                                                                         │
//! │  RawForm (ordered field → value pairs)                                 │
//! │     │                                                                   │
//! │     ├── ingredient-* fields, non-empty value                           │
//! │     │      split on ',' → trim → exactly 3 parts?                      │
//! │     │        no  → ValidationError::IngredientFormat  (abort)          │
//! │     │        yes → Ingredient { quantity?, unit, description }         │
//! │     │                                                                   │
//! │     ├── title, sourceUrl, image, publisher  → Required                 │
//! │     └── cookingTime, servings               → NotANumber / Positive    │
//! │                                                                         │
//! │  All checks run BEFORE any network call.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::payload::NewRecipe;
use crate::types::Ingredient;
use crate::INGREDIENT_FIELD_PREFIX;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Raw Form
// =============================================================================

/// Field name → value pairs as submitted, in form order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawForm(Vec<(String, String)>);

impl RawForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, builder style.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(field, value);
        self
    }

    /// Appends a field. A later value for the same name shadows earlier ones.
    pub fn push(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.push((field.into(), value.into()));
    }

    /// Returns the last value submitted for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over fields in submission order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RawForm(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// =============================================================================
// Ingredient Lines
// =============================================================================

/// Parses one `quantity,unit,description` line.
///
/// An empty quantity means "unspecified".
///
/// ## Example
/// ```rust
/// use forkify_core::upload::parse_ingredient_line;
///
/// let ing = parse_ingredient_line("ingredient-1", "0.5, kg, Rice").unwrap();
/// assert_eq!(ing.quantity, Some(0.5));
/// assert_eq!(ing.unit, "kg");
/// assert_eq!(ing.description, "Rice");
///
/// assert!(parse_ingredient_line("ingredient-2", "kg,Rice").is_err());
/// ```
pub fn parse_ingredient_line(field: &str, line: &str) -> ValidationResult<Ingredient> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();

    let [quantity, unit, description] = parts.as_slice() else {
        return Err(ValidationError::IngredientFormat {
            field: field.to_string(),
            value: line.to_string(),
        });
    };

    let quantity = if quantity.is_empty() {
        None
    } else {
        Some(parse_number(field, quantity)?)
    };

    Ok(Ingredient::new(quantity, *unit, *description))
}

/// Collects every non-empty `ingredient*` field, in form order.
///
/// The first malformed line fails the whole form.
pub fn parse_ingredients(form: &RawForm) -> ValidationResult<Vec<Ingredient>> {
    form.fields()
        .filter(|(name, value)| name.starts_with(INGREDIENT_FIELD_PREFIX) && !value.is_empty())
        .map(|(name, value)| parse_ingredient_line(name, value))
        .collect()
}

// =============================================================================
// Whole Form
// =============================================================================

/// Validates the upload form and assembles the outbound payload.
///
/// ## Form Fields
/// - `title`, `sourceUrl`, `image`, `publisher`: required text
/// - `cookingTime`: non-negative whole minutes
/// - `servings`: positive whole number
/// - `ingredient*`: see [`parse_ingredient_line`]
pub fn build_new_recipe(form: &RawForm) -> ValidationResult<NewRecipe> {
    let ingredients = parse_ingredients(form)?;

    let cooking_time = parse_whole(form, "cookingTime")?;
    let servings = parse_whole(form, "servings")?;
    if servings == 0 {
        return Err(ValidationError::MustBePositive {
            field: "servings".to_string(),
        });
    }

    Ok(NewRecipe {
        title: required(form, "title")?,
        source_url: required(form, "sourceUrl")?,
        image_url: required(form, "image")?,
        publisher: required(form, "publisher")?,
        cooking_time,
        servings,
        ingredients,
    })
}

fn required(form: &RawForm, field: &str) -> ValidationResult<String> {
    match form.get(field).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ValidationError::Required {
            field: field.to_string(),
        }),
    }
}

fn parse_whole(form: &RawForm, field: &str) -> ValidationResult<u32> {
    let raw = required(form, field)?;
    raw.parse::<u32>().map_err(|_| ValidationError::NotANumber {
        field: field.to_string(),
        value: raw,
    })
}

fn parse_number(field: &str, value: &str) -> ValidationResult<f64> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(ValidationError::NotANumber {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> RawForm {
        RawForm::new()
            .with("title", "Rice Bowl")
            .with("sourceUrl", "http://example.com/rice")
            .with("image", "http://example.com/rice.jpg")
            .with("publisher", "Me")
            .with("cookingTime", "20")
            .with("servings", "2")
    }

    #[test]
    fn test_single_ingredient_scenario() {
        let form = base_form()
            .with("ingredient-1", "0.5,kg,Rice")
            .with("ingredient-2", "");

        let recipe = build_new_recipe(&form).unwrap();
        assert_eq!(recipe.ingredients, vec![Ingredient::new(Some(0.5), "kg", "Rice")]);
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.cooking_time, 20);
        assert_eq!(recipe.image_url, "http://example.com/rice.jpg");
    }

    #[test]
    fn test_two_part_ingredient_fails() {
        let form = base_form().with("ingredient-1", "kg,Rice");

        let err = build_new_recipe(&form).unwrap_err();
        assert!(matches!(err, ValidationError::IngredientFormat { ref field, .. } if field == "ingredient-1"));
    }

    #[test]
    fn test_four_part_ingredient_fails() {
        let form = base_form().with("ingredient-1", "1,kg,Rice,extra");
        assert!(build_new_recipe(&form).is_err());
    }

    #[test]
    fn test_empty_quantity_is_unspecified() {
        let ing = parse_ingredient_line("ingredient-1", ",,Salt").unwrap();
        assert_eq!(ing.quantity, None);
        assert_eq!(ing.unit, "");
        assert_eq!(ing.description, "Salt");
    }

    #[test]
    fn test_non_numeric_quantity_fails() {
        let err = parse_ingredient_line("ingredient-1", "lots,kg,Rice").unwrap_err();
        assert!(matches!(err, ValidationError::NotANumber { .. }));
    }

    #[test]
    fn test_ingredients_keep_form_order() {
        let form = RawForm::new()
            .with("ingredient-2", "1,,Egg")
            .with("title", "x")
            .with("ingredient-1", "2,cups,Milk");

        let ingredients = parse_ingredients(&form).unwrap();
        assert_eq!(ingredients[0].description, "Egg");
        assert_eq!(ingredients[1].description, "Milk");
    }

    #[test]
    fn test_missing_required_field() {
        let form: RawForm = base_form()
            .fields()
            .filter(|(name, _)| *name != "publisher")
            .collect();

        let err = build_new_recipe(&form).unwrap_err();
        assert!(matches!(err, ValidationError::Required { ref field } if field == "publisher"));
    }

    #[test]
    fn test_zero_servings_rejected() {
        let form = base_form().with("servings", "0");
        assert!(matches!(
            build_new_recipe(&form),
            Err(ValidationError::MustBePositive { .. })
        ));
    }
}

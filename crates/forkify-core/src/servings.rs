//! # Servings Scaling
//!
//! Proportional recomputation of ingredient quantities when the serving
//! count changes.
//!
//! ## Invariant
//! For every ingredient with a quantity:
//!
//! ```text
//! new_quantity / new_servings == old_quantity / old_servings
//! ```
//!
//! Unspecified quantities (`None`, "to taste") stay unspecified.

use crate::error::{CoreError, CoreResult};
use crate::types::Recipe;

/// Scales one quantity from `old_servings` to `new_servings`.
///
/// ## Example
/// ```rust
/// use forkify_core::servings::scale_quantity;
///
/// assert_eq!(scale_quantity(Some(0.5), 4, 8), Some(1.0));
/// assert_eq!(scale_quantity(None, 4, 8), None);
/// ```
pub fn scale_quantity(quantity: Option<f64>, old_servings: u32, new_servings: u32) -> Option<f64> {
    quantity.map(|q| q * f64::from(new_servings) / f64::from(old_servings))
}

/// Checks a requested serving count and narrows it to `u32`.
///
/// Zero, negative and out-of-range values fail with
/// [`CoreError::InvalidServings`].
pub fn validate_servings(servings: i64) -> CoreResult<u32> {
    if servings <= 0 {
        return Err(CoreError::InvalidServings { value: servings });
    }

    u32::try_from(servings).map_err(|_| CoreError::InvalidServings { value: servings })
}

impl Recipe {
    /// Rescales every ingredient to `new_servings` and updates the count.
    ///
    /// ## Errors
    /// `InvalidServings` for non-positive counts. The recipe is unchanged
    /// on error.
    pub fn update_servings(&mut self, new_servings: i64) -> CoreResult<()> {
        let new_servings = validate_servings(new_servings)?;

        // Normalized recipes never carry zero servings, but a hand-built one might.
        if self.servings == 0 {
            return Err(CoreError::InvalidServings { value: 0 });
        }

        let old_servings = self.servings;
        for ingredient in &mut self.ingredients {
            ingredient.quantity = scale_quantity(ingredient.quantity, old_servings, new_servings);
        }
        self.servings = new_servings;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

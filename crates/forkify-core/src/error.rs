//! # Error Types
//!
//! Domain-specific error types for forkify-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  forkify-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Upload form failures                           │
//! │                                                                         │
//! │  forkify-store errors (separate crate)                                 │
//! │  └── StoreError       - Persistence failures                           │
//! │                                                                         │
//! │  forkify-client errors (separate crate)                                │
//! │  └── ClientError      - Timeout / HTTP failures                        │
//! │                                                                         │
//! │  App errors (apps/cli)                                                 │
//! │  └── AppError         - What the views display                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → error placeholder      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Servings must be a positive integer.
    ///
    /// ## When This Occurs
    /// - User clicks "-" on a recipe with 1 serving
    /// - A caller passes 0 or a negative count
    ///
    /// The recipe is left untouched.
    #[error("Servings must be positive, got {value}")]
    InvalidServings { value: i64 },

    /// An operation needs a loaded recipe but none is present.
    #[error("No recipe is currently loaded")]
    NoRecipeLoaded,

    /// A payload from the recipe service violates a domain invariant.
    #[error("Invalid recipe payload: {reason}")]
    InvalidPayload { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Upload form validation errors.
///
/// Raised before any network call is made.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// An ingredient line does not split into `quantity,unit,description`.
    #[error("Invalid ingredient format in {field}: '{value}'. Please use the format 'Quantity,Unit,Description'")]
    IngredientFormat { field: String, value: String },

    /// A field that must be numeric is not.
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: String, value: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

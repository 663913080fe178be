//! Concrete view kinds of the recipe client.
//!
//! | View            | Container          | Data          |
//! |-----------------|--------------------|---------------|
//! | `RecipeView`    | `.recipe`          | `Recipe`      |
//! | `ResultsView`   | `.results`         | `PreviewList` |
//! | `BookmarksView` | `.bookmarks__list` | `PreviewList` |
//! | `PaginationView`| `.pagination`      | `SearchState` |
//! | `AddRecipeView` | `.upload`          | `()`          |

pub mod add_recipe;
pub mod bookmarks;
pub mod pagination;
pub mod preview;
pub mod recipe;
pub mod results;

use crate::view::View;

pub use add_recipe::AddRecipe;
pub use bookmarks::BookmarkList;
pub use pagination::Pagination;
pub use preview::{Preview, PreviewItem, PreviewList};
pub use recipe::RecipeDetail;
pub use results::SearchResults;

pub type RecipeView = View<RecipeDetail>;
pub type ResultsView = View<SearchResults>;
pub type BookmarksView = View<BookmarkList>;
pub type PaginationView = View<Pagination>;
pub type AddRecipeView = View<AddRecipe>;

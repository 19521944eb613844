pub mod aggregation;
pub mod cli;
pub mod constants;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod scaling;
pub mod state;

pub use aggregation::{food_group_breakdown, FoodGroupShare};
pub use error::{RecipeError, Result};
pub use models::{Ingredient, Recipe};
pub use scaling::{reset_to_original, scale};
pub use state::RecipeStore;

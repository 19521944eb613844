mod premade;
mod store;

pub use premade::{premade_recipes, CHOCOLATE_CHIP_COOKIES, SPAGHETTI_BOLOGNESE};
pub use store::{RecipeFilter, RecipeStore};

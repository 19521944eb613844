pub mod ingredient;
pub mod recipe;

pub use ingredient::Ingredient;
pub use recipe::Recipe;

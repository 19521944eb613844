use crate::constants::{ADDED_SUGARS, DAIRY, GRAINS, OILS_AND_SOLID_FATS, OTHERS, PROTEINS, VEGETABLES};
use crate::models::{Ingredient, Recipe};

pub const SPAGHETTI_BOLOGNESE: &str = "Spaghetti Bolognese";
pub const CHOCOLATE_CHIP_COOKIES: &str = "Chocolate Chip Cookies";

/// The two example recipes a fresh catalogue starts with.
pub fn premade_recipes() -> Vec<Recipe> {
    vec![spaghetti_bolognese(), chocolate_chip_cookies()]
}

fn spaghetti_bolognese() -> Recipe {
    Recipe::new(SPAGHETTI_BOLOGNESE)
        .with_ingredient(Ingredient::new("Spaghetti", 400.0, "g", 632.0, GRAINS))
        .with_ingredient(Ingredient::new("Ground Beef", 500.0, "g", 1660.0, PROTEINS))
        .with_ingredient(Ingredient::new("Tomato Sauce", 400.0, "ml", 118.0, VEGETABLES))
        .with_ingredient(Ingredient::new("Onion", 1.0, "piece", 40.0, VEGETABLES))
        .with_ingredient(Ingredient::new("Garlic", 2.0, "cloves", 9.0, VEGETABLES))
        .with_ingredient(Ingredient::new("Olive Oil", 2.0, "tbsp", 238.0, OILS_AND_SOLID_FATS))
        .with_step("Cook spaghetti according to package instructions.")
        .with_step("In a large pan, heat olive oil and sauté onions and garlic.")
        .with_step("Add ground beef and cook until browned.")
        .with_step("Add tomato sauce and simmer for 20 minutes.")
        .with_step("Serve sauce over cooked spaghetti.")
}

fn chocolate_chip_cookies() -> Recipe {
    Recipe::new(CHOCOLATE_CHIP_COOKIES)
        .with_ingredient(Ingredient::new("Flour", 250.0, "g", 910.0, GRAINS))
        .with_ingredient(Ingredient::new("Butter", 200.0, "g", 1434.0, DAIRY))
        .with_ingredient(Ingredient::new("Sugar", 200.0, "g", 774.0, ADDED_SUGARS))
        .with_ingredient(Ingredient::new("Eggs", 2.0, "pieces", 155.0, PROTEINS))
        .with_ingredient(Ingredient::new("Chocolate Chips", 200.0, "g", 958.0, ADDED_SUGARS))
        .with_ingredient(Ingredient::new("Vanilla Extract", 1.0, "tsp", 12.0, OTHERS))
        .with_step("Cream together butter and sugar.")
        .with_step("Beat in eggs and vanilla extract.")
        .with_step("Gradually mix in flour.")
        .with_step("Fold in chocolate chips.")
        .with_step("Drop spoonfuls of dough onto a baking sheet.")
        .with_step("Bake at 180°C for 10-12 minutes.")
}

#[macro_use]
extern crate assert_float_eq;

use recipe_catalogue::error::RecipeError;
use recipe_catalogue::models::{Ingredient, Recipe};
use recipe_catalogue::scaling::{parse_scale_factor, reset_to_original, round_to, scale};
use recipe_catalogue::state::{RecipeStore, SPAGHETTI_BOLOGNESE};

fn make_recipe() -> Recipe {
    Recipe::new("Test Stew")
        .with_ingredient(Ingredient::new("Potato", 333.0, "g", 256.41, "Vegetables"))
        .with_ingredient(Ingredient::new("Beef", 250.5, "g", 626.25, "Proteins"))
        .with_ingredient(Ingredient::new("Salt", 0.0, "pinch", 0.0, "Others"))
        .with_step("Simmer everything for two hours.")
}

fn snapshot(recipe: &Recipe) -> Vec<(f64, f64)> {
    recipe
        .ingredients()
        .iter()
        .map(|i| (i.quantity, i.calories))
        .collect()
}

#[test]
fn test_scaling_is_linear_from_original() {
    let factors = [0.1, 0.25, 0.5, 1.0, 1.5, 2.0, 3.0, 7.3];
    for factor in factors {
        let mut recipe = make_recipe();
        let before = snapshot(&recipe);
        scale(&mut recipe, factor).unwrap();

        for (ingredient, (qty, cal)) in recipe.ingredients().iter().zip(&before) {
            assert_eq!(ingredient.quantity, round_to(qty * factor, 2));
            assert_eq!(ingredient.calories, round_to(cal * factor, 2));
        }
    }
}

#[test]
fn test_fixed_factor_is_idempotent() {
    let mut once = make_recipe();
    scale(&mut once, 2.5).unwrap();

    let mut twice = make_recipe();
    scale(&mut twice, 2.5).unwrap();
    scale(&mut twice, 2.5).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_factors_do_not_compound() {
    let mut recipe = make_recipe();
    let before = snapshot(&recipe);

    scale(&mut recipe, 2.0).unwrap();
    scale(&mut recipe, 3.0).unwrap();

    for (ingredient, (qty, _)) in recipe.ingredients().iter().zip(&before) {
        assert_eq!(ingredient.quantity, round_to(qty * 3.0, 2));
    }
    assert_float_absolute_eq!(recipe.ingredients()[0].quantity, 999.0, 0.001);
}

#[test]
fn test_scale_then_reset_round_trips() {
    for factor in [0.33, 0.5, 2.0, 4.75] {
        let mut recipe = make_recipe();
        let before = snapshot(&recipe);

        scale(&mut recipe, factor).unwrap();
        scale(&mut recipe, factor * 2.0).unwrap();
        reset_to_original(&mut recipe);

        assert_eq!(snapshot(&recipe), before);
    }
}

#[test]
fn test_invalid_factor_leaves_recipe_untouched() {
    let mut recipe = make_recipe();
    scale(&mut recipe, 2.0).unwrap();
    let scaled = recipe.clone();

    let result = scale(&mut recipe, -0.5);
    assert!(matches!(result, Err(RecipeError::InvalidScaleFactor(f)) if f == "-0.5"));
    assert_eq!(recipe, scaled);
}

#[test]
fn test_snapshot_length_matches_ingredients() {
    let mut recipe = make_recipe();
    scale(&mut recipe, 1.2).unwrap();
    scale(&mut recipe, 0.8).unwrap();

    let original = recipe.original_ingredients().unwrap();
    assert_eq!(original.len(), recipe.ingredients().len());
    for (o, i) in original.iter().zip(recipe.ingredients()) {
        assert_eq!(o.name, i.name);
        assert_eq!(o.unit_of_measure, i.unit_of_measure);
    }
}

#[test]
fn test_ingredient_added_after_scaling_stays_in_snapshot() {
    let mut recipe = Recipe::new("Single")
        .with_ingredient(Ingredient::new("Oats", 80.0, "g", 300.0, "Grains"));
    scale(&mut recipe, 2.0).unwrap();

    recipe
        .add_ingredient(Ingredient::new("Honey", 5.0, "tsp", 105.0, "Added Sugars"))
        .unwrap();
    assert_eq!(
        recipe.original_ingredients().unwrap().len(),
        recipe.ingredients().len()
    );

    scale(&mut recipe, 3.0).unwrap();
    assert_eq!(recipe.ingredients()[0].quantity, 240.0);
    assert_eq!(recipe.ingredients()[1].quantity, 15.0);
    assert!(recipe.is_scaled());

    reset_to_original(&mut recipe);
    assert_eq!(recipe.ingredients()[0].quantity, 80.0);
    assert_eq!(recipe.ingredients()[1].quantity, 5.0);
    assert_eq!(recipe.ingredients()[1].calories, 105.0);
    assert!(!recipe.is_scaled());
}

#[test]
fn test_non_numeric_factor_is_invalid_scale_factor() {
    assert!(matches!(
        parse_scale_factor("twice"),
        Err(RecipeError::InvalidScaleFactor(raw)) if raw == "twice"
    ));
    assert!(matches!(
        parse_scale_factor("-3"),
        Err(RecipeError::InvalidScaleFactor(_))
    ));
    assert_eq!(parse_scale_factor("0.5").unwrap(), 0.5);
}

#[test]
fn test_spaghetti_halved_and_restored() {
    let mut store = RecipeStore::with_premade();
    let recipe = store.require_mut(SPAGHETTI_BOLOGNESE).unwrap();

    scale(recipe, 0.5).unwrap();
    let spaghetti = &recipe.ingredients()[0];
    assert_eq!(spaghetti.name, "Spaghetti");
    assert_float_absolute_eq!(spaghetti.quantity, 200.0, 1e-9);
    assert_float_absolute_eq!(spaghetti.calories, 316.0, 1e-9);
    assert_eq!(spaghetti.unit_of_measure, "g");

    reset_to_original(recipe);
    let spaghetti = &recipe.ingredients()[0];
    assert_float_absolute_eq!(spaghetti.quantity, 400.0, 1e-9);
    assert_float_absolute_eq!(spaghetti.calories, 632.0, 1e-9);
}

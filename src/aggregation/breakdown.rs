use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::PERCENT_DECIMALS;
use crate::error::{RecipeError, Result};
use crate::models::Recipe;
use crate::scaling::round_to;

/// One slice of a food-group breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodGroupShare {
    pub food_group: String,

    /// Summed ingredient quantity for the group, units mixed.
    pub total_quantity: f64,

    /// Share of the grand total, rounded to two decimals.
    pub percentage: f64,
}

/// Reduce a selection of recipes to percentage shares per food group.
///
/// Ingredient quantities are summed as recorded, with no unit conversion, so
/// grams, millilitres and pieces all count alike. Results are ordered by
/// descending percentage, then by group label.
///
/// Fails with [`RecipeError::EmptySelection`] when no recipes are given,
/// with [`RecipeError::InvalidIngredient`] when a quantity is negative or not
/// finite, and with [`RecipeError::DegenerateAggregation`] when every
/// quantity is zero.
pub fn food_group_breakdown<'a, I>(recipes: I) -> Result<Vec<FoodGroupShare>>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut totals: HashMap<&str, f64> = HashMap::new();
    let mut recipe_count = 0usize;

    for recipe in recipes {
        recipe_count += 1;
        for ingredient in recipe.ingredients() {
            if !ingredient.is_valid() {
                return Err(RecipeError::InvalidIngredient(ingredient.debug_string()));
            }
            *totals.entry(ingredient.food_group.as_str()).or_insert(0.0) += ingredient.quantity;
        }
    }

    if recipe_count == 0 {
        return Err(RecipeError::EmptySelection);
    }

    let grand_total: f64 = totals.values().sum();
    if !grand_total.is_finite() || grand_total <= 0.0 {
        return Err(RecipeError::DegenerateAggregation);
    }

    let mut shares: Vec<FoodGroupShare> = totals
        .into_iter()
        .map(|(group, total)| FoodGroupShare {
            food_group: group.to_string(),
            total_quantity: total,
            percentage: round_to(total / grand_total * 100.0, PERCENT_DECIMALS),
        })
        .collect();

    shares.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.food_group.cmp(&b.food_group))
    });

    debug!(
        recipes = recipe_count,
        groups = shares.len(),
        grand_total,
        "computed food group breakdown"
    );

    Ok(shares)
}

/// Sum of the percentages in a breakdown; 100 up to rounding.
pub fn percentage_sum(shares: &[FoodGroupShare]) -> f64 {
    shares.iter().map(|s| s.percentage).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    fn salad() -> Recipe {
        Recipe::new("Salad")
            .with_ingredient(Ingredient::new("Lettuce", 150.0, "g", 22.0, "Vegetables"))
            .with_ingredient(Ingredient::new("Tomato", 50.0, "g", 9.0, "Vegetables"))
            .with_ingredient(Ingredient::new("Feta", 50.0, "g", 132.0, "Dairy"))
    }

    #[test]
    fn test_groups_are_summed() {
        let recipe = salad();
        let shares = food_group_breakdown([&recipe]).unwrap();

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].food_group, "Vegetables");
        assert_eq!(shares[0].total_quantity, 200.0);
        assert_eq!(shares[0].percentage, 80.0);
        assert_eq!(shares[1].food_group, "Dairy");
        assert_eq!(shares[1].percentage, 20.0);
    }

    #[test]
    fn test_empty_selection() {
        let none: Vec<&Recipe> = Vec::new();
        assert!(matches!(
            food_group_breakdown(none),
            Err(RecipeError::EmptySelection)
        ));
    }

    #[test]
    fn test_recipe_without_ingredients_is_degenerate() {
        let recipe = Recipe::new("Water");
        assert!(matches!(
            food_group_breakdown([&recipe]),
            Err(RecipeError::DegenerateAggregation)
        ));
    }

    #[test]
    fn test_nan_quantity_is_rejected() {
        let mut recipe = salad();
        recipe.ingredients[1].quantity = f64::NAN;
        assert!(matches!(
            food_group_breakdown([&recipe]),
            Err(RecipeError::InvalidIngredient(_))
        ));
    }

    #[test]
    fn test_ties_ordered_by_label() {
        let recipe = Recipe::new("Even")
            .with_ingredient(Ingredient::new("B", 10.0, "g", 1.0, "Proteins"))
            .with_ingredient(Ingredient::new("A", 10.0, "g", 1.0, "Grains"));
        let shares = food_group_breakdown([&recipe]).unwrap();
        assert_eq!(shares[0].food_group, "Grains");
        assert_eq!(shares[1].food_group, "Proteins");
        assert_eq!(percentage_sum(&shares), 100.0);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let recipe = salad();
        let before = recipe.clone();
        food_group_breakdown([&recipe]).unwrap();
        assert_eq!(recipe, before);
    }
}

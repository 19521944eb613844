use std::collections::HashMap;

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::constants::{FOOD_GROUPS, SCALE_PRESETS};
use crate::error::{RecipeError, Result};
use crate::models::{Ingredient, Recipe};
use crate::scaling::parse_scale_factor;
use crate::state::{RecipeFilter, RecipeStore};

/// Prompt for a non-empty line of text.
fn prompt_text(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|s: &String| {
            if s.trim().is_empty() {
                Err("Please enter a value")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for a finite, non-negative number.
pub fn prompt_non_negative(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| RecipeError::InvalidInput(format!("'{}' is not a number", input.trim())))?;

    if !value.is_finite() || value < 0.0 {
        return Err(RecipeError::InvalidInput(format!(
            "{} must not be negative",
            value
        )));
    }
    Ok(value)
}

/// Prompt for a count of at least one.
pub fn prompt_count(prompt: &str) -> Result<usize> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default("1".to_string())
        .interact_text()?;

    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(RecipeError::InvalidInput(format!(
            "'{}' is not a positive whole number",
            input.trim()
        ))),
    }
}

/// Prompt for a food group from the well-known list, or a custom label.
pub fn prompt_food_group() -> Result<String> {
    let mut options: Vec<&str> = FOOD_GROUPS.to_vec();
    options.push("Other (type it in)");

    let selection = Select::new()
        .with_prompt("Food group")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < FOOD_GROUPS.len() {
        Ok(FOOD_GROUPS[selection].to_string())
    } else {
        prompt_text("Food group name")
    }
}

/// Prompt for one ingredient line.
pub fn prompt_ingredient(index: usize) -> Result<Ingredient> {
    println!("Ingredient {}:", index + 1);
    let name = prompt_text("  Name")?;
    let quantity = prompt_non_negative("  Quantity")?;
    let unit = prompt_text("  Unit of measure")?;
    let calories = prompt_non_negative("  Calories")?;
    let food_group = prompt_food_group()?;

    Ok(Ingredient::new(name, quantity, unit, calories, food_group))
}

/// Collect a whole recipe: name, ingredients, then steps.
pub fn prompt_recipe() -> Result<Recipe> {
    let mut recipe = Recipe::new(prompt_text("Recipe name")?);

    let ingredient_count = prompt_count("How many ingredients?")?;
    for i in 0..ingredient_count {
        recipe.add_ingredient(prompt_ingredient(i)?)?;
    }

    let step_count = prompt_count("How many steps?")?;
    for i in 0..step_count {
        recipe.add_step(prompt_text(&format!("Step {}", i + 1))?);
    }

    Ok(recipe)
}

/// Prompt for a scale factor: one of the presets or a custom value.
pub fn prompt_scale_factor() -> Result<f64> {
    let mut options: Vec<String> = SCALE_PRESETS.iter().map(|f| format!("x{}", f)).collect();
    options.push("Custom factor".to_string());

    let selection = Select::new()
        .with_prompt("Scale by")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < SCALE_PRESETS.len() {
        return Ok(SCALE_PRESETS[selection]);
    }

    let input: String = Input::new()
        .with_prompt("Factor (positive number)")
        .interact_text()?;
    parse_scale_factor(&input)
}

/// Let the user pick one recipe; returns its store index, `None` when empty.
pub fn prompt_recipe_choice(store: &RecipeStore, prompt: &str) -> Result<Option<usize>> {
    let indices = store.sorted_indices();
    if indices.is_empty() {
        return Ok(None);
    }
    let labels = choice_labels(store, &indices);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Some(indices[selection]))
}

/// Let the user tick any number of recipes; returns their store indices.
pub fn prompt_recipe_selection(store: &RecipeStore) -> Result<Vec<usize>> {
    let indices = store.sorted_indices();
    if indices.is_empty() {
        return Ok(Vec::new());
    }
    let labels = choice_labels(store, &indices);

    let chosen = MultiSelect::new()
        .with_prompt("Select recipes (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;

    Ok(chosen.into_iter().map(|i| indices[i]).collect())
}

/// Menu labels for the given store entries; shared names get a `(n)` suffix.
pub fn choice_labels(store: &RecipeStore, indices: &[usize]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let recipes: Vec<&Recipe> = indices
        .iter()
        .filter_map(|&i| store.get_by_index(i))
        .collect();

    recipes
        .iter()
        .map(|recipe| {
            let total = recipes.iter().filter(|r| r.key() == recipe.key()).count();
            let nth = seen.entry(recipe.key()).or_insert(0);
            *nth += 1;
            if total > 1 {
                format!("{} ({})", recipe.name, nth)
            } else {
                recipe.name.clone()
            }
        })
        .collect()
}

/// Collect filter criteria; blank answers leave a criterion unset.
pub fn prompt_filter() -> Result<RecipeFilter> {
    let ingredient: String = Input::new()
        .with_prompt("Ingredient name (Enter to skip)")
        .allow_empty(true)
        .interact_text()?;

    let food_group: String = Input::new()
        .with_prompt("Food group (Enter to skip)")
        .allow_empty(true)
        .interact_text()?;

    let max_calories: String = Input::new()
        .with_prompt("Maximum calories (Enter to skip)")
        .allow_empty(true)
        .interact_text()?;

    let max_calories = match max_calories.trim() {
        "" => None,
        raw => Some(raw.parse::<f64>().map_err(|_| {
            RecipeError::InvalidInput(format!("'{}' is not a number", raw))
        })?),
    };

    Ok(RecipeFilter {
        ingredient: non_blank(ingredient),
        food_group: non_blank(food_group),
        max_calories,
    })
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_labels_number_shared_names() {
        let mut store = RecipeStore::new();
        store.add(Recipe::new("Soup")).unwrap();
        store.add(Recipe::new("Bread")).unwrap();
        store.add(Recipe::new("soup")).unwrap();

        let labels = choice_labels(&store, &store.sorted_indices());
        assert_eq!(labels, vec!["Bread", "Soup (1)", "soup (2)"]);
    }
}

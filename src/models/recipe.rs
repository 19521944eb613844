use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RecipeError, Result};
use crate::models::Ingredient;

/// A recipe with its working ingredient values and an optional snapshot of
/// the values it had before it was first scaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,

    /// Read through [`Recipe::ingredients`]; only the scaling engine and
    /// [`Recipe::add_ingredient`] mutate it, keeping it aligned with the snapshot.
    #[serde(default)]
    pub(crate) ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub steps: Vec<String>,

    /// Captured by the first scale call. Scaling never touches it; only
    /// `add_ingredient` extends it so both lists stay the same length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) original_ingredients: Option<Vec<Ingredient>>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            original_ingredients: None,
        }
    }

    /// Builder-style ingredient append for seeding and tests.
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.push_ingredient(ingredient);
        self
    }

    /// Builder-style step append for seeding and tests.
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Append an ingredient, rejecting negative or non-finite values.
    ///
    /// On a recipe that has already been scaled the ingredient also joins the
    /// snapshot with the values given here, so later scale and reset calls
    /// treat them as its original amounts.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> Result<()> {
        if !ingredient.is_valid() {
            return Err(RecipeError::InvalidIngredient(ingredient.debug_string()));
        }
        self.push_ingredient(ingredient);
        Ok(())
    }

    fn push_ingredient(&mut self, ingredient: Ingredient) {
        if let Some(original) = self.original_ingredients.as_mut() {
            original.push(ingredient.clone());
        }
        self.ingredients.push(ingredient);
    }

    /// Current (possibly scaled) ingredient values.
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn add_step(&mut self, step: impl Into<String>) {
        self.steps.push(step.into());
    }

    /// Snapshot taken on first scale, if any.
    pub fn original_ingredients(&self) -> Option<&[Ingredient]> {
        self.original_ingredients.as_deref()
    }

    /// True when the working values differ from the captured snapshot.
    pub fn is_scaled(&self) -> bool {
        match &self.original_ingredients {
            Some(original) => {
                debug_assert_eq!(original.len(), self.ingredients.len());
                original
                    .iter()
                    .zip(&self.ingredients)
                    .any(|(o, i)| o.quantity != i.quantity || o.calories != i.calories)
            }
            None => false,
        }
    }

    /// Sum of the current ingredient calories.
    pub fn total_calories(&self) -> f64 {
        self.ingredients.iter().map(|i| i.calories).sum()
    }

    /// Sum of the current ingredient quantities, regardless of unit.
    pub fn total_quantity(&self) -> f64 {
        self.ingredients.iter().map(|i| i.quantity).sum()
    }

    /// Validate the structural invariants of the recipe.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RecipeError::InvalidInput(
                "Recipe name must not be empty".to_string(),
            ));
        }
        if let Some(bad) = self.ingredients.iter().find(|i| !i.is_valid()) {
            return Err(RecipeError::InvalidIngredient(bad.debug_string()));
        }
        if let Some(original) = &self.original_ingredients {
            let aligned = original.len() == self.ingredients.len()
                && original
                    .iter()
                    .zip(&self.ingredients)
                    .all(|(o, i)| o.name == i.name);
            if !aligned {
                return Err(RecipeError::InvalidInput(format!(
                    "Original ingredients of '{}' do not match its current ingredients",
                    self.name
                )));
            }
        }
        Ok(())
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe: {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "Ingredients:")?;
        for ingredient in &self.ingredients {
            writeln!(
                f,
                "  - {} {} {} ({} cal, {})",
                ingredient.quantity,
                ingredient.unit_of_measure,
                ingredient.name,
                ingredient.calories,
                ingredient.food_group
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Steps:")?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, step)?;
        }
        writeln!(f)?;
        write!(f, "Total calories: {:.2}", self.total_calories())
    }
}

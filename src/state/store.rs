use strsim::jaro_winkler;
use tracing::{debug, info};

use crate::constants::{FUZZY_MATCH_THRESHOLD, FUZZY_MAX_CANDIDATES};
use crate::error::{RecipeError, Result};
use crate::models::Recipe;
use crate::state::premade::{premade_recipes, CHOCOLATE_CHIP_COOKIES, SPAGHETTI_BOLOGNESE};

/// Criteria for "display specific recipes". Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Case-insensitive substring of any ingredient name.
    pub ingredient: Option<String>,

    /// Case-insensitive food group that at least one ingredient belongs to.
    pub food_group: Option<String>,

    /// Upper bound (inclusive) on the recipe's total calories.
    pub max_calories: Option<f64>,
}

impl RecipeFilter {
    pub fn is_empty(&self) -> bool {
        self.ingredient.is_none() && self.food_group.is_none() && self.max_calories.is_none()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(needle) = &self.ingredient {
            let needle = needle.to_lowercase();
            if !recipe
                .ingredients()
                .iter()
                .any(|i| i.name.to_lowercase().contains(&needle))
            {
                return false;
            }
        }

        if let Some(group) = &self.food_group {
            let group = group.to_lowercase();
            if !recipe.ingredients().iter().any(|i| i.food_group_key() == group) {
                return false;
            }
        }

        if let Some(max) = self.max_calories {
            if recipe.total_calories() > max {
                return false;
            }
        }

        true
    }
}

/// In-memory catalogue of recipes, in insertion order.
///
/// Names are not required to be unique; lookups by name return the first
/// case-insensitive match, while the index methods address one exact entry.
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the premade recipes.
    pub fn with_premade() -> Self {
        let mut store = Self::new();
        store.seed_premade();
        store
    }

    /// Add the premade recipes unless either of them is already present.
    ///
    /// Returns the number of recipes added.
    pub fn seed_premade(&mut self) -> usize {
        if self.get(SPAGHETTI_BOLOGNESE).is_some() || self.get(CHOCOLATE_CHIP_COOKIES).is_some() {
            debug!("premade recipes already present, skipping seed");
            return 0;
        }

        let premade = premade_recipes();
        let added = premade.len();
        self.recipes.extend(premade);
        info!(added, "seeded premade recipes");
        added
    }

    /// Add a recipe after validating its name and ingredients.
    pub fn add(&mut self, recipe: Recipe) -> Result<()> {
        recipe.validate()?;
        debug!(recipe = %recipe.name, ingredients = recipe.ingredients().len(), "added recipe");
        self.recipes.push(recipe);
        Ok(())
    }

    /// Get a recipe by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        let key = name.trim().to_lowercase();
        self.recipes.iter().find(|r| r.key() == key)
    }

    /// Get a mutable reference to a recipe by name (case-insensitive).
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Recipe> {
        let key = name.trim().to_lowercase();
        self.recipes.iter_mut().find(|r| r.key() == key)
    }

    /// Like [`get_mut`](Self::get_mut) but fails with `RecipeNotFound`.
    pub fn require_mut(&mut self, name: &str) -> Result<&mut Recipe> {
        self.get_mut(name)
            .ok_or_else(|| RecipeError::RecipeNotFound(name.to_string()))
    }

    /// Recipe names similar to `query`, best match first.
    pub fn find_closest(&self, query: &str) -> Vec<(&Recipe, f64)> {
        let query = query.trim().to_lowercase();
        let mut candidates: Vec<(&Recipe, f64)> = self
            .recipes
            .iter()
            .map(|r| (r, jaro_winkler(&r.key(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(FUZZY_MAX_CANDIDATES);
        candidates
    }

    /// Get a recipe by its position in insertion order.
    pub fn get_by_index(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    /// Mutable access by position; fails with `RecipeNotFound`.
    pub fn require_by_index_mut(&mut self, index: usize) -> Result<&mut Recipe> {
        self.recipes
            .get_mut(index)
            .ok_or_else(|| RecipeError::RecipeNotFound(format!("#{}", index)))
    }

    /// Resolve a multi-selection by name, preserving the requested order.
    ///
    /// A name requested more than once resolves to successive recipes sharing
    /// that name, so duplicates are each read once before any repeats.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&Recipe>> {
        let mut taken: Vec<usize> = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            let key = name.trim().to_lowercase();
            let mut matching = self
                .recipes
                .iter()
                .enumerate()
                .filter(|(_, r)| r.key() == key)
                .map(|(i, _)| i);

            let first = matching
                .next()
                .ok_or_else(|| RecipeError::RecipeNotFound(name.to_string()))?;
            let index = std::iter::once(first)
                .chain(matching)
                .find(|i| !taken.contains(i))
                .unwrap_or(first);
            taken.push(index);
        }

        self.select_indices(&taken)
    }

    /// Resolve a multi-selection by position, preserving the requested order.
    pub fn select_indices(&self, indices: &[usize]) -> Result<Vec<&Recipe>> {
        indices
            .iter()
            .map(|&i| {
                self.get_by_index(i)
                    .ok_or_else(|| RecipeError::RecipeNotFound(format!("#{}", i)))
            })
            .collect()
    }

    /// Positions of all recipes, ordered alphabetically by name.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.recipes.len()).collect();
        indices.sort_by_key(|&i| self.recipes[i].key());
        indices
    }

    /// All recipes ordered alphabetically by name.
    pub fn sorted(&self) -> Vec<&Recipe> {
        self.sorted_indices()
            .into_iter()
            .map(|i| &self.recipes[i])
            .collect()
    }

    /// Recipes matching `filter`, ordered alphabetically by name.
    pub fn filter(&self, filter: &RecipeFilter) -> Vec<&Recipe> {
        self.sorted()
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect()
    }

    /// All recipes in insertion order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Remove every recipe, premade ones included. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.recipes.len();
        self.recipes.clear();
        info!(removed, "cleared recipe store");
        removed
    }

    /// Count of recipes in the store.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check if the store has no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

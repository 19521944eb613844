use tracing::{debug, warn};

use crate::constants::SCALE_DECIMALS;
use crate::error::{RecipeError, Result};
use crate::models::Recipe;

/// Round a value to `decimals` decimal places.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// A scale factor must be a finite number greater than zero.
pub fn validate_factor(factor: f64) -> Result<f64> {
    if factor.is_finite() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(RecipeError::InvalidScaleFactor(factor.to_string()))
    }
}

/// Parse raw user input into a valid scale factor.
pub fn parse_scale_factor(raw: &str) -> Result<f64> {
    let factor: f64 = raw
        .trim()
        .parse()
        .map_err(|_| RecipeError::InvalidScaleFactor(raw.trim().to_string()))?;
    validate_factor(factor)
}

/// Scale every ingredient of `recipe` to `factor` times its original value.
///
/// The first call snapshots the current ingredients; every call computes from
/// that snapshot, so factors never compound and a repeated factor is a no-op.
/// Scaled values are rounded to [`SCALE_DECIMALS`] places.
pub fn scale(recipe: &mut Recipe, factor: f64) -> Result<()> {
    let factor = validate_factor(factor).inspect_err(|_| {
        warn!(recipe = %recipe.name, factor, "rejected scale factor");
    })?;

    let original = match recipe.original_ingredients.take() {
        Some(original) => original,
        None => recipe.ingredients.clone(),
    };

    debug_assert_eq!(original.len(), recipe.ingredients.len());
    for (current, base) in recipe.ingredients.iter_mut().zip(&original) {
        current.quantity = round_to(base.quantity * factor, SCALE_DECIMALS);
        current.calories = round_to(base.calories * factor, SCALE_DECIMALS);
    }
    recipe.original_ingredients = Some(original);

    debug!(recipe = %recipe.name, factor, "scaled recipe");
    Ok(())
}

/// Restore quantities and calories from the snapshot taken on first scale.
///
/// No-op for a recipe that was never scaled. The snapshot is kept so the
/// recipe can be scaled again from the same baseline.
pub fn reset_to_original(recipe: &mut Recipe) {
    let Some(original) = recipe.original_ingredients.as_ref() else {
        debug!(recipe = %recipe.name, "reset skipped, recipe was never scaled");
        return;
    };

    debug_assert_eq!(original.len(), recipe.ingredients.len());
    for (current, base) in recipe.ingredients.iter_mut().zip(original.iter()) {
        current.quantity = base.quantity;
        current.calories = base.calories;
    }

    debug!(recipe = %recipe.name, "reset recipe to original values");
}

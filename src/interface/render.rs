use crate::aggregation::{percentage_sum, FoodGroupShare};
use crate::constants::CHART_WIDTH;
use crate::models::Recipe;

/// Display one recipe in full, flagging scaled values.
pub fn display_recipe(recipe: &Recipe) {
    println!();
    println!("{}", recipe);
    if recipe.is_scaled() {
        println!("(scaled, use reset to restore the original quantities)");
    }
    println!();
}

/// Display a list of recipes with ingredient count and total calories.
pub fn display_recipe_list(recipes: &[&Recipe], title: &str) {
    if recipes.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} recipes) ===", title, recipes.len());
    println!();

    let max_name_len = recipes.iter().map(|r| r.name.len()).max().unwrap_or(10);

    for (i, recipe) in recipes.iter().enumerate() {
        let scaled = if recipe.is_scaled() { "  [scaled]" } else { "" };
        println!(
            "{:>3}. {:<width$} - {:>2} ingredients | {:>8.2} cal{}",
            i + 1,
            recipe.name,
            recipe.ingredients().len(),
            recipe.total_calories(),
            scaled,
            width = max_name_len
        );
    }

    println!();
}

/// One chart row: label, bar scaled to [`CHART_WIDTH`], percentage.
pub fn chart_row(share: &FoodGroupShare, label_width: usize) -> String {
    let filled = ((share.percentage / 100.0) * CHART_WIDTH as f64).round() as usize;
    let bar = "#".repeat(filled.min(CHART_WIDTH));
    format!(
        "{:<label_width$} |{:<chart_width$}| {:>6.2}%",
        share.food_group,
        bar,
        share.percentage,
        label_width = label_width,
        chart_width = CHART_WIDTH
    )
}

/// Display a food-group breakdown as a horizontal bar chart.
pub fn display_breakdown(shares: &[FoodGroupShare], recipe_names: &[&str]) {
    println!();
    println!("=== Food Group Breakdown ===");
    println!("Recipes: {}", recipe_names.join(", "));
    println!();

    let label_width = shares.iter().map(|s| s.food_group.len()).max().unwrap_or(10);
    for share in shares {
        println!("{}", chart_row(share, label_width));
    }

    println!();
    println!("Total: {:.2}%", percentage_sum(shares));
    println!("Note: quantities are summed as recorded, without unit conversion.");
    println!();
}

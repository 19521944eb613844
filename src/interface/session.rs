use dialoguer::Select;
use tracing::warn;

use crate::aggregation::food_group_breakdown;
use crate::error::{RecipeError, Result};
use crate::interface::prompts::{
    prompt_filter, prompt_recipe, prompt_recipe_choice, prompt_recipe_selection,
    prompt_scale_factor, prompt_yes_no,
};
use crate::interface::render::{display_breakdown, display_recipe, display_recipe_list};
use crate::scaling::{reset_to_original, scale};
use crate::state::RecipeStore;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddRecipe,
    DisplayAll,
    DisplaySpecific,
    ShowDetails,
    Scale,
    Reset,
    Breakdown,
    ClearAll,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 9] = [
        MenuAction::AddRecipe,
        MenuAction::DisplayAll,
        MenuAction::DisplaySpecific,
        MenuAction::ShowDetails,
        MenuAction::Scale,
        MenuAction::Reset,
        MenuAction::Breakdown,
        MenuAction::ClearAll,
        MenuAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddRecipe => "Add a recipe",
            MenuAction::DisplayAll => "Display all recipes",
            MenuAction::DisplaySpecific => "Display specific recipes",
            MenuAction::ShowDetails => "Show recipe details",
            MenuAction::Scale => "Scale a recipe",
            MenuAction::Reset => "Reset a recipe to its original quantities",
            MenuAction::Breakdown => "Food group breakdown",
            MenuAction::ClearAll => "Clear all recipes",
            MenuAction::Quit => "Quit",
        }
    }

    /// Actions that only make sense with at least one recipe stored.
    pub fn needs_recipes(self) -> bool {
        !matches!(
            self,
            MenuAction::AddRecipe | MenuAction::DisplayAll | MenuAction::Quit
        )
    }
}

/// Run the interactive menu until the user quits.
///
/// Recoverable errors (bad input, invalid factor, degenerate breakdown) are
/// reported and the menu is shown again; prompt I/O failures end the session.
pub fn run_session(store: &mut RecipeStore) -> Result<()> {
    if store.is_empty() {
        println!("Please add a recipe if you want to proceed with the app!");
    }

    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        println!();
        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;
        let action = MenuAction::ALL[selection];

        if action == MenuAction::Quit {
            return Ok(());
        }

        if action.needs_recipes() && store.is_empty() {
            println!("There are no recipes yet. Please add a recipe first.");
            continue;
        }

        match handle_action(store, action) {
            Ok(()) => {}
            Err(e @ (RecipeError::Prompt(_) | RecipeError::Io(_))) => return Err(e),
            Err(e) => {
                warn!(action = action.label(), error = %e, "menu action failed");
                println!("Error: {}", e);
            }
        }
    }
}

fn handle_action(store: &mut RecipeStore, action: MenuAction) -> Result<()> {
    match action {
        MenuAction::AddRecipe => {
            let recipe = prompt_recipe()?;
            let name = recipe.name.clone();
            store.add(recipe)?;
            println!("Added '{}'.", name);
        }
        MenuAction::DisplayAll => {
            display_recipe_list(&store.sorted(), "All Recipes");
        }
        MenuAction::DisplaySpecific => {
            let filter = prompt_filter()?;
            display_recipe_list(&store.filter(&filter), "Matching Recipes");
        }
        MenuAction::ShowDetails => {
            if let Some(index) = prompt_recipe_choice(store, "Which recipe?")? {
                let recipe = store
                    .get_by_index(index)
                    .ok_or_else(|| RecipeError::RecipeNotFound(format!("#{}", index)))?;
                display_recipe(recipe);
            }
        }
        MenuAction::Scale => {
            if let Some(index) = prompt_recipe_choice(store, "Which recipe do you want to scale?")? {
                let factor = prompt_scale_factor()?;
                let recipe = store.require_by_index_mut(index)?;
                scale(recipe, factor)?;
                display_recipe(recipe);
            }
        }
        MenuAction::Reset => {
            if let Some(index) = prompt_recipe_choice(store, "Which recipe do you want to reset?")? {
                let recipe = store.require_by_index_mut(index)?;
                reset_to_original(recipe);
                display_recipe(recipe);
            }
        }
        MenuAction::Breakdown => {
            let indices = prompt_recipe_selection(store)?;
            let selected = store.select_indices(&indices)?;
            let shares = food_group_breakdown(selected.iter().copied())?;
            let labels: Vec<&str> = selected.iter().map(|r| r.name.as_str()).collect();
            display_breakdown(&shares, &labels);
        }
        MenuAction::ClearAll => {
            let confirmed = prompt_yes_no(
                "Are you sure you want to clear all recipes, including premade ones? This cannot be undone.",
                false,
            )?;
            if confirmed {
                let removed = store.clear();
                println!("All recipes have been cleared ({} removed).", removed);
            }
        }
        MenuAction::Quit => {}
    }
    Ok(())
}

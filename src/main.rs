use clap::Parser;
use tracing::info;

use recipe_catalogue::aggregation::food_group_breakdown;
use recipe_catalogue::cli::{Cli, Command};
use recipe_catalogue::error::{RecipeError, Result};
use recipe_catalogue::interface::{
    breakdown_json, display_breakdown, display_recipe, display_recipe_list, run_session,
    write_breakdown_csv,
};
use recipe_catalogue::logging::setup_logging;
use recipe_catalogue::models::Recipe;
use recipe_catalogue::scaling::{parse_scale_factor, scale};
use recipe_catalogue::state::{RecipeFilter, RecipeStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut store = if cli.no_seed {
        RecipeStore::new()
    } else {
        RecipeStore::with_premade()
    };
    info!(recipes = store.len(), "catalogue ready");

    match cli.command.unwrap_or_default() {
        Command::Session => run_session(&mut store),
        Command::List => {
            display_recipe_list(&store.sorted(), "All Recipes");
            Ok(())
        }
        Command::Show { name } => cmd_show(&store, &name),
        Command::Scale { name, factor } => cmd_scale(&mut store, &name, &factor),
        Command::Breakdown { names, json, csv } => {
            cmd_breakdown(&store, &names, json, csv.as_deref())
        }
        Command::Filter {
            ingredient,
            food_group,
            max_calories,
        } => {
            let filter = RecipeFilter {
                ingredient,
                food_group,
                max_calories,
            };
            display_recipe_list(&store.filter(&filter), "Matching Recipes");
            Ok(())
        }
    }
}

/// Look up a recipe, suggesting close names on a miss.
fn lookup<'a>(store: &'a RecipeStore, name: &str) -> Result<&'a Recipe> {
    if let Some(recipe) = store.get(name) {
        return Ok(recipe);
    }

    let suggestions: Vec<&str> = store
        .find_closest(name)
        .into_iter()
        .map(|(r, _)| r.name.as_str())
        .collect();
    if !suggestions.is_empty() {
        eprintln!("Did you mean: {}?", suggestions.join(", "));
    }
    Err(RecipeError::RecipeNotFound(name.to_string()))
}

/// Show one recipe.
fn cmd_show(store: &RecipeStore, name: &str) -> Result<()> {
    display_recipe(lookup(store, name)?);
    Ok(())
}

/// Scale one recipe and print it.
fn cmd_scale(store: &mut RecipeStore, name: &str, raw_factor: &str) -> Result<()> {
    let factor = parse_scale_factor(raw_factor)?;
    let name = lookup(store, name)?.name.clone();

    let recipe = store.require_mut(&name)?;
    scale(recipe, factor)?;
    println!("Scaled '{}' by x{}.", recipe.name, factor);
    display_recipe(recipe);
    Ok(())
}

/// Food-group breakdown over the named recipes, or all of them.
fn cmd_breakdown(
    store: &RecipeStore,
    names: &[String],
    json: bool,
    csv: Option<&std::path::Path>,
) -> Result<()> {
    let selected: Vec<&Recipe> = if names.is_empty() {
        store.sorted()
    } else {
        names
            .iter()
            .map(|n| lookup(store, n))
            .collect::<Result<_>>()?
    };

    let shares = food_group_breakdown(selected.iter().copied())?;

    if json {
        println!("{}", breakdown_json(&shares)?);
    } else {
        let labels: Vec<&str> = selected.iter().map(|r| r.name.as_str()).collect();
        display_breakdown(&shares, &labels);
    }

    if let Some(path) = csv {
        write_breakdown_csv(&shares, path)?;
        println!("Breakdown written to {}", path.display());
    }

    Ok(())
}

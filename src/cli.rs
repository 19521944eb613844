use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Recipe Catalogue — record recipes, rescale them, and see their food-group mix.
#[derive(Parser, Debug)]
#[command(name = "recipe_catalogue")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Start with an empty catalogue instead of the premade recipes.
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Run the interactive menu.
    #[default]
    Session,

    /// List all recipes alphabetically.
    List,

    /// Show the details of one recipe.
    Show {
        /// Recipe name (case-insensitive).
        name: String,
    },

    /// Scale a recipe by a factor and print the result.
    Scale {
        /// Recipe name (case-insensitive).
        name: String,

        /// Positive multiplier, e.g. 0.5, 2 or 3.
        #[arg(allow_hyphen_values = true)]
        factor: String,
    },

    /// Show the food-group breakdown of one or more recipes.
    Breakdown {
        /// Recipe names; all recipes when omitted.
        names: Vec<String>,

        /// Print the breakdown as JSON.
        #[arg(long)]
        json: bool,

        /// Also export the breakdown to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// List recipes matching an ingredient, food group, or calorie limit.
    Filter {
        /// Ingredient name (substring, case-insensitive).
        #[arg(long)]
        ingredient: Option<String>,

        /// Food group (case-insensitive).
        #[arg(long)]
        food_group: Option<String>,

        /// Maximum total calories.
        #[arg(long)]
        max_calories: Option<f64>,
    },
}

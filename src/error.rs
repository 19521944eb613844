use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeError {
    /// Holds the rejected factor as the user gave it, numeric or not.
    #[error("Invalid scale factor: {0} (must be a positive number)")]
    InvalidScaleFactor(String),

    #[error("No recipes selected")]
    EmptySelection,

    #[error("Selected recipes have a total ingredient quantity of zero")]
    DegenerateAggregation,

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Invalid ingredient: {0}")]
    InvalidIngredient(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;

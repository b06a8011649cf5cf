use thiserror::Error;

#[derive(Debug, Error)]
pub enum BeanError {
    /// A custom-size order reached the pricing engine without a unit value
    /// for one of the recipe's ingredients.
    #[error("Missing customization value for {0}")]
    MissingCustomizationValue(String),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("A blend named '{0}' already exists")]
    DuplicateBlend(String),

    #[error("Invalid recipe '{name}': {reason}")]
    InvalidRecipe { name: String, reason: String },

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

    #[error("No recipes in catalog")]
    EmptyCatalog,

    /// A line or total grew past what a `Decimal` can hold.
    #[error("Price too large to compute for {0}")]
    PriceOverflow(String),
}

pub type Result<T> = std::result::Result<T, BeanError>;

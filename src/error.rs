use thiserror::Error;

/// Errors that can occur while importing recipes or building shopping lists
#[derive(Error, Debug)]
pub enum ImportError {
    /// Nothing could be recovered from the pasted text: no name, no
    /// ingredients and no steps
    #[error(
        "Could not parse the recipe. Check the text and make sure it has headers such as \"Ainekset\" and \"Ohjeet\""
    )]
    ParseFailure,

    /// A recipe named on the command line is not in the store
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    /// Reading or writing the recipe store failed
    #[error("Recipe store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The recipe store or a recipe document is not valid JSON
    #[error("Invalid recipe data: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

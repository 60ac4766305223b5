//! UniFFI bindings for reseptikirja
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! Everything here is synchronous; the app keeps its own storage and only calls in
//! for parsing and list building.

use std::fmt;

use crate::{ImportError, Ingredient, Recipe, ShoppingItem};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible ingredient row
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub name: String,
    /// Missing quantity is `None`, not zero
    pub amount: Option<f64>,
    /// Canonical unit code, empty string if none
    pub unit: String,
}

/// FFI-compatible recipe structure
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    /// Recipe name/title
    pub name: String,
    /// List of ingredients
    pub ingredients: Vec<FfiIngredient>,
    /// Ordered instruction steps
    pub steps: Vec<String>,
}

/// FFI-compatible shopping list line
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiShoppingItem {
    pub name: String,
    pub amount: Option<f64>,
    pub unit: String,
    /// Names of the recipes that contributed to this line, sorted
    pub source_recipes: Vec<String>,
    /// Display text, e.g. `maitoa: 1.1 l`
    pub label: String,
}

impl From<Ingredient> for FfiIngredient {
    fn from(ingredient: Ingredient) -> Self {
        FfiIngredient {
            name: ingredient.name,
            amount: ingredient.amount,
            unit: ingredient.unit,
        }
    }
}

impl From<FfiIngredient> for Ingredient {
    fn from(ffi: FfiIngredient) -> Self {
        Ingredient::new(ffi.name, ffi.amount, ffi.unit)
    }
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            name: recipe.name,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            steps: recipe.steps,
        }
    }
}

impl From<FfiRecipe> for Recipe {
    fn from(ffi: FfiRecipe) -> Self {
        Recipe {
            name: ffi.name,
            ingredients: ffi.ingredients.into_iter().map(Into::into).collect(),
            steps: ffi.steps,
        }
    }
}

impl From<ShoppingItem> for FfiShoppingItem {
    fn from(item: ShoppingItem) -> Self {
        let label = item.to_string();
        FfiShoppingItem {
            name: item.name,
            amount: item.amount,
            unit: item.unit,
            source_recipes: item.source_recipes.into_iter().collect(),
            label,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiImportError {
    /// Nothing could be recognized in the pasted text
    ParseFailure { message: String },
    /// A named recipe does not exist
    RecipeNotFound { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Storage or configuration problem
    StorageError { message: String },
}

impl fmt::Display for FfiImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiImportError::ParseFailure { message } => write!(f, "Parse failure: {}", message),
            FfiImportError::RecipeNotFound { message } => {
                write!(f, "Recipe not found: {}", message)
            }
            FfiImportError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiImportError::StorageError { message } => write!(f, "Storage error: {}", message),
        }
    }
}

impl std::error::Error for FfiImportError {}

impl From<ImportError> for FfiImportError {
    fn from(err: ImportError) -> Self {
        let message = err.to_string();
        match err {
            ImportError::ParseFailure => FfiImportError::ParseFailure { message },
            ImportError::RecipeNotFound(name) => FfiImportError::RecipeNotFound { message: name },
            ImportError::Json(_) => FfiImportError::InvalidInput { message },
            ImportError::Io(_) | ImportError::ConfigError(_) => {
                FfiImportError::StorageError { message }
            }
        }
    }
}

/// Parse pasted recipe text into a recipe draft for the edit form
///
/// # Arguments
/// * `text` - The recipe text as pasted by the user
///
/// # Returns
/// An `FfiRecipe` with whatever could be recognized, or `ParseFailure`
/// when nothing could
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_pasted_recipe(text: String) -> Result<FfiRecipe, FfiImportError> {
    let recipe = crate::parse_recipe_text(&text)?;
    Ok(recipe.into())
}

/// Build the consolidated shopping list for the selected recipes
///
/// # Arguments
/// * `recipes` - The selected recipes, in any order
///
/// # Returns
/// Shopping list lines in Finnish alphabetical order
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn shopping_list_for(recipes: Vec<FfiRecipe>) -> Vec<FfiShoppingItem> {
    let recipes: Vec<Recipe> = recipes.into_iter().map(Into::into).collect();
    crate::build_shopping_list(&recipes)
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Render a recipe back to pasteable text with `Ainekset`/`Ohjeet` headers
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn render_recipe_text(recipe: FfiRecipe) -> String {
    Recipe::from(recipe).to_text()
}

/// Normalize a unit typed into the edit form, e.g. `desilitraa` -> `dl`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normalize_unit_code(unit: String) -> String {
    crate::normalize_unit(&unit)
}

/// Parse a quantity typed into the edit form: `2`, `1,5`, `1/2`, `½`
///
/// Returns `InvalidInput` for text that is not a number.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_amount(text: String) -> Result<Option<f64>, FfiImportError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    crate::model::parse_amount_text(&text)
        .map(Some)
        .ok_or_else(|| FfiImportError::InvalidInput {
            message: format!("Not a quantity: {}", text.trim()),
        })
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_recipe_conversion() {
        let recipe = Recipe {
            name: "Pannukakku".to_string(),
            ingredients: vec![
                Ingredient::new("maitoa", Some(5.0), "dl"),
                Ingredient::new("suolaa", None, ""),
            ],
            steps: vec!["Sekoita.".to_string(), "Paista.".to_string()],
        };

        let ffi_recipe: FfiRecipe = recipe.clone().into();
        assert_eq!(ffi_recipe.name, "Pannukakku");
        assert_eq!(ffi_recipe.ingredients.len(), 2);
        assert_eq!(ffi_recipe.ingredients[1].amount, None);
        assert_eq!(ffi_recipe.steps.len(), 2);

        let back: Recipe = ffi_recipe.into();
        assert_eq!(back, recipe);
    }

    #[test]
    fn test_parse_pasted_recipe() {
        let text = "Puuro\nAinekset\n2 dl hiutaleita\nOhjeet\nKeitä.";
        let recipe = parse_pasted_recipe(text.to_string()).unwrap();
        assert_eq!(recipe.name, "Puuro");
        assert_eq!(recipe.ingredients[0].unit, "dl");
        assert_eq!(recipe.steps, vec!["Keitä."]);
    }

    #[test]
    fn test_parse_failure_maps_to_ffi_error() {
        let err = parse_pasted_recipe("   \n  ".to_string()).unwrap_err();
        assert!(matches!(err, FfiImportError::ParseFailure { .. }));
        assert!(err.to_string().contains("Ainekset"));
    }

    #[test]
    fn test_shopping_list_for() {
        let recipe = |name: &str, amount: f64| FfiRecipe {
            name: name.to_string(),
            ingredients: vec![FfiIngredient {
                name: "maitoa".to_string(),
                amount: Some(amount),
                unit: "dl".to_string(),
            }],
            steps: Vec::new(),
        };

        let list = shopping_list_for(vec![recipe("Puuro", 6.0), recipe("Pannukakku", 5.0)]);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].unit, "l");
        assert_eq!(list[0].label, "maitoa: 1.1 l");
        assert_eq!(list[0].source_recipes, vec!["Pannukakku", "Puuro"]);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,5".to_string()).unwrap(), Some(1.5));
        assert_eq!(parse_amount("½".to_string()).unwrap(), Some(0.5));
        assert_eq!(parse_amount(" ".to_string()).unwrap(), None);
        assert!(matches!(
            parse_amount("paljon".to_string()),
            Err(FfiImportError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_normalize_unit_code() {
        assert_eq!(normalize_unit_code("Desilitraa".to_string()), "dl");
        assert_eq!(normalize_unit_code("nippu".to_string()), "nippu");
    }

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }
}

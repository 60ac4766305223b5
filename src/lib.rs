//! # reseptikirja
//!
//! Household recipe book core: turns pasted recipe text into structured
//! recipes and builds consolidated shopping lists from selected recipes.
//!
//! ```
//! use reseptikirja::{build_shopping_list, parse_recipe_text};
//!
//! let pancakes = parse_recipe_text("Pannukakku\nAinekset\n5 dl maitoa\n2 kananmunaa").unwrap();
//! let porridge = parse_recipe_text("Puuro\nAinekset\n6 dl maitoa").unwrap();
//!
//! let list = build_shopping_list(&[pancakes, porridge]);
//! assert_eq!(list[0].to_string(), "kananmunaa: 2");
//! assert_eq!(list[1].to_string(), "maitoa: 1.1 l");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod fraction;
pub mod model;
pub mod parser;
pub mod shopping;
pub mod store;
pub mod units;

pub mod uniffi_bindings;

pub use config::{AppConfig, OutputFormat};
pub use error::ImportError;
pub use fraction::parse_fraction;
pub use model::{Ingredient, ItemKey, Recipe, ShoppingItem};
pub use shopping::Checklist;
pub use units::normalize_unit;

/// Parse pasted recipe text into a structured recipe draft.
///
/// Fails with [`ImportError::ParseFailure`] only when nothing at all could
/// be recognized (for example empty input).
pub fn parse_recipe_text(text: &str) -> Result<Recipe, ImportError> {
    parser::parse(text)
}

/// Aggregate the ingredients of the selected recipes into a sorted
/// shopping list.
pub fn build_shopping_list<'a, I>(recipes: I) -> Vec<ShoppingItem>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    shopping::aggregate(recipes)
}

//! JSON file recipe store used by the command line tool.
//!
//! The file holds a JSON array of recipes. A missing file is an empty
//! recipe book.

use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ImportError;
use crate::model::Recipe;

/// Load all recipes from `path`.
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>, ImportError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Recipe store {} does not exist yet", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let recipes: Vec<Recipe> = serde_json::from_str(&contents)?;
    debug!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

/// Overwrite the store at `path` with `recipes`.
pub fn save_recipes(path: &Path, recipes: &[Recipe]) -> Result<(), ImportError> {
    let json = serde_json::to_string_pretty(recipes)?;
    fs::write(path, json)?;
    debug!("Saved {} recipes to {}", recipes.len(), path.display());
    Ok(())
}

/// Normalize `recipe` and add it to the store, replacing any recipe with
/// the same name (case-insensitive).
pub fn upsert_recipe(path: &Path, recipe: &Recipe) -> Result<(), ImportError> {
    let recipe = recipe.normalized();
    let mut recipes = load_recipes(path)?;
    let key = recipe.name.to_lowercase();
    match recipes
        .iter_mut()
        .find(|existing| existing.name.trim().to_lowercase() == key)
    {
        Some(existing) => *existing = recipe,
        None => recipes.push(recipe),
    }
    save_recipes(path, &recipes)
}

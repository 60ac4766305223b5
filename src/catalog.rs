//! Finding and selecting stored recipes.

use crate::error::ImportError;
use crate::model::Recipe;
use crate::shopping::finnish_cmp;

/// Recipes whose name contains `term` (case-insensitive), in Finnish
/// alphabetical order. An empty term matches everything.
pub fn search<'a>(recipes: &'a [Recipe], term: &str) -> Vec<&'a Recipe> {
    let term = term.trim().to_lowercase();
    let mut matches: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| recipe.name.to_lowercase().contains(&term))
        .collect();
    matches.sort_by(|a, b| finnish_cmp(&a.name, &b.name));
    matches
}

/// Resolve selected recipe names (exact, case-insensitive) in the order
/// given. The first unknown name is an error.
pub fn select<'a, S: AsRef<str>>(
    recipes: &'a [Recipe],
    names: &[S],
) -> Result<Vec<&'a Recipe>, ImportError> {
    names
        .iter()
        .map(|name| {
            let wanted = name.as_ref().trim().to_lowercase();
            recipes
                .iter()
                .find(|recipe| recipe.name.trim().to_lowercase() == wanted)
                .ok_or_else(|| ImportError::RecipeNotFound(name.as_ref().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Vec<Recipe> {
        ["Pannukakku", "Lohikeitto", "Äitien pulla", "lihakeitto"]
            .iter()
            .map(|name| Recipe {
                name: name.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn names(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_search_filters_and_sorts() {
        let book = book();
        assert_eq!(names(&search(&book, "KEITTO")), vec!["lihakeitto", "Lohikeitto"]);
        assert_eq!(
            names(&search(&book, "")),
            vec!["lihakeitto", "Lohikeitto", "Pannukakku", "Äitien pulla"]
        );
        assert!(search(&book, "pizza").is_empty());
    }

    #[test]
    fn test_select_by_name() {
        let book = book();
        let selected = select(&book, &["pannukakku", " Lohikeitto "]).unwrap();
        assert_eq!(names(&selected), vec!["Pannukakku", "Lohikeitto"]);
    }

    #[test]
    fn test_select_unknown_name() {
        let book = book();
        match select(&book, &["Pizza"]) {
            Err(ImportError::RecipeNotFound(name)) => assert_eq!(name, "Pizza"),
            other => panic!("expected RecipeNotFound, got {:?}", other.map(|r| r.len())),
        }
    }
}

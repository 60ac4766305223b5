//! Free-text recipe import.
//!
//! Pasted recipes have no fixed grammar, so parsing is a best-effort
//! heuristic: lines before the first section header form the name, then a
//! forward-only stage machine sorts the remaining lines into ingredients and
//! instruction steps. Lines that resist parsing are kept verbatim rather
//! than rejected.
//!
//! ```
//! use reseptikirja::parse_recipe_text;
//!
//! let recipe = parse_recipe_text("Kermakastike\nAinekset\n1½ dl kermaa\nOhjeet\n1. Kuumenna.").unwrap();
//! assert_eq!(recipe.name, "Kermakastike");
//! assert_eq!(recipe.ingredients[0].amount, Some(1.5));
//! assert_eq!(recipe.steps, vec!["Kuumenna."]);
//! ```

mod header;
mod line;

pub use header::{header_stage, Stage, INGREDIENT_HEADERS, INSTRUCTION_HEADERS};
pub use line::{clean_instruction, parse_ingredient_line, ParsedLine};

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ImportError;
use crate::model::{Ingredient, Recipe};

static TABS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t+").unwrap());

/// Single-slot buffer for a quantity-only line such as `2 dl` whose name
/// may follow on the next line.
#[derive(Debug, Default)]
enum Buffer {
    #[default]
    Empty,
    Pending(ParsedLine),
}

/// Ingredients and steps collected while walking the lines.
#[derive(Debug, Default)]
struct Draft {
    ingredients: Vec<Ingredient>,
    steps: Vec<String>,
    buffer: Buffer,
}

impl Draft {
    /// Emit a pending quantity-only line on its own, named by its raw text.
    fn flush(&mut self) {
        if let Buffer::Pending(pending) = std::mem::take(&mut self.buffer) {
            debug!("Flushing buffered line as its own ingredient: {}", pending.original_text);
            self.ingredients.push(pending.into_ingredient());
        }
    }

    fn push_ingredient_line(&mut self, parsed: ParsedLine) {
        match std::mem::take(&mut self.buffer) {
            Buffer::Pending(pending) if parsed.is_name_only() => {
                debug!(
                    "Joining buffered '{}' with name '{}'",
                    pending.original_text, parsed.name
                );
                self.ingredients.push(pending.complete_with(parsed));
            }
            Buffer::Pending(pending) => {
                debug!("Flushing buffered line as its own ingredient: {}", pending.original_text);
                self.ingredients.push(pending.into_ingredient());
                self.accept(parsed);
            }
            Buffer::Empty => self.accept(parsed),
        }
    }

    fn accept(&mut self, parsed: ParsedLine) {
        if parsed.is_quantity_only() {
            trace!("Buffering quantity-only line: {}", parsed.original_text);
            self.buffer = Buffer::Pending(parsed);
        } else {
            self.ingredients.push(parsed.into_ingredient());
        }
    }

    fn push_step(&mut self, line: &str) {
        if let Some(step) = clean_instruction(line) {
            self.steps.push(step);
        }
    }
}

/// Parse pasted recipe text into a structured recipe draft.
///
/// Returns [`ImportError::ParseFailure`] only when nothing at all was
/// recovered; any partial result is returned for the user to review.
pub fn parse(text: &str) -> Result<Recipe, ImportError> {
    let lines: Vec<String> = text
        .lines()
        .map(|line| TABS.replace_all(line, " ").trim().to_string())
        .collect();

    let header_index = header::first_header(&lines);
    let (name, body_start, mut stage) = match header_index {
        Some(idx) => {
            let name = lines[..idx]
                .iter()
                .filter(|line| !line.is_empty())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            (name, idx, Stage::Name)
        }
        // Without headers the first line names the recipe and ingredients
        // follow until a blank line
        None => match lines.iter().position(|line| !line.is_empty()) {
            Some(idx) => (lines[idx].clone(), idx + 1, Stage::Ingredients),
            None => (String::new(), lines.len(), Stage::Name),
        },
    };
    debug!("Recipe name: '{}', headers found: {}", name, header_index.is_some());

    let mut draft = Draft::default();
    for line in &lines[body_start..] {
        if let Some(next) = header_stage(line) {
            draft.flush();
            if next > stage {
                debug!("Entering {:?} stage at '{}'", next, line);
                stage = next;
            } else {
                debug!("Ignoring {:?} header while in {:?} stage", next, stage);
            }
            continue;
        }

        if line.is_empty() {
            draft.flush();
            if header_index.is_none()
                && stage == Stage::Ingredients
                && !draft.ingredients.is_empty()
            {
                debug!("Blank line after ingredients, entering Instructions stage");
                stage = Stage::Instructions;
            }
            continue;
        }

        match stage {
            Stage::Name => {}
            Stage::Ingredients => draft.push_ingredient_line(parse_ingredient_line(line)),
            Stage::Instructions => draft.push_step(line),
        }
    }
    draft.flush();

    let recipe = Recipe {
        name: name.trim().to_string(),
        ingredients: draft.ingredients,
        steps: draft.steps,
    };

    if recipe.is_empty() {
        debug!("Nothing recognized in {} lines of input", lines.len());
        return Err(ImportError::ParseFailure);
    }

    debug!(
        "Parsed '{}' with {} ingredients and {} steps",
        recipe.name,
        recipe.ingredients.len(),
        recipe.steps.len()
    );
    Ok(recipe)
}

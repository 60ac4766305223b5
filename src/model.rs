use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::units::normalize_unit;

/// A single ingredient row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// `None` means the quantity was not given, which is a valid state.
    #[serde(default, deserialize_with = "amount_format::deserialize")]
    pub amount: Option<f64>,
    /// Canonical unit code, or empty when there is no unit.
    #[serde(default)]
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: Option<f64>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }

    /// Render as a pasteable ingredient line, e.g. `1.5 dl kermaa`.
    pub fn to_line(&self) -> String {
        let amount = self.amount.map(format_amount);
        [amount.as_deref(), Some(self.unit.as_str()), Some(self.name.as_str())]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A structured recipe, either parsed from pasted text or loaded from the store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Ordered instruction steps. Stored recipes may also carry these as
    /// one newline-separated string.
    #[serde(default, deserialize_with = "steps_format::deserialize")]
    pub steps: Vec<String>,
}

impl Recipe {
    /// True when there is no name, no ingredients and no steps.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.ingredients.is_empty() && self.steps.is_empty()
    }

    /// Steps as the single text block the edit form shows.
    pub fn instructions_text(&self) -> String {
        self.steps.join("\n")
    }

    /// Clean up a recipe the way the edit form does before saving:
    /// trimmed name, no blank ingredient rows or steps, canonical units.
    pub fn normalized(&self) -> Recipe {
        Recipe {
            name: self.name.trim().to_string(),
            ingredients: self
                .ingredients
                .iter()
                .filter(|ing| !ing.name.trim().is_empty())
                .map(|ing| Ingredient {
                    name: ing.name.trim().to_string(),
                    amount: ing.amount.filter(|a| a.is_finite()),
                    unit: normalize_unit(&ing.unit),
                })
                .collect(),
            steps: self
                .steps
                .iter()
                .map(|step| step.trim())
                .filter(|step| !step.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Render the recipe as plain text with `Ainekset` and `Ohjeet` headers.
    ///
    /// The output parses back into the same recipe as long as every unit is
    /// one the parser recognizes.
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        if !self.name.trim().is_empty() {
            output.push_str(self.name.trim());
            output.push_str("\n\n");
        }

        output.push_str("Ainekset\n");
        for ingredient in &self.ingredients {
            output.push_str(&ingredient.to_line());
            output.push('\n');
        }

        output.push_str("\nOhjeet\n");
        for (i, step) in self.steps.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, step));
        }

        output
    }
}

/// One consolidated line of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    /// Summed quantity, rounded to two decimals. `None` when none of the
    /// contributing ingredients gave a quantity.
    pub amount: Option<f64>,
    pub unit: String,
    pub source_recipes: BTreeSet<String>,
}

impl ShoppingItem {
    /// Identity of this line for caller-side state such as check marks.
    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.name, &self.unit)
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.amount, self.unit.is_empty()) {
            (Some(amount), true) => write!(f, "{}: {}", self.name, format_amount(amount)),
            (Some(amount), false) => {
                write!(f, "{}: {} {}", self.name, format_amount(amount), self.unit)
            }
            (None, true) => write!(f, "{}", self.name),
            (None, false) => write!(f, "{}: {}", self.name, self.unit),
        }
    }
}

/// Normalized (name, unit) identity of a shopping list line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemKey {
    pub name: String,
    pub unit: String,
}

impl ItemKey {
    pub fn new(name: &str, unit: &str) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            unit: normalize_unit(unit),
        }
    }
}

/// Round to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an amount without trailing zeros: `12`, `1.5`, `0.33`.
pub fn format_amount(value: f64) -> String {
    let rounded = round2(value);
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}

/// Parse an amount typed into a form or stored as text: `2`, `1,5`, `0.25`,
/// `1/2`, `½`. Anything else is `None`.
pub fn parse_amount_text(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Some(fraction) = crate::fraction::parse_fraction(text) {
        return Some(fraction);
    }
    text.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

mod amount_format {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
        Other(serde_json::Value),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawAmount>::deserialize(deserializer)? {
            Some(RawAmount::Number(n)) if n.is_finite() => Some(n),
            Some(RawAmount::Text(text)) => super::parse_amount_text(&text),
            _ => None,
        })
    }
}

mod steps_format {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSteps {
        Multiple(Vec<String>),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let steps = match Option::<RawSteps>::deserialize(deserializer)? {
            Some(RawSteps::Multiple(steps)) => steps,
            Some(RawSteps::Text(text)) => text.lines().map(str::to_string).collect(),
            None => Vec::new(),
        };
        Ok(steps
            .into_iter()
            .map(|step| step.trim().to_string())
            .filter(|step| !step.is_empty())
            .collect())
    }
}

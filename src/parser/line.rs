use once_cell::sync::Lazy;
use regex::Regex;

use crate::fraction::{glyph_value, parse_fraction};
use crate::model::Ingredient;
use crate::units::{is_known_unit, match_unit_prefix, normalize_unit, WORD_JOINERS};

/// Punctuation allowed between a unit and the ingredient name: `1 kg. perunoita`.
const UNIT_SEPARATORS: [char; 3] = ['.', ',', ':'];

// Every amount pattern must end on whitespace or end of line so that
// "12kpl" or "1/2dl" never half-match.
static RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+(?:[.,]\d+)?)\s*[-–]\s*\d+(?:[.,]\d+)?(?:\s+|$)").unwrap()
});

static LEADING_INTEGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)(?:\s*([¼½¾⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])|\s+(\d+\s*/\s*\d+))?(?:\s+|$)").unwrap()
});

static FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([¼½¾⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞]|\d+\s*/\s*\d+)(?:\s+|$)").unwrap());

static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+[.,]\d+)(?:\s+|$)").unwrap());

static GLUED_UNIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:[.,]\d+)?)(\p{L}+)(.*)$").unwrap());

static STEP_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// One ingredient line after amount/unit/name extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub name: String,
    pub amount: Option<f64>,
    pub unit: String,
    pub original_text: String,
}

impl ParsedLine {
    pub fn name_is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// A line like `2 dl` that is waiting for its name on the next line.
    pub fn is_quantity_only(&self) -> bool {
        self.name_is_empty() && (self.amount.is_some() || !self.unit.is_empty())
    }

    /// A line like `kermaa` that can complete a buffered quantity.
    pub fn is_name_only(&self) -> bool {
        !self.name_is_empty() && self.amount.is_none() && self.unit.is_empty()
    }

    /// Combine a buffered quantity with the name from the following line.
    pub fn complete_with(self, next: ParsedLine) -> Ingredient {
        Ingredient {
            name: next.name,
            amount: self.amount,
            unit: self.unit,
        }
    }

    /// Emit as an ingredient. A line without a name keeps its original text
    /// as the name so that no input is silently lost.
    pub fn into_ingredient(self) -> Ingredient {
        let name = if self.name_is_empty() {
            self.original_text
        } else {
            self.name
        };
        Ingredient {
            name,
            amount: self.amount,
            unit: self.unit,
        }
    }
}

/// Parse one non-empty ingredient line.
pub fn parse_ingredient_line(line: &str) -> ParsedLine {
    let original_text = line.trim().to_string();
    let (amount, mut unit, rest) = split_amount(&original_text);

    let mut remainder = rest;
    if unit.is_empty() {
        if let Some((canonical, after)) = match_unit_prefix(rest) {
            unit = canonical.to_string();
            remainder = after.trim_start_matches(UNIT_SEPARATORS);
        }
    }

    ParsedLine {
        name: remainder.trim().to_string(),
        amount,
        unit,
        original_text,
    }
}

/// Consume a leading amount. Returns the amount, a unit when it was glued
/// to the number (`50g`), and the rest of the line.
fn split_amount(line: &str) -> (Option<f64>, String, &str) {
    // Ranges first: "1-2 kpl" would otherwise stop at the integer
    if let Some(caps) = RANGE.captures(line) {
        let lower = parse_decimal(&caps[1]);
        return (lower, String::new(), &line[caps[0].len()..]);
    }

    if let Some(caps) = LEADING_INTEGER.captures(line) {
        let whole: f64 = caps[1].parse().unwrap_or(0.0);
        let glyph = caps
            .get(2)
            .and_then(|m| m.as_str().chars().next())
            .and_then(glyph_value);
        let fraction = caps.get(3).map(|m| parse_fraction(m.as_str()));
        return match (glyph, fraction) {
            (Some(glyph), _) => (Some(whole + glyph), String::new(), &line[caps[0].len()..]),
            (None, Some(Some(fraction))) => {
                (Some(whole + fraction), String::new(), &line[caps[0].len()..])
            }
            // "2 1/0": keep the bad fraction in the text
            (None, Some(None)) => (Some(whole), String::new(), &line[caps[1].len()..]),
            (None, None) => (Some(whole), String::new(), &line[caps[0].len()..]),
        };
    }

    if let Some(caps) = FRACTION.captures(line) {
        if let Some(value) = parse_fraction(&caps[1]) {
            return (Some(value), String::new(), &line[caps[0].len()..]);
        }
    }

    if let Some(caps) = DECIMAL.captures(line) {
        return (parse_decimal(&caps[1]), String::new(), &line[caps[0].len()..]);
    }

    if let Some(caps) = GLUED_UNIT.captures(line) {
        let rest = caps.get(3).map_or("", |m| m.as_str());
        if is_known_unit(&caps[2]) && !rest.starts_with(WORD_JOINERS) {
            let rest = rest.trim_start_matches(UNIT_SEPARATORS);
            return (parse_decimal(&caps[1]), normalize_unit(&caps[2]), rest);
        }
    }

    (None, String::new(), line)
}

fn parse_decimal(text: &str) -> Option<f64> {
    text.replace(',', ".").parse().ok()
}

/// Strip a leading `1.` style step number. Blank steps yield `None`.
pub fn clean_instruction(line: &str) -> Option<String> {
    let cleaned = STEP_NUMBER.replace(line.trim(), "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

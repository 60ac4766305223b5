//! Unit vocabulary.
//!
//! Maps the unit words found in Finnish recipes (abbreviations, nominative
//! and partitive forms) onto short canonical codes. The table is an open
//! enumeration: anything it does not know passes through lower-cased.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Canonical code for a counted piece ("kappale").
pub const PIECE: &str = "kpl";

/// Characters that glue a unit-looking prefix into a longer word, as in
/// `L-kokoista`.
pub const WORD_JOINERS: [char; 2] = ['-', '–'];

/// Raw token -> canonical code. Canonical codes map to themselves.
static UNIT_SYNONYMS: &[(&str, &str)] = &[
    ("ml", "ml"),
    ("millilitra", "ml"),
    ("millilitraa", "ml"),
    ("cl", "cl"),
    ("senttilitra", "cl"),
    ("senttilitraa", "cl"),
    ("dl", "dl"),
    ("desilitra", "dl"),
    ("desilitraa", "dl"),
    ("l", "l"),
    ("litra", "l"),
    ("litraa", "l"),
    ("g", "g"),
    ("gramma", "g"),
    ("grammaa", "g"),
    ("kg", "kg"),
    ("kilo", "kg"),
    ("kiloa", "kg"),
    ("kilogramma", "kg"),
    ("kilogrammaa", "kg"),
    ("kpl", "kpl"),
    ("kappale", "kpl"),
    ("kappaletta", "kpl"),
    ("rs", "rs"),
    ("rasia", "rs"),
    ("rasiaa", "rs"),
    ("tl", "tl"),
    ("teelusikka", "tl"),
    ("teelusikkaa", "tl"),
    ("rkl", "rkl"),
    ("ruokalusikka", "rkl"),
    ("ruokalusikkaa", "rkl"),
    ("ripaus", "ripaus"),
    ("plo", "plo"),
    ("pullo", "plo"),
    ("pulloa", "plo"),
    ("pkt", "pkt"),
    ("paketti", "pkt"),
    ("pakettia", "pkt"),
    ("prk", "prk"),
    ("purkki", "prk"),
    ("purkkia", "prk"),
    ("pss", "pss"),
    ("pussi", "pss"),
    ("pussia", "pss"),
    ("tlk", "tlk"),
    ("tölkki", "tlk"),
    ("tölkkiä", "tlk"),
    ("vartta", "vartta"),
    ("varsi", "varsi"),
];

static LOOKUP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| UNIT_SYNONYMS.iter().copied().collect());

/// Synonyms ordered longest first so that prefix matching prefers
/// "kilogrammaa" over "kilo" and "kg" over "k".
static BY_LENGTH: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut entries = UNIT_SYNONYMS.to_vec();
    entries.sort_by(|a, b| {
        b.0.chars()
            .count()
            .cmp(&a.0.chars().count())
            .then_with(|| a.0.cmp(b.0))
    });
    entries
});

/// Normalize a free-form unit token to its canonical code.
///
/// Empty and whitespace-only input yields an empty string. Unknown tokens
/// are returned trimmed and lower-cased.
pub fn normalize_unit(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    match LOOKUP.get(lowered.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => lowered,
    }
}

/// Whether `token` (any case) is one of the known unit words.
pub fn is_known_unit(token: &str) -> bool {
    LOOKUP.contains_key(token.trim().to_lowercase().as_str())
}

/// Match the longest known unit word at the start of `text`.
///
/// The unit must end on a word boundary: end of text, whitespace or
/// punctuation, never another letter, digit or hyphen. Returns the canonical code
/// and the remainder after the unit word.
pub fn match_unit_prefix(text: &str) -> Option<(&'static str, &str)> {
    BY_LENGTH.iter().find_map(|(token, canonical)| {
        let rest = strip_prefix_ignore_case(text, token)?;
        match rest.chars().next() {
            Some(next) if next.is_alphanumeric() || WORD_JOINERS.contains(&next) => None,
            _ => Some((*canonical, rest)),
        }
    })
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let consumed = chars.next().map(|(idx, _)| idx).unwrap_or(text.len());
    Some(&text[consumed..])
}

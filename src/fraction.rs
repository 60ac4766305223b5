//! Fraction tokens: Unicode vulgar fractions and `a/b` slash notation.

/// Vulgar fraction glyphs and their exact values.
pub static FRACTION_GLYPHS: &[(char, f64)] = &[
    ('¼', 1.0 / 4.0),
    ('½', 1.0 / 2.0),
    ('¾', 3.0 / 4.0),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('⅕', 1.0 / 5.0),
    ('⅖', 2.0 / 5.0),
    ('⅗', 3.0 / 5.0),
    ('⅘', 4.0 / 5.0),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
    ('⅛', 1.0 / 8.0),
    ('⅜', 3.0 / 8.0),
    ('⅝', 5.0 / 8.0),
    ('⅞', 7.0 / 8.0),
];

/// Value of a single fraction glyph.
pub fn glyph_value(glyph: char) -> Option<f64> {
    FRACTION_GLYPHS
        .iter()
        .find(|(g, _)| *g == glyph)
        .map(|(_, value)| *value)
}

/// Parse a fraction token.
///
/// Accepts exactly one glyph (`"½"`) or integer slash notation (`"3/4"`,
/// spaces around the slash allowed). A zero denominator or anything else
/// yields `None`, which callers treat as "not a fraction".
pub fn parse_fraction(token: &str) -> Option<f64> {
    let token = token.trim();
    let mut chars = token.chars();
    if let (Some(glyph), None) = (chars.next(), chars.next()) {
        if let Some(value) = glyph_value(glyph) {
            return Some(value);
        }
    }

    let (numerator, denominator) = token.split_once('/')?;
    let numerator: u32 = parse_digits(numerator.trim())?;
    let denominator: u32 = parse_digits(denominator.trim())?;
    if denominator == 0 {
        return None;
    }
    Some(f64::from(numerator) / f64::from(denominator))
}

fn parse_digits(text: &str) -> Option<u32> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs() {
        assert_eq!(parse_fraction("½"), Some(0.5));
        assert_eq!(parse_fraction("¼"), Some(0.25));
        assert_eq!(parse_fraction("⅞"), Some(0.875));
        assert_eq!(parse_fraction("⅓"), Some(1.0 / 3.0));
    }

    #[test]
    fn test_slash_notation() {
        assert_eq!(parse_fraction("1/2"), Some(0.5));
        assert_eq!(parse_fraction("3 / 4"), Some(0.75));
        assert_eq!(parse_fraction("5/2"), Some(2.5));
    }

    #[test]
    fn test_not_a_fraction() {
        assert_eq!(parse_fraction("1/0"), None);
        assert_eq!(parse_fraction("2"), None);
        assert_eq!(parse_fraction("a/b"), None);
        assert_eq!(parse_fraction("1/2/3"), None);
        assert_eq!(parse_fraction("-1/2"), None);
        assert_eq!(parse_fraction("½½"), None);
        assert_eq!(parse_fraction(""), None);
    }
}

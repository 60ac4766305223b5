//! Finnish alphabetical ordering.
//!
//! Case-insensitive, with å, ä and ö as separate letters after z (in that
//! order) instead of being folded to a and o. Common accented Latin letters
//! sort with their base letter and ü sorts as y.

use std::cmp::Ordering;

const Z: u32 = 'z' as u32;

fn rank(c: char) -> u32 {
    match c {
        'å' => Z + 1,
        'ä' | 'æ' => Z + 2,
        'ö' | 'ø' => Z + 3,
        'ü' => 'y' as u32,
        'á' | 'à' | 'â' => 'a' as u32,
        'é' | 'è' | 'ê' | 'ë' => 'e' as u32,
        'í' | 'ì' | 'î' | 'ï' => 'i' as u32,
        'ó' | 'ò' | 'ô' => 'o' as u32,
        'ú' | 'ù' | 'û' => 'u' as u32,
        'ç' => 'c' as u32,
        'ñ' => 'n' as u32,
        'š' => 's' as u32,
        'ž' => 'z' as u32,
        // keep everything else after ö, in code point order
        c if (c as u32) > Z => c as u32 + 3,
        c => c as u32,
    }
}

/// Sort key for `text` under Finnish ordering.
pub fn collation_key(text: &str) -> Vec<u32> {
    text.chars().flat_map(char::to_lowercase).map(rank).collect()
}

/// Compare two strings in Finnish alphabetical order. Strings that collate
/// equal fall back to plain code point order so the result is total.
pub fn finnish_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(words: &[&str]) -> Vec<String> {
        let mut words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        words.sort_by(|a, b| finnish_cmp(a, b));
        words
    }

    #[test]
    fn test_scandinavian_letters_after_z() {
        assert_eq!(
            sorted(&["öljy", "appelsiini", "ärtsoppa", "zucchini", "åkerbär"]),
            vec!["appelsiini", "zucchini", "åkerbär", "ärtsoppa", "öljy"]
        );
    }

    #[test]
    fn test_not_folded_to_base_letters() {
        assert_eq!(finnish_cmp("ä", "b"), Ordering::Greater);
        assert_eq!(finnish_cmp("ö", "p"), Ordering::Greater);
        assert_eq!(finnish_cmp("kääre", "kaura"), Ordering::Greater);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(sorted(&["Sokeri", "maito", "Kerma"]), vec!["Kerma", "maito", "Sokeri"]);
        assert_eq!(finnish_cmp("Öljy", "öljy"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(finnish_cmp("maito", "maitorahka"), Ordering::Less);
    }

    #[test]
    fn test_accented_letters_sort_with_base() {
        assert_eq!(
            sorted(&["crème fraîche", "cheddar", "curry"]),
            vec!["cheddar", "crème fraîche", "curry"]
        );
    }
}

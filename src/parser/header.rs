/// Keywords that open the ingredient section.
pub const INGREDIENT_HEADERS: &[&str] = &["ainekset", "ainesosat", "raaka-aineet"];

/// Keywords that open the instruction section.
pub const INSTRUCTION_HEADERS: &[&str] = &["ohjeet", "ohje", "valmistusohje", "valmistus"];

/// Section of the pasted text currently being read. Ordered: the parser
/// only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Name,
    Ingredients,
    Instructions,
}

/// Classify a trimmed line as a section header.
///
/// Matching is a case-insensitive prefix match, so `Ainekset:` and
/// `Valmistusohje (4 annosta)` are headers too.
pub fn header_stage(line: &str) -> Option<Stage> {
    let lowered = line.to_lowercase();
    if INGREDIENT_HEADERS.iter().any(|kw| lowered.starts_with(kw)) {
        Some(Stage::Ingredients)
    } else if INSTRUCTION_HEADERS.iter().any(|kw| lowered.starts_with(kw)) {
        Some(Stage::Instructions)
    } else {
        None
    }
}

/// Index of the first header line of either kind.
pub fn first_header(lines: &[String]) -> Option<usize> {
    lines.iter().position(|line| header_stage(line).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_stage() {
        assert_eq!(header_stage("Ainekset"), Some(Stage::Ingredients));
        assert_eq!(header_stage("RAAKA-AINEET:"), Some(Stage::Ingredients));
        assert_eq!(header_stage("ainesosat 4 hengelle"), Some(Stage::Ingredients));
        assert_eq!(header_stage("Ohjeet"), Some(Stage::Instructions));
        assert_eq!(header_stage("Valmistus"), Some(Stage::Instructions));
        assert_eq!(header_stage("valmistusohje:"), Some(Stage::Instructions));
        assert_eq!(header_stage("2 dl maitoa"), None);
        assert_eq!(header_stage(""), None);
    }

    #[test]
    fn test_stage_order() {
        assert!(Stage::Name < Stage::Ingredients);
        assert!(Stage::Ingredients < Stage::Instructions);
        assert_eq!(Stage::Instructions.max(Stage::Ingredients), Stage::Instructions);
    }

    #[test]
    fn test_first_header() {
        let lines: Vec<String> = ["Lohikeitto", "", "Ainekset", "Ohjeet"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(first_header(&lines), Some(2));
        assert_eq!(first_header(&lines[..2]), None);
    }
}

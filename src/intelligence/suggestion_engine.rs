/// Suggestion engine
///
/// Finds the known command name closest to a mistyped input.

use crate::intelligence::distance::levenshtein;
use crate::intelligence::Scorer;

/// Suggestion engine over a fixed candidate list
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    candidates: Vec<&'static str>,
}

impl SuggestionEngine {
    /// Create an engine. Candidates are tried in the order given, and the
    /// first of several equally close candidates wins.
    pub fn new(candidates: Vec<&'static str>) -> Self {
        Self { candidates }
    }

    /// Closest acceptable candidate for `input`
    ///
    /// A candidate only competes if its distance is within its own
    /// threshold (see `Scorer::threshold`). Among those, the smallest
    /// distance wins.
    ///
    /// # Returns
    /// * `Some(name)` - Best candidate
    /// * `None` - Nothing close enough
    pub fn suggest(&self, input: &str) -> Option<&'static str> {
        let input = input.to_lowercase();
        let mut best: Option<(&'static str, usize)> = None;

        for &candidate in &self.candidates {
            let distance = levenshtein(&input, &candidate.to_lowercase());
            if !Scorer::accepts(candidate, distance) {
                continue;
            }

            match best {
                Some((_, min)) if distance >= min => {}
                _ => best = Some((candidate, distance)),
            }
        }

        best.map(|(name, _)| name)
    }

    pub fn candidates(&self) -> &[&'static str] {
        &self.candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    fn engine() -> SuggestionEngine {
        let registry = Registry::builtin().unwrap();
        SuggestionEngine::new(registry.names().to_vec())
    }

    #[test]
    fn test_close_typo() {
        assert_eq!(engine().suggest("halp"), Some("help"));
        assert_eq!(engine().suggest("skils"), Some("skills"));
        assert_eq!(engine().suggest("experince"), Some("experience"));
        assert_eq!(engine().suggest("linkdin"), Some("linkedin"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(engine().suggest("CONTCAT"), Some("contact"));
    }

    #[test]
    fn test_nothing_close() {
        assert_eq!(engine().suggest("zzzzzzzzzz"), None);
    }

    #[test]
    fn test_empty_input_only_matches_short_names() {
        let suggestion = engine().suggest("").unwrap();
        assert!(suggestion.chars().count() <= 4);
        assert_eq!(suggestion, "h");
    }

    #[test]
    fn test_empty_input_without_short_names() {
        let engine = SuggestionEngine::new(vec!["projects", "experience"]);
        assert_eq!(engine.suggest(""), None);
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        let engine = SuggestionEngine::new(vec!["cat", "bat"]);
        assert_eq!(engine.suggest("rat"), Some("cat"));

        let engine = SuggestionEngine::new(vec!["bat", "cat"]);
        assert_eq!(engine.suggest("rat"), Some("bat"));
    }

    #[test]
    fn test_out_of_threshold_candidate_does_not_block() {
        // "axxx" is 3 away with a budget of 2; "abcdwxyz" is 4 away with a budget of 4
        let engine = SuggestionEngine::new(vec!["axxx", "abcdwxyz"]);
        assert_eq!(engine.suggest("abcd"), Some("abcdwxyz"));
    }
}

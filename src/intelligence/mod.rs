/// Intelligence module
///
/// Typo tolerance: edit distance and "did you mean" suggestions.

pub mod distance;
pub mod scorer;
pub mod suggestion_engine;

pub use distance::levenshtein;
pub use scorer::Scorer;
pub use suggestion_engine::SuggestionEngine;

/// Acceptance rules for suggestions
///
/// Decides how many edits a candidate name may be away from the input and
/// still be worth suggesting.

/// Minimum edit budget, however short the name
const MIN_EDITS: usize = 2;

/// Scorer for suggestion candidates
pub struct Scorer;

impl Scorer {
    /// Largest distance accepted for a candidate of `name_len` chars
    ///
    /// Short names tolerate two edits; longer names up to half their length.
    pub fn threshold(name_len: usize) -> usize {
        MIN_EDITS.max(name_len / 2)
    }

    /// Whether `distance` is close enough to suggest `name`
    pub fn accepts(name: &str, distance: usize) -> bool {
        distance <= Self::threshold(name.chars().count())
    }
}

// Levenshtein edit distance.
//
// Works on chars, not bytes, so "café" vs "cafe" is one edit.

/// Minimum number of single-character insertions, deletions or
/// substitutions that turn `a` into `b`
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Two rows of the classic DP matrix are enough
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            curr[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1]
            } else {
                (prev[j - 1] + 1).min(curr[j - 1] + 1).min(prev[j] + 1)
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(levenshtein("skills", "skills"), 0);
    }

    #[test]
    fn test_empty_sides() {
        assert_eq!(levenshtein("", "help"), 4);
        assert_eq!(levenshtein("exit", ""), 4);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(levenshtein("halp", "help"), 1); // substitution
        assert_eq!(levenshtein("hep", "help"), 1); // insertion
        assert_eq!(levenshtein("helpp", "help"), 1); // deletion
    }

    #[test]
    fn test_classic_pair() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(levenshtein("contcat", "contact"), levenshtein("contact", "contcat"));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("📁", ""), 1);
    }
}

//! Swap expansion
//!
//! A swap lets a board tile stand in for any letter. Flat tries index every
//! spelling a word can take under a given number of swaps; the expansion
//! decides what those spellings are.

/// Placeholder letter for a swapped tile
pub const WILDCARD: char = '0';

/// Enumerates the spellings under which a word is indexed for a swap budget
pub trait SwapExpansion {
    /// Spellings of `word` that use `swaps` substitutions
    fn expand(&self, word: &str, swaps: usize) -> Vec<String>;
}

impl<F> SwapExpansion for F
where
    F: Fn(&str, usize) -> Vec<String>,
{
    fn expand(&self, word: &str, swaps: usize) -> Vec<String> {
        self(word, swaps)
    }
}

/// Replaces exactly `swaps` distinct positions with [`WILDCARD`]
///
/// A walker reaching a tile it wants to swap steps with the wildcard
/// instead of the tile's letter.
///
/// # Examples
/// ```
/// use spellsolver::trie::{SwapExpansion, WildcardSwaps};
///
/// let spellings = WildcardSwaps.expand("cat", 1);
/// assert_eq!(spellings, vec!["0at", "c0t", "ca0"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WildcardSwaps;

impl SwapExpansion for WildcardSwaps {
    fn expand(&self, word: &str, swaps: usize) -> Vec<String> {
        let letters: Vec<char> = word.chars().collect();
        let n = letters.len();
        if swaps > n {
            return Vec::new();
        }

        // Positions form a lexicographically advancing k-combination of 0..n
        let mut positions: Vec<usize> = (0..swaps).collect();
        let mut spellings = Vec::new();

        loop {
            let mut spelling = letters.clone();
            for &p in &positions {
                spelling[p] = WILDCARD;
            }
            spellings.push(spelling.into_iter().collect());

            let mut i = swaps;
            loop {
                if i == 0 {
                    return spellings;
                }
                i -= 1;
                if positions[i] != i + n - swaps {
                    break;
                }
            }
            positions[i] += 1;
            for j in i + 1..swaps {
                positions[j] = positions[j - 1] + 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_swaps_is_identity() {
        assert_eq!(WildcardSwaps.expand("cat", 0), vec!["cat"]);
    }

    #[test]
    fn two_swaps_enumerates_pairs() {
        let spellings = WildcardSwaps.expand("dogs", 2);
        assert_eq!(
            spellings,
            vec!["00gs", "0o0s", "0og0", "d00s", "d0g0", "do00"]
        );
    }

    #[test]
    fn swaps_covering_whole_word() {
        assert_eq!(WildcardSwaps.expand("ox", 2), vec!["00"]);
    }

    #[test]
    fn too_many_swaps_yields_nothing() {
        assert!(WildcardSwaps.expand("ox", 3).is_empty());
    }

    #[test]
    fn closures_are_expansions() {
        let upper = |word: &str, _swaps: usize| vec![word.to_uppercase()];
        assert_eq!(upper.expand("hi", 1), vec!["HI"]);
    }
}

//! Prefix lookup command
//!
//! Shows, for every swap budget, which words a board walk spelling the
//! prefix could still complete.

use crate::index::WordIndex;

/// Result of looking up a prefix
pub struct LookupResult {
    pub prefix: String,
    pub matches: Vec<(usize, Vec<String>)>,
}

/// Look up `prefix` in every trie of the index
#[must_use]
pub fn lookup_prefix(index: &WordIndex, prefix: &str) -> LookupResult {
    let prefix = prefix.trim().to_lowercase();
    let matches = index
        .lookup(&prefix)
        .into_iter()
        .map(|(swaps, words)| (swaps, words.into_iter().map(str::to_string).collect()))
        .collect();

    LookupResult { prefix, matches }
}

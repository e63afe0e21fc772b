//! Dictionary membership command

use crate::dictionary::{Dictionary, FstDictionary};
use crate::wordlists::WordList;
use anyhow::{Context, Result};

/// Result of checking words against the dictionary
pub struct CheckResult {
    pub words: Vec<(String, bool)>,
}

/// Load the wordlist into an fst dictionary
///
/// # Errors
///
/// Returns an error if the wordlist cannot be read or the dictionary built.
pub fn load_dictionary(list: &WordList) -> Result<FstDictionary> {
    let words = list
        .words()
        .with_context(|| format!("loading wordlist {}", list.destination().display()))?
        .collect::<crate::error::Result<Vec<String>>>()?;

    let mut dictionary = FstDictionary::new();
    dictionary.insert(words)?;
    Ok(dictionary)
}

/// Check each of `words` for membership
#[must_use]
pub fn check_words<D>(dictionary: &FstDictionary, words: &[D]) -> CheckResult
where
    D: AsRef<str>,
{
    let query = dictionary.query();
    let words = words
        .iter()
        .map(|w| {
            let word = w.as_ref().trim().to_lowercase();
            let found = query.contains(&word);
            (word, found)
        })
        .collect();

    CheckResult { words }
}

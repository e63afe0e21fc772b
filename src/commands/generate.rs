//! Wordlist regeneration command

use crate::wordlists::WordList;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Result of regenerating the wordlist
pub struct GenerateResult {
    pub count: usize,
    pub destination: PathBuf,
}

/// Rebuild the wordlist from its sources, replacing any existing file
///
/// # Errors
///
/// Returns an error if the sources cannot be read or the wordlist written.
pub fn run_generate(list: &WordList) -> Result<GenerateResult> {
    let count = list
        .generate()
        .with_context(|| format!("generating wordlist from {}", list.source().display()))?;

    Ok(GenerateResult {
        count,
        destination: list.destination().to_path_buf(),
    })
}

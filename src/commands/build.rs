//! Index construction with progress reporting

use crate::config::IndexConfig;
use crate::index::WordIndex;
use crate::trie::WildcardSwaps;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};

/// Build every configured trie, showing a spinner per swap budget
///
/// # Errors
///
/// Returns an error if the wordlist cannot be produced or read. Budgets the
/// encoding cannot serve are skipped with a warning.
pub fn build_index(config: &IndexConfig) -> Result<WordIndex> {
    let list = config.word_list();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg} | {pos} words ({per_sec})")?;

    let mut index = WordIndex::new(config.kind);
    for swaps in config.budgets() {
        let pb = ProgressBar::new_spinner();
        pb.set_style(style.clone());
        pb.set_message(format!("{} trie, {swaps} swaps", config.kind));

        let words = list
            .words()
            .with_context(|| format!("loading wordlist {}", list.destination().display()))?
            .progress_with(pb.clone());
        index
            .insert_trie(swaps, words, &WildcardSwaps)
            .with_context(|| format!("building {} trie for {swaps} swaps", config.kind))?;

        pb.finish_with_message(format!("{} trie, {swaps} swaps ready", config.kind));
    }

    Ok(index)
}

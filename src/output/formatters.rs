//! Formatting utilities for terminal output

/// Join up to `limit` words, noting how many were left out
#[must_use]
pub fn word_preview(words: &[&str], limit: usize) -> String {
    let shown = words.iter().take(limit).copied().collect::<Vec<_>>().join(", ");
    if words.len() > limit {
        format!("{shown} … (+{} more)", words.len() - limit)
    } else {
        shown
    }
}

/// Label for a swap budget
#[must_use]
pub fn swaps_label(swaps: usize) -> String {
    match swaps {
        0 => "no swaps".to_string(),
        1 => "1 swap".to_string(),
        n => format!("{n} swaps"),
    }
}

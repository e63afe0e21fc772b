//! Aggregation of search hits

use rustc_hash::FxHashMap;
use std::cmp::Reverse;

use super::{ResultWord, Timer};

/// Number of results shown and serialized
pub const TOP_RESULTS: usize = 10;

/// Deduplicated collection of search results
///
/// Entries are keyed by `(score, word)`; a later result with the same key
/// replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct ResultList {
    data: FxHashMap<(i32, String), ResultWord>,
}

impl ResultList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite every result of `results`
    pub fn update<I: IntoIterator<Item = ResultWord>>(&mut self, results: I) {
        for result in results {
            self.data.insert((result.score, result.word.clone()), result);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All results, highest score first
    ///
    /// Equal scores are ordered by word so the ranking is reproducible.
    #[must_use]
    pub fn ranked(&self) -> Vec<&ResultWord> {
        let mut sorted: Vec<&ResultWord> = self.data.values().collect();
        sorted.sort_by(|a, b| {
            (Reverse(a.score), &a.word).cmp(&(Reverse(b.score), &b.word))
        });
        sorted
    }

    /// The first `n` results of [`ranked`](Self::ranked)
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<&ResultWord> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Top results as `score word` lines
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        self.top(TOP_RESULTS)
            .into_iter()
            .map(ResultWord::summary)
            .collect()
    }

    /// Detailed report of the top results with the elapsed solve time
    #[must_use]
    pub fn console_report<T: Timer + ?Sized>(&self, timer: &T) -> String {
        let traces: Vec<String> = self
            .top(TOP_RESULTS)
            .into_iter()
            .map(ResultWord::trace)
            .collect();

        format!(
            "The following words have been found (elapsed time: {} milliseconds)\n[{}]",
            timer.elapsed_millis(),
            traces.join(", ")
        )
    }

    /// Top results as a JSON array
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.top(TOP_RESULTS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coordinates;

    struct FixedTimer(u128);

    impl Timer for FixedTimer {
        fn elapsed_millis(&self) -> u128 {
            self.0
        }
    }

    fn hit(score: i32, word: &str) -> ResultWord {
        let path = (0..word.len()).map(Coordinates::from_aux).collect();
        ResultWord::new(score, word, path)
    }

    #[test]
    fn identical_keys_are_deduplicated() {
        let mut list = ResultList::new();
        list.update([hit(10, "cat")]);
        list.update([hit(10, "cat").with_swaps(vec![1])]);

        assert_eq!(list.len(), 1);
        // The later update wins
        assert_eq!(list.ranked()[0].swaps, vec![1]);
    }

    #[test]
    fn same_word_different_score_kept() {
        let mut list = ResultList::new();
        list.update([hit(10, "cat"), hit(14, "cat")]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn ranked_is_descending() {
        let mut list = ResultList::new();
        list.update([hit(3, "ox"), hit(20, "quiz"), hit(8, "cat"), hit(8, "bat")]);

        let words: Vec<&str> = list.ranked().iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["quiz", "bat", "cat", "ox"]);
        assert!(
            list.ranked()
                .windows(2)
                .all(|pair| pair[0].score >= pair[1].score)
        );
    }

    #[test]
    fn top_is_capped() {
        let mut list = ResultList::new();
        list.update((0..15).map(|i| hit(i, &format!("w{i}"))));

        assert_eq!(list.len(), 15);
        assert_eq!(list.top(TOP_RESULTS).len(), 10);
        assert_eq!(list.top(TOP_RESULTS)[0].score, 14);
        assert_eq!(list.summary().len(), 10);
        assert_eq!(list.top(50).len(), 15);
    }

    #[test]
    fn summary_lines() {
        let mut list = ResultList::new();
        list.update([hit(3, "ox"), hit(20, "quiz")]);
        assert_eq!(list.summary(), vec!["20 quiz", "3 ox"]);
    }

    #[test]
    fn console_report_includes_time_and_traces() {
        let mut list = ResultList::new();
        list.update([hit(8, "cat"), hit(3, "ox").with_swaps(vec![1])]);

        let report = list.console_report(&FixedTimer(42));
        assert_eq!(
            report,
            "The following words have been found (elapsed time: 42 milliseconds)\n\
             [(8 cat (0, 0)), (3 ox (0, 0) | x (1, 0))]"
        );
    }

    #[test]
    fn json_holds_top_ten() {
        let mut list = ResultList::new();
        list.update((0..12).map(|i| hit(i, "ab")));

        let json: serde_json::Value = serde_json::from_str(&list.to_json().unwrap()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0]["score"], 11);
        assert_eq!(entries[0]["word"], "ab");
        assert_eq!(entries[0]["path"], serde_json::json!([[0, 0], [1, 0]]));
        assert_eq!(entries[0]["swaps"], serde_json::json!([]));
    }
}

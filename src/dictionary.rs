//! Compressed dictionary for plain membership checks
//!
//! Straight "is this a word" questions do not need a board walk, so they are
//! answered by a finite state transducer set from the `fst` crate instead of
//! the tries.

use std::collections::BTreeSet;

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};

use crate::error::Result;

/// A word collection that can be filled and then queried
pub trait Dictionary {
    /// Query handle borrowed from the dictionary
    type Query<'a>
    where
        Self: 'a;

    /// Add words to the dictionary
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying structure cannot be rebuilt.
    fn insert<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// Obtain an object for membership checks
    fn query(&self) -> Self::Query<'_>;
}

/// Dictionary backed by an [`fst::Set`]
///
/// No set is built until the first insert.
#[derive(Default)]
pub struct FstDictionary {
    set: Option<Set<Vec<u8>>>,
}

impl FstDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.set.as_ref().map_or(0, Set::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Dictionary for FstDictionary {
    type Query<'a> = FstQuery<'a>;

    fn insert<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // fst sets are immutable and need sorted input, so rebuild from the union
        let mut entries: BTreeSet<Vec<u8>> = BTreeSet::new();
        if let Some(set) = &self.set {
            let mut existing = set.stream();
            while let Some(key) = existing.next() {
                entries.insert(key.to_vec());
            }
        }
        entries.extend(words.into_iter().map(|w| w.as_ref().as_bytes().to_vec()));

        self.set = Some(Set::from_iter(entries)?);
        Ok(())
    }

    fn query(&self) -> FstQuery<'_> {
        FstQuery {
            set: self.set.as_ref(),
        }
    }
}

/// Membership checks against an [`FstDictionary`]
#[derive(Clone, Copy)]
pub struct FstQuery<'a> {
    set: Option<&'a Set<Vec<u8>>>,
}

impl FstQuery<'_> {
    /// Whether `word` is in the dictionary
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.set.is_some_and(|set| set.contains(word))
    }

    /// Whether any word starts with `prefix`
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.set.is_some_and(|set| {
            let matcher = Str::new(prefix).starts_with();
            set.search(matcher).into_stream().next().is_some()
        })
    }

    /// Every word starting with `prefix`, in sorted order
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Vec<String> {
        let Some(set) = self.set else {
            return Vec::new();
        };
        let matcher = Str::new(prefix).starts_with();
        let mut stream = set.search(matcher).into_stream();
        let mut words = Vec::new();
        while let Some(key) = stream.next() {
            words.push(String::from_utf8_lossy(key).into_owned());
        }
        words
    }
}

//! Spellsolver
//!
//! In-memory word index for discovering every dictionary word reachable on a
//! letter-tile board, including variants where tiles may be swapped.
//!
//! # Quick Start
//!
//! ```rust
//! use spellsolver::trie::{Trie, TrieKind, TrieQuery, WildcardSwaps};
//!
//! let words = ["cat", "car", "cart"].map(|w| Ok(w.to_string()));
//! let trie = Trie::build(TrieKind::Compressed, 0, words, &WildcardSwaps).unwrap();
//!
//! // Walk the board one tile at a time
//! let cursor = trie.cursor().step('c').and_then(|c| c.step('a')).and_then(|c| c.step('r'));
//! assert_eq!(cursor.unwrap().words(), vec!["car"]);
//! ```

// Core domain types
pub mod core;

// Shared error type
pub mod error;

// Index configuration
pub mod config;

// Word lists
pub mod wordlists;

// Trie encodings and the query contract
pub mod trie;

// One trie per swap budget
pub mod index;

// Plain membership checks
pub mod dictionary;

// Result aggregation
pub mod results;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, SpellError};

//! # weighted-trie
//!
//! A prefix tree of weighted keywords for autocomplete-style lookups.
//!
//! Every keyword carries an integer weight. [`Trie::find`] returns all
//! keywords below a prefix, sorted by weight. Keywords with a weight <= 0 are
//! stored but never returned.
//!
//! ## Example
//!
//! ```rust
//! use weighted_trie::{SortOrder, Trie};
//!
//! let mut trie = Trie::new();
//! trie.insert_default("keyword1").unwrap();
//! trie.insert_default("keyword2").unwrap();
//! trie.insert("keyword4", 7).unwrap();
//! trie.insert_default("key").unwrap();
//!
//! assert_eq!(
//!     trie.find("keyw", SortOrder::Desc),
//!     ["keyword4", "keyword1", "keyword2"]
//! );
//! assert!(trie.find("haha", SortOrder::Asc).is_empty());
//! ```
//!
//! ## Partial prefixes
//!
//! By default a prefix that stops matching part-way is searched from the last
//! matched character, so `"keyZZZ"` finds the same keywords as `"key"`.
//! [`Config::exact`] disables that:
//!
//! ```rust
//! use weighted_trie::{Config, SortOrder, Trie};
//!
//! let mut trie = Trie::with_config(Config::exact());
//! trie.insert("key", 1).unwrap();
//! assert!(trie.find("keyZZZ", SortOrder::Asc).is_empty());
//! ```
//!
//! A `Trie` does no locking; share it across threads behind your own lock.

#![forbid(unsafe_code)]

mod config;
mod error;
mod node;
mod trie;

pub use config::{Config, PrefixMatch, SortOrder, DEFAULT_WEIGHT};
pub use error::{Result, TrieError};
pub use trie::Trie;

#[cfg(test)]
mod proptests;

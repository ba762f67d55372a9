use thiserror::Error;

/// Errors returned by [`Trie`](crate::Trie) mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    /// The root never terminates a keyword, so `""` cannot be stored.
    #[error("invalid keyword: keyword must not be empty")]
    EmptyKeyword,
}

pub type Result<T, E = TrieError> = std::result::Result<T, E>;

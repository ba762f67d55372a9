//! Search ordering and prefix-walk configuration.

/// Weight applied by [`Trie::insert_default`](crate::Trie::insert_default).
pub const DEFAULT_WEIGHT: i64 = 1;

/// Result ordering for [`Trie::find`](crate::Trie::find).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum SortOrder {
    /// Lowest weight first.
    #[default]
    Asc,
    /// Highest weight first.
    Desc,
}

/// What a prefix walk does when a character has no matching edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PrefixMatch {
    /// Stop at the first unmatched character and search beneath the last
    /// matched node. `"keyZZZ"` behaves like `"key"`.
    #[default]
    Fallback,
    /// Every character of the prefix must match, otherwise nothing is found.
    Exact,
}

/// Configuration for a [`Trie`](crate::Trie).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Behaviour of `find` on a partially matching prefix.
    pub prefix_match: PrefixMatch,
}

impl Config {
    /// Configuration that only returns keywords under the full prefix.
    pub fn exact() -> Self {
        Self {
            prefix_match: PrefixMatch::Exact,
        }
    }
}

use tracing::{debug, trace, warn};

use crate::config::{Config, PrefixMatch, SortOrder, DEFAULT_WEIGHT};
use crate::error::{Result, TrieError};
use crate::node::{Entry, Node};

// =============================================================================
// Trie
// =============================================================================

/// A prefix tree of weighted keywords.
///
/// Keywords are stored one character per edge. [`find`](Trie::find) returns
/// every positively weighted keyword below a prefix, ordered by weight.
#[derive(Default)]
pub struct Trie {
    root: Node,
    count: usize,
    config: Config,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            root: Node::default(),
            count: 0,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of distinct keywords, including ones hidden by a weight <= 0.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Inserts `keyword` with `weight`, creating one node per new character.
    ///
    /// Re-inserting an existing keyword only replaces its weight; the previous
    /// weight is returned. Keywords with a weight <= 0 are stored but never
    /// returned by [`find`](Trie::find).
    pub fn insert(&mut self, keyword: &str, weight: i64) -> Result<Option<i64>> {
        if keyword.is_empty() {
            debug!("rejected empty keyword");
            return Err(TrieError::EmptyKeyword);
        }

        let mut node = &mut self.root;
        for ch in keyword.chars() {
            node = node.child_or_insert(ch);
        }

        let previous = node.mark_terminal(keyword, weight);
        if previous.is_none() {
            self.count += 1;
        }
        trace!(keyword, weight, overwritten = previous.is_some(), "insert");
        Ok(previous)
    }

    /// Inserts `keyword` with [`DEFAULT_WEIGHT`].
    pub fn insert_default(&mut self, keyword: &str) -> Result<Option<i64>> {
        self.insert(keyword, DEFAULT_WEIGHT)
    }

    /// Inserts every pair, stopping at the first invalid keyword.
    ///
    /// Returns the number of keywords that were new to the trie. Pairs before
    /// the failing one stay inserted.
    pub fn try_extend<K, I>(&mut self, iter: I) -> Result<usize>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, i64)>,
    {
        let mut added = 0;
        for (keyword, weight) in iter {
            if self.insert(keyword.as_ref(), weight)?.is_none() {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Stored weight of an exact keyword.
    pub fn weight(&self, keyword: &str) -> Option<i64> {
        self.node(keyword)
            .and_then(|n| n.entry.as_ref())
            .map(|e| e.weight)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.weight(keyword).is_some()
    }

    /// Returns the keywords below `prefix`, sorted by weight in `order`.
    ///
    /// An empty prefix, or one whose first character has no edge at the root,
    /// finds nothing. A later unmatched character is handled per
    /// [`Config::prefix_match`]. Only keywords with a weight > 0 are returned.
    /// Equal weights keep pre-order: a keyword precedes its extensions and
    /// siblings follow code-point order.
    pub fn find(&self, prefix: &str, order: SortOrder) -> Vec<String> {
        let Some(start) = self.start_node(prefix) else {
            trace!(prefix, ?order, matches = 0, "find");
            return Vec::new();
        };

        let mut hits: Vec<&Entry> = Iter::from_node(start)
            .filter_map(|n| n.searchable())
            .collect();
        match order {
            SortOrder::Asc => hits.sort_by_key(|e| e.weight),
            SortOrder::Desc => hits.sort_by(|a, b| b.weight.cmp(&a.weight)),
        }

        trace!(prefix, ?order, matches = hits.len(), "find");
        hits.into_iter().map(|e| e.keyword.clone()).collect()
    }

    /// Iterates over every stored keyword and its weight in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        Iter::from_node(&self.root)
            .filter_map(|n| n.entry.as_ref())
            .map(|e| (e.keyword.as_str(), e.weight))
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    fn node(&self, keyword: &str) -> Option<&Node> {
        let mut node = &self.root;
        for ch in keyword.chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }

    /// Node to collect from, or `None` when the search space would be the
    /// whole tree or the prefix misses in exact mode.
    fn start_node(&self, prefix: &str) -> Option<&Node> {
        let mut node = &self.root;
        let mut matched = 0usize;

        for ch in prefix.chars() {
            match node.child(ch) {
                Some(child) => {
                    node = child;
                    matched += 1;
                }
                None => {
                    match self.config.prefix_match {
                        PrefixMatch::Exact => {
                            debug!(prefix, matched, "prefix not found");
                            return None;
                        }
                        PrefixMatch::Fallback => {
                            if matched > 0 {
                                debug!(
                                    prefix,
                                    matched,
                                    requested = prefix.chars().count(),
                                    "falling back to partial prefix match"
                                );
                            }
                        }
                    }
                    break;
                }
            }
        }

        (matched > 0).then_some(node)
    }
}

impl Drop for Trie {
    // Iterative so that very long keywords cannot overflow the stack.
    fn drop(&mut self) {
        let mut stack: Vec<Node> = std::mem::take(&mut self.root.children)
            .into_values()
            .collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl Clone for Trie {
    // Nodes only exist on paths to stored keywords, so replaying every entry
    // rebuilds the same shape without recursing per character.
    fn clone(&self) -> Self {
        let mut copy = Trie::with_config(self.config.clone());
        for entry in Iter::from_node(&self.root).filter_map(|n| n.entry.as_ref()) {
            let mut node = &mut copy.root;
            for ch in entry.keyword.chars() {
                node = node.child_or_insert(ch);
            }
            node.mark_terminal(&entry.keyword, entry.weight);
        }
        copy.count = self.count;
        copy
    }
}

impl std::fmt::Debug for Trie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: AsRef<str>> Extend<(K, i64)> for Trie {
    /// Empty keywords are skipped; use [`Trie::try_extend`] to surface them.
    fn extend<I: IntoIterator<Item = (K, i64)>>(&mut self, iter: I) {
        for (keyword, weight) in iter {
            if let Err(err) = self.insert(keyword.as_ref(), weight) {
                warn!(%err, "skipping keyword");
            }
        }
    }
}

impl<K: AsRef<str>> FromIterator<(K, i64)> for Trie {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

/// Pre-order walk over a subtree, children in code-point order.
struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn from_node(node: &'a Node) -> Self {
        Iter { stack: vec![node] }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.values().rev());
        Some(node)
    }
}

use std::collections::BTreeMap;

/// Keyword stored at a terminal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) keyword: String,
    pub(crate) weight: i64,
}

/// One position in the character path space.
///
/// Children are owned exclusively and ordered by code point, so a pre-order
/// walk is deterministic.
#[derive(Default)]
pub(crate) struct Node {
    pub(crate) children: BTreeMap<char, Node>,
    /// `Some` iff an inserted keyword ends exactly here.
    pub(crate) entry: Option<Entry>,
}

impl Node {
    #[inline]
    pub(crate) fn child(&self, ch: char) -> Option<&Node> {
        self.children.get(&ch)
    }

    #[inline]
    pub(crate) fn child_or_insert(&mut self, ch: char) -> &mut Node {
        self.children.entry(ch).or_default()
    }

    /// Marks this node as the end of `keyword`, returning the previous weight.
    pub(crate) fn mark_terminal(&mut self, keyword: &str, weight: i64) -> Option<i64> {
        match &mut self.entry {
            Some(entry) => Some(std::mem::replace(&mut entry.weight, weight)),
            None => {
                self.entry = Some(Entry {
                    keyword: keyword.to_owned(),
                    weight,
                });
                None
            }
        }
    }

    /// The entry, if it is visible to searches (weight > 0).
    #[inline]
    pub(crate) fn searchable(&self) -> Option<&Entry> {
        self.entry.as_ref().filter(|e| e.weight > 0)
    }
}

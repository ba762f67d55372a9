use crate::node::Node;
use crate::{Config, PrefixMatch, SortOrder, Trie, TrieError};

use proptest::prelude::*;
use std::collections::HashMap;

fn validate_trie(t: &Trie) {
    fn rec(node: &Node, path: &mut String, entries: &mut usize) {
        if let Some(entry) = &node.entry {
            assert!(!path.is_empty(), "root must never be terminal");
            assert_eq!(&entry.keyword, path, "keyword must spell its path");
            *entries += 1;
        } else {
            assert!(
                path.is_empty() || !node.children.is_empty(),
                "non-terminal leaf at {path:?}"
            );
        }
        for (ch, child) in &node.children {
            path.push(*ch);
            rec(child, path, entries);
            path.pop();
        }
    }

    let mut entries = 0usize;
    rec(t.root(), &mut String::new(), &mut entries);
    assert_eq!(entries, t.len(), "reachable entries must match Trie::len");
}

/// Expected `find` output computed from a flat keyword map.
fn model_find(
    m: &HashMap<String, i64>,
    prefix: &str,
    order: SortOrder,
    mode: PrefixMatch,
) -> Vec<String> {
    let chars: Vec<char> = prefix.chars().collect();
    let has_path = |n: usize| {
        let p: String = chars[..n].iter().collect();
        m.keys().any(|k| k.starts_with(&p))
    };

    let mut matched = 0;
    while matched < chars.len() && has_path(matched + 1) {
        matched += 1;
    }
    if matched == 0 || (mode == PrefixMatch::Exact && matched < chars.len()) {
        return Vec::new();
    }

    let start: String = chars[..matched].iter().collect();
    let mut hits: Vec<(&String, i64)> = m
        .iter()
        .filter(|(k, w)| **w > 0 && k.starts_with(&start))
        .map(|(k, w)| (k, *w))
        .collect();
    hits.sort();
    match order {
        SortOrder::Asc => hits.sort_by_key(|(_, w)| *w),
        SortOrder::Desc => hits.sort_by(|a, b| b.1.cmp(&a.1)),
    }
    hits.into_iter().map(|(k, _)| k.clone()).collect()
}

#[derive(Clone, Debug)]
enum Op {
    Insert(String, i64),
    Find(String, SortOrder),
}

fn key_strategy() -> impl Strategy<Value = String> + Clone {
    // Small alphabet so prefixes collide often; empty keys exercise rejection.
    "[a-dA]{0,6}"
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        60 => (key.clone(), -3i64..20).prop_map(|(k, w)| Op::Insert(k, w)),
        40 => (key, any::<SortOrder>()).prop_map(|(p, o)| Op::Find(p, o)),
    ];
    prop::collection::vec(op, 0..=300)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy(), mode in any::<PrefixMatch>()) {
        let mut t = Trie::with_config(Config { prefix_match: mode });
        let mut m: HashMap<String, i64> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(key, weight) => {
                    let got = t.insert(&key, weight);
                    if key.is_empty() {
                        prop_assert_eq!(got, Err(TrieError::EmptyKeyword));
                    } else {
                        prop_assert_eq!(got, Ok(m.insert(key, weight)));
                    }
                }
                Op::Find(prefix, order) => {
                    let got = t.find(&prefix, order);
                    let expected = model_find(&m, &prefix, order, mode);
                    prop_assert_eq!(got, expected);
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        validate_trie(&t);
    }

    #[test]
    fn prop_results_ordered_by_weight(
        pairs in prop::collection::vec((key_strategy(), -5i64..50), 1..100),
        prefix in key_strategy(),
        order in any::<SortOrder>(),
    ) {
        let t: Trie = pairs.into_iter().collect();
        let found = t.find(&prefix, order);
        let ws: Vec<i64> = found.iter().map(|k| t.weight(k).unwrap_or_default()).collect();

        prop_assert!(ws.iter().all(|w| *w > 0));
        match order {
            SortOrder::Asc => prop_assert!(ws.windows(2).all(|p| p[0] <= p[1])),
            SortOrder::Desc => prop_assert!(ws.windows(2).all(|p| p[0] >= p[1])),
        }

        let mut dedup = found.clone();
        dedup.sort();
        dedup.dedup();
        prop_assert_eq!(dedup.len(), found.len());
    }

    #[test]
    fn prop_every_prefix_finds_keyword(key in "[a-c]{1,8}", weight in 1i64..100) {
        let mut t = Trie::new();
        t.insert("ab", 3).unwrap();
        t.insert("cab", 1).unwrap();
        t.insert(&key, weight).unwrap();

        for (end, _) in key.char_indices().skip(1).chain([(key.len(), ' ')]) {
            let prefix = &key[..end];
            prop_assert!(t.find(prefix, SortOrder::Asc).contains(&key));
        }
    }
}

#[test]
fn exhaustive_insert_order_small_set() {
    let pairs = [("a", 2i64), ("ab", 1), ("abc", 2), ("b", 5), ("ba", 0), ("ac", 2)];

    // All 720 orders must produce the same results.
    let mut order: Vec<usize> = (0..pairs.len()).collect();
    let reference: Trie = pairs.into_iter().collect();
    let expected = reference.find("a", SortOrder::Desc);
    assert_eq!(expected, ["a", "abc", "ac", "ab"]);

    fn next_permutation(v: &mut [usize]) -> bool {
        let Some(i) = (1..v.len()).rev().find(|&i| v[i - 1] < v[i]) else {
            return false;
        };
        let j = (i..v.len()).rev().find(|&j| v[j] > v[i - 1]).unwrap_or(i);
        v.swap(i - 1, j);
        v[i..].reverse();
        true
    }

    let mut seen = 0;
    loop {
        let t: Trie = order.iter().map(|&i| pairs[i]).collect();
        validate_trie(&t);
        assert_eq!(t.find("a", SortOrder::Desc), expected);
        assert!(t.find("b", SortOrder::Asc) == ["b"]);
        seen += 1;
        if !next_permutation(&mut order) {
            break;
        }
    }
    assert_eq!(seen, 720);
}

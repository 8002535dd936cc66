use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Reference model: sequence -> occurrence count.
#[derive(Clone, Debug, Default)]
struct Model {
    counts: BTreeMap<String, usize>,
}

impl Model {
    fn insert(&mut self, s: &str) {
        *self.counts.entry(s.to_string()).or_insert(0) += 1;
    }

    /// A stored sequence that other stored sequences extend sits on a node
    /// with children and loses one occurrence; otherwise its node is
    /// reclaimed with every occurrence.
    fn delete(&mut self, s: &str) -> bool {
        let Some(&count) = self.counts.get(s) else {
            return false;
        };
        let extended = self
            .counts
            .range::<str, _>((Bound::Excluded(s), Bound::Unbounded))
            .next()
            .is_some_and(|(next, _)| next.starts_with(s));

        if extended && count > 1 {
            self.counts.insert(s.to_string(), count - 1);
        } else {
            self.counts.remove(s);
        }
        true
    }

    fn find(&self, s: &str) -> bool {
        self.counts.contains_key(s)
    }

    fn stats(&self) -> (usize, usize) {
        (self.counts.len(), self.counts.values().sum())
    }

    fn listing(&self) -> Vec<(String, usize)> {
        self.counts.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }
}

fn listing(t: &RadixTree) -> Vec<(String, usize)> {
    t.iter().map(|(s, n)| (s.to_string(), n)).collect()
}

fn validate_tree(t: &RadixTree) {
    let issues = t.verify_integrity();
    assert!(issues.is_empty(), "integrity issues: {:#?}", issues);
    assert_eq!(t.nodes().count(), t.count_nodes());
    assert!(t.count_unique() <= t.count_nodes());
}

#[derive(Clone, Debug)]
enum Op {
    Insert(String),
    Delete(String),
    Find(String),
    /// Arbitrary text, possibly empty or outside the alphabet.
    Raw(String),
}

fn dna_strategy() -> impl Strategy<Value = String> + Clone {
    // Short sequences keep shared prefixes and exact duplicates common.
    prop::collection::vec(any::<Base>(), 1..=6)
        .prop_map(|bases| bases.into_iter().map(Base::as_char).collect())
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let seq = dna_strategy();
    let op = prop_oneof![
        45 => seq.clone().prop_map(Op::Insert),
        30 => seq.clone().prop_map(Op::Delete),
        20 => seq.prop_map(Op::Find),
        5 => "[ACGTNa]{0,4}".prop_map(Op::Raw),
    ];
    prop::collection::vec(op, 0..=300)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t = RadixTree::new();
        let mut m = Model::default();

        for op in ops {
            match op {
                Op::Insert(s) => {
                    prop_assert_eq!(t.insert(&s), Ok(()));
                    m.insert(&s);
                }
                Op::Delete(s) => {
                    prop_assert_eq!(t.delete(&s), Ok(m.delete(&s)));
                }
                Op::Find(s) => {
                    prop_assert_eq!(t.find(&s), Ok(m.find(&s)));
                    prop_assert_eq!(t.occurrences(&s), Ok(m.counts.get(&s).copied().unwrap_or(0)));
                }
                Op::Raw(s) => {
                    let before = t.stats();
                    match validate(&s) {
                        Ok(()) => {
                            prop_assert_eq!(t.insert(&s), Ok(()));
                            m.insert(&s);
                        }
                        Err(err) => {
                            prop_assert_eq!(t.insert(&s), Err(err.clone()));
                            prop_assert_eq!(t.find(&s), Err(err.clone()));
                            prop_assert_eq!(t.delete(&s), Err(err));
                            prop_assert_eq!(t.stats(), before);
                        }
                    }
                }
            }

            let stats = t.stats();
            prop_assert_eq!((stats.unique, stats.total), m.stats());
        }

        validate_tree(&t);
        prop_assert_eq!(listing(&t), m.listing());
    }

    #[test]
    fn prop_insert_then_find(seqs in prop::collection::vec(dna_strategy(), 1..50)) {
        let mut t = RadixTree::new();
        for s in &seqs {
            t.insert(s).unwrap();
            prop_assert_eq!(t.find(s), Ok(true));
        }
        for s in &seqs {
            prop_assert_eq!(t.find(s), Ok(true));
        }
        prop_assert_eq!(t.count_total(), seqs.len());
        validate_tree(&t);
    }

    #[test]
    fn prop_insert_delete_restores(
        base in prop::collection::vec(dna_strategy(), 0..40),
        extra in dna_strategy()
    ) {
        let mut t = RadixTree::new();
        for s in &base {
            t.insert(s).unwrap();
        }
        prop_assume!(t.find(&extra) == Ok(false));
        let before = t.stats();
        let before_listing = listing(&t);

        t.insert(&extra).unwrap();
        prop_assert_eq!(t.delete(&extra), Ok(true));

        prop_assert_eq!(t.find(&extra), Ok(false));
        prop_assert_eq!(t.count_unique(), before.unique);
        prop_assert_eq!(t.count_total(), before.total);
        prop_assert_eq!(listing(&t), before_listing);
        validate_tree(&t);
    }

    #[test]
    fn prop_enumeration_is_sorted(seqs in prop::collection::vec(dna_strategy(), 0..80)) {
        let mut t = RadixTree::new();
        for s in &seqs {
            t.insert(s).unwrap();
        }
        let got: Vec<String> = t.sequences().map(|s| s.to_string()).collect();
        let mut expected = seqs.clone();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(got, expected);
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

const SMALL_SET: [&str; 7] = ["A", "AC", "ACG", "ACGT", "AG", "C", "ACC"];

fn shape(t: &RadixTree) -> Vec<(usize, String, bool, usize)> {
    t.nodes()
        .map(|n| (n.depth, n.path, n.end_of_sequence, n.occurrences))
        .collect()
}

#[test]
fn exhaustive_insert_order_small_set() {
    let mut reference: Option<Vec<(usize, String, bool, usize)>> = None;

    for_each_permutation(&SMALL_SET, |perm| {
        let mut t = RadixTree::new();
        for s in &perm {
            t.insert(s).unwrap();
        }
        validate_tree(&t);

        let mut expected: Vec<&str> = SMALL_SET.to_vec();
        expected.sort();
        let got: Vec<String> = t.sequences().map(|s| s.to_string()).collect();
        assert_eq!(got, expected, "order {:?}", perm);

        // The compressed trie of a set does not depend on insertion order.
        let current = shape(&t);
        match &reference {
            Some(r) => assert_eq!(&current, r, "order {:?}", perm),
            None => reference = Some(current),
        }
    });
}

#[test]
fn exhaustive_delete_order_small_set() {
    let mut base_tree = RadixTree::new();
    let mut base_model = Model::default();
    for s in SMALL_SET {
        base_tree.insert(s).unwrap();
        base_model.insert(s);
    }

    for_each_permutation(&SMALL_SET, |perm| {
        let mut t = base_tree.clone();
        let mut m = base_model.clone();

        for s in perm {
            assert_eq!(t.delete(s), Ok(m.delete(s)));
            assert_eq!(listing(&t), m.listing());
            validate_tree(&t);
        }
        assert!(t.is_empty());
        assert_eq!(t.count_nodes(), 0);
    });
}

#[test]
fn test_randomized_insert_delete_find() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(2);
    let mut t = RadixTree::new();
    let mut m = Model::default();

    for _ in 0..50_000 {
        let op = rng.gen_range(0..100);
        let len = rng.gen_range(1..9);
        let key: String = (0..len)
            .map(|_| Base::ALL[rng.gen_range(0..4)].as_char())
            .collect();

        match op {
            0..=49 => {
                t.insert(&key).unwrap();
                m.insert(&key);
            }
            50..=74 => {
                assert_eq!(t.delete(&key), Ok(m.delete(&key)));
            }
            _ => {
                assert_eq!(t.find(&key), Ok(m.find(&key)));
            }
        }
    }

    validate_tree(&t);
    assert_eq!(listing(&t), m.listing());
    let (unique, total) = m.stats();
    assert_eq!(t.count_unique(), unique);
    assert_eq!(t.count_total(), total);
}

#![cfg(test)]

// Property tests for ChainedHashMap kept inside the crate so they can check
// bucket placement and chain structure, not just the public surface.

use crate::capacity::MAX_LOAD_FACTOR;
use crate::chained_hash_map::ChainedHashMap;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{BTreeSet, HashMap};
use std::hash::{BuildHasher, Hasher};

#[derive(Clone, Debug)]
enum Op {
    Insert(u32, i32),
    Remove(u32),
    Get(u32),
    Mutate(u32, i32),
    Iterate,
}

// Keys are drawn from a range wide enough that long runs cross the first
// growth threshold (76 live entries).
fn arb_ops(max_key: u32) -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        4 => (0..max_key, any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        2 => (0..max_key).prop_map(Op::Remove),
        2 => (0..max_key).prop_map(Op::Get),
        1 => (0..max_key, any::<i32>()).prop_map(|(k, d)| Op::Mutate(k, d)),
        1 => Just(Op::Iterate),
    ];
    proptest::collection::vec(op, 1..400)
}

// State-machine equivalence against std::collections::HashMap. After every op:
// - insert/remove/get results match the model;
// - len/is_empty match the model;
// - load factor stays at or below the threshold (the schedule is never
//   exhausted at these sizes);
// - max chain length is 0 iff empty;
// - every node sits in its home bucket and the arena holds no orphans.
fn run<S: BuildHasher>(
    mut sut: ChainedHashMap<u32, i32, S>,
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<u32, i32> = HashMap::new();
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                prop_assert_eq!(sut.insert(k, v), model.insert(k, v));
                prop_assert_eq!(sut.get(&k), Some(&v));
                prop_assert!(sut.load_factor() <= MAX_LOAD_FACTOR);
            }
            Op::Remove(k) => {
                prop_assert_eq!(sut.remove(&k), model.remove(&k));
                prop_assert!(sut.get(&k).is_none());
            }
            Op::Get(k) => {
                prop_assert_eq!(sut.get(&k), model.get(&k));
                prop_assert_eq!(sut.contains_key(&k), model.contains_key(&k));
            }
            Op::Mutate(k, d) => {
                if let Some(v) = sut.get_mut(&k) {
                    *v = v.wrapping_add(d);
                }
                if let Some(v) = model.get_mut(&k) {
                    *v = v.wrapping_add(d);
                }
            }
            Op::Iterate => {
                let seen: Vec<(u32, i32)> = sut.iter().map(|(k, v)| (*k, *v)).collect();
                prop_assert_eq!(seen.len(), model.len());
                let keys: BTreeSet<u32> = seen.iter().map(|(k, _)| *k).collect();
                prop_assert_eq!(keys.len(), seen.len(), "iteration repeated a key");
                for (k, v) in seen {
                    prop_assert_eq!(model.get(&k), Some(&v));
                }
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert_eq!(sut.max_chain_length() == 0, model.is_empty());
        sut.assert_structure();
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(ops in arb_ops(500)) {
        run(ChainedHashMap::new(), ops)?;
    }
}

// Collision variant using a constant hasher: every key shares bucket 0, so
// every removal exercises head, middle and tail splicing of one long chain.
#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions(ops in arb_ops(40)) {
        let sut: ChainedHashMap<u32, i32, ConstBuildHasher> =
            ChainedHashMap::with_hasher(ConstBuildHasher);
        run(sut, ops)?;
    }
}

// Property: after any sequence of distinct-key inserts, growth has kept the
// load factor at or under the threshold and lookups see every key.
proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn prop_growth_keeps_load_bounded(keys in proptest::collection::btree_set(any::<u64>(), 0..2_000)) {
        let mut m: ChainedHashMap<u64, u64> = ChainedHashMap::new();
        for &k in &keys {
            prop_assert!(m.insert(k, k).is_none());
        }
        prop_assert_eq!(m.len(), keys.len());
        prop_assert!(m.load_factor() <= MAX_LOAD_FACTOR);
        for &k in &keys {
            prop_assert_eq!(m.get(&k), Some(&k));
        }
        m.assert_structure();
    }
}

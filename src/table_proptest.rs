#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can check the
// structural invariants through `assert_invariants`.

use crate::config::Config;
use crate::table::HashTable;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, String),
    Delete(usize),
    Search(usize),
    Contains(String),
    Churn(usize),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=48).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), "[a-z]{0,3}").prop_map(|(i, v)| OpI::Insert(i, v)),
            3 => idx.clone().prop_map(OpI::Delete),
            2 => idx.clone().prop_map(OpI::Search),
            1 => prop_oneof![contains_pool, "[a-z]{0,5}"].prop_map(OpI::Contains),
            1 => idx.clone().prop_map(OpI::Churn),
        ];
        proptest::collection::vec(op, 1..200).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn run_scenario(
    mut sut: HashTable,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, String> = HashMap::new();

    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = &pool[i];
                sut.insert(k, &v);
                model.insert(k.clone(), v);
            }
            OpI::Delete(i) => {
                let k = &pool[i];
                sut.delete(k);
                model.remove(k);
                prop_assert!(sut.search(k).is_none(), "deleted key must be absent");
            }
            OpI::Search(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.search(k), model.get(k).map(String::as_str));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            // Delete then reinsert the same pair: exercises tombstone reuse.
            OpI::Churn(i) => {
                let k = &pool[i];
                let v = model.get(k).cloned().unwrap_or_default();
                sut.delete(k);
                sut.insert(k, &v);
                model.insert(k.clone(), v);
            }
        }

        // Post-conditions after each op
        // 1) Structure: prime size, counts, probe gaps, unique keys
        sut.assert_invariants();
        // 2) Size parity
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
    }

    // Every live key still resolves to its latest value.
    for (k, v) in &model {
        prop_assert_eq!(sut.search(k), Some(v.as_str()));
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - search returns the latest inserted value until deleted, None otherwise.
// - delete of an absent key is a no-op; delete then search is None.
// - len/is_empty parity with the model after each op.
// - structural invariants hold across every grow and shrink.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(HashTable::new(), &pool, ops)?;
    }
}

// Property: Same state-machine invariants on a tiny table with small
// multipliers. Resizes happen every few operations and probe sequences
// collide constantly.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_tiny_table((pool, ops) in arb_scenario()) {
        let config = Config::new()
            .base_capacity(2)
            .grow_above(60)
            .shrink_below(20)
            .multipliers(2, 3);
        let sut = HashTable::with_config(config).expect("valid config");
        run_scenario(sut, &pool, ops)?;
    }
}

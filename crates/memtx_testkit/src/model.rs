//! Reference model for model-based testing.
//!
//! [`ModelStore`] is the obvious two-map rendition of the store contract:
//! a committed map, a pending map, and an active flag. It exists so that
//! property tests can drive the real store and the model with the same
//! random operation sequence and require identical observable behavior.

use std::collections::HashMap;

/// The two-map reference model of the store.
#[derive(Debug, Default)]
pub struct ModelStore {
    committed: HashMap<String, i64>,
    pending: HashMap<String, i64>,
    active: bool,
}

impl ModelStore {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a transaction. Returns false if one is already active.
    pub fn begin(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.pending.clear();
        true
    }

    /// Writes a key. Returns false if no transaction is active.
    pub fn put(&mut self, key: &str, value: i64) -> bool {
        if !self.active {
            return false;
        }
        self.pending.insert(key.to_string(), value);
        true
    }

    /// Reads a key, pending-first while a transaction is active.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<i64> {
        if self.active {
            if let Some(value) = self.pending.get(key) {
                return Some(*value);
            }
        }
        self.committed.get(key).copied()
    }

    /// Commits. Returns false if no transaction is active.
    pub fn commit(&mut self) -> bool {
        if !self.active {
            return false;
        }
        for (key, value) in self.pending.drain() {
            self.committed.insert(key, value);
        }
        self.active = false;
        true
    }

    /// Rolls back. Returns false if no transaction is active.
    pub fn rollback(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.pending.clear();
        self.active = false;
        true
    }

    /// Returns whether a transaction is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seeded_store;
    use crate::generators::{key_strategy, op_sequence_strategy, value_strategy, StoreOp};
    use memtx_core::Store;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[test]
    fn model_basics() {
        let mut model = ModelStore::new();
        assert!(!model.put("a", 1));
        assert!(model.begin());
        assert!(!model.begin());
        assert!(model.put("a", 1));
        assert_eq!(model.get("a"), Some(1));
        assert!(model.commit());
        assert!(!model.commit());
        assert_eq!(model.get("a"), Some(1));

        assert!(model.begin());
        assert!(model.put("a", 2));
        assert!(model.rollback());
        assert_eq!(model.get("a"), Some(1));
    }

    /// Keys mentioned anywhere in an operation sequence.
    fn keys_of(ops: &[StoreOp]) -> BTreeSet<String> {
        ops.iter()
            .filter_map(|op| match op {
                StoreOp::Put { key, .. } | StoreOp::Get { key } => Some(key.clone()),
                _ => None,
            })
            .collect()
    }

    proptest! {
        #[test]
        fn store_matches_model(ops in op_sequence_strategy(48)) {
            let mut store: Store<i64> = Store::new();
            let mut model = ModelStore::new();

            for op in &ops {
                match op {
                    StoreOp::Begin => {
                        prop_assert_eq!(store.begin_transaction().is_ok(), model.begin());
                    }
                    StoreOp::Put { key, value } => {
                        prop_assert_eq!(store.put(key.clone(), *value).is_ok(), model.put(key, *value));
                    }
                    StoreOp::Get { key } => {
                        prop_assert_eq!(store.get(key), model.get(key));
                    }
                    StoreOp::Commit => {
                        prop_assert_eq!(store.commit().is_ok(), model.commit());
                    }
                    StoreOp::Rollback => {
                        prop_assert_eq!(store.rollback().is_ok(), model.rollback());
                    }
                }
            }

            prop_assert_eq!(store.in_transaction(), model.is_active());
            for key in keys_of(&ops) {
                prop_assert_eq!(store.get(&key), model.get(&key));
            }
        }

        #[test]
        fn rollback_restores_baseline(
            baseline in prop::collection::hash_map(key_strategy(), value_strategy(), 0..6),
            writes in prop::collection::vec((key_strategy(), value_strategy()), 0..12),
        ) {
            let mut store = seeded_store_from_map(&baseline);

            store.begin_transaction().unwrap();
            for (key, value) in &writes {
                store.put(key.clone(), *value).unwrap();
            }
            store.rollback().unwrap();

            for (key, value) in &baseline {
                prop_assert_eq!(store.get(key), Some(*value));
            }
            for (key, _) in &writes {
                prop_assert_eq!(store.get(key), baseline.get(key).copied());
            }
        }

        #[test]
        fn commit_applies_last_write(
            writes in prop::collection::vec((key_strategy(), value_strategy()), 1..12),
        ) {
            let mut store: Store<i64> = Store::new();
            store.begin_transaction().unwrap();
            for (key, value) in &writes {
                store.put(key.clone(), *value).unwrap();
            }
            store.commit().unwrap();

            for (key, _) in &writes {
                let last = writes
                    .iter()
                    .rev()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| *v);
                prop_assert_eq!(store.get(key), last);
            }
        }
    }

    fn seeded_store_from_map(baseline: &std::collections::HashMap<String, i64>) -> Store<i64> {
        seeded_store(
            &baseline
                .iter()
                .map(|(k, v)| (k.as_str(), *v))
                .collect::<Vec<_>>(),
        )
    }
}

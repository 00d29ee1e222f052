//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random keys, values, and operation
//! sequences. Keys are drawn from a small alphabet so that sequences
//! revisit the same keys and exercise shadowing.

use proptest::prelude::*;

/// A single store operation, as generated for sequence tests.
#[derive(Debug, Clone)]
pub enum StoreOp {
    /// Begin a transaction.
    Begin,
    /// Write a key within the active transaction.
    Put {
        /// Key to write.
        key: String,
        /// Value to write.
        value: i64,
    },
    /// Read a key.
    Get {
        /// Key to read.
        key: String,
    },
    /// Commit the active transaction.
    Commit,
    /// Roll back the active transaction.
    Rollback,
}

/// Strategy for generating keys.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d][0-2]?").expect("invalid key regex")
}

/// Strategy for generating values.
pub fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

/// Strategy for generating a single operation.
///
/// Sequencing errors are part of the contract, so `Begin`, `Commit`, and
/// `Rollback` are generated without regard for whether a transaction will
/// be active when they run.
pub fn op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        Just(StoreOp::Begin),
        (key_strategy(), value_strategy()).prop_map(|(key, value)| StoreOp::Put { key, value }),
        key_strategy().prop_map(|key| StoreOp::Get { key }),
        Just(StoreOp::Commit),
        Just(StoreOp::Rollback),
    ]
}

/// Strategy for generating an operation sequence.
pub fn op_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<StoreOp>> {
    prop::collection::vec(op_strategy(), 0..max_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::strategy::ValueTree;
    use proptest::test_runner::TestRunner;

    #[test]
    fn key_strategy_stays_in_alphabet() {
        let mut runner = TestRunner::default();
        for _ in 0..64 {
            let key = key_strategy()
                .new_tree(&mut runner)
                .unwrap()
                .current();
            assert!(!key.is_empty() && key.len() <= 2, "unexpected key {key:?}");
        }
    }

    #[test]
    fn op_sequence_respects_max_len() {
        let mut runner = TestRunner::default();
        for _ in 0..16 {
            let ops = op_sequence_strategy(10)
                .new_tree(&mut runner)
                .unwrap()
                .current();
            assert!(ops.len() < 10);
        }
    }
}

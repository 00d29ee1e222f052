//! Test fixtures and store helpers.
//!
//! Convenience functions for setting up pre-committed stores in tests.

use memtx_core::Store;

/// Creates a store with the given pairs already committed.
///
/// # Example
///
/// ```rust
/// use memtx_testkit::fixtures::seeded_store;
///
/// let store = seeded_store(&[("a", 1), ("b", 2)]);
/// assert_eq!(store.get("a"), Some(1));
/// assert!(!store.in_transaction());
/// ```
pub fn seeded_store(pairs: &[(&str, i64)]) -> Store<i64> {
    seeded_store_from(pairs.iter().map(|(k, v)| ((*k).to_string(), *v)))
}

/// Creates a store with values of any clonable type already committed.
pub fn seeded_store_from<V, I>(pairs: I) -> Store<V>
where
    V: Clone,
    I: IntoIterator<Item = (String, V)>,
{
    let mut store = Store::new();
    store
        .transaction(|s| {
            for (key, value) in pairs {
                s.put(key, value)?;
            }
            Ok(())
        })
        .expect("seeding a fresh store cannot fail");
    store
}

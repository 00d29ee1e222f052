//! The transactional store.

use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use crate::stats::StoreStats;
use crate::transaction::{Transaction, TransactionStatus};
use crate::types::{SequenceNumber, TransactionId};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// An in-process key-value store with a single read/write transaction.
///
/// `Store` keeps committed key/value state for its whole lifetime and, while
/// a transaction is active, overlays an in-flight pending buffer on top of
/// it. Reads resolve pending-first; `commit` merges the buffer into the
/// committed state and `rollback` discards it.
///
/// Transactions do not nest: beginning a second transaction fails with
/// [`StoreError::TransactionConflict`], and `put`/`commit`/`rollback`
/// outside a transaction fail with [`StoreError::NoActiveTransaction`].
/// Failed calls never mutate state.
///
/// All mutating operations take `&mut self`, so a `Store` is single-caller
/// by construction. It is not safe for concurrent access without an
/// external lock.
///
/// # Example
///
/// ```rust
/// use memtx_core::Store;
///
/// let mut store: Store<i64> = Store::new();
///
/// store.begin_transaction()?;
/// store.put("a", 5)?;
/// assert_eq!(store.get("a"), Some(5));
/// store.commit()?;
///
/// store.begin_transaction()?;
/// store.put("b", 10)?;
/// store.rollback()?;
///
/// assert_eq!(store.get("a"), Some(5));
/// assert_eq!(store.get("b"), None);
/// # Ok::<(), memtx_core::StoreError>(())
/// ```
pub struct Store<V> {
    /// Configuration.
    config: Config,
    /// Committed state. Mutated only by `commit`.
    committed: HashMap<String, V>,
    /// The active transaction, if any. `None` means no transaction is
    /// active and there is no pending buffer at all.
    current: Option<Transaction<V>>,
    /// Next transaction ID.
    next_txid: u64,
    /// Sequence of the last committed transaction.
    committed_seq: SequenceNumber,
    /// Operation counters.
    stats: StoreStats,
}

impl<V> Store<V> {
    /// Creates an empty store with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty store with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            committed: HashMap::with_capacity(config.committed_capacity),
            current: None,
            next_txid: 1,
            committed_seq: SequenceNumber::new(0),
            stats: StoreStats::new(),
            config,
        }
    }

    /// Begins a new transaction.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TransactionConflict`] if a transaction is
    /// already active. The active transaction is not committed or rolled
    /// back implicitly.
    pub fn begin_transaction(&mut self) -> StoreResult<()> {
        if self.current.is_some() {
            return Err(StoreError::TransactionConflict);
        }

        let id = TransactionId::new(self.next_txid);
        self.next_txid += 1;
        self.current = Some(Transaction::new(id, self.config.pending_capacity));
        self.stats.record_transaction_start();
        debug!(txid = %id, "transaction started");

        Ok(())
    }

    /// Inserts or updates a key within the active transaction.
    ///
    /// The write goes to the pending buffer only; committed state is
    /// untouched until `commit`. Repeated writes to the same key within one
    /// transaction overwrite each other (last write wins).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoActiveTransaction`] if no transaction is
    /// active.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> StoreResult<()> {
        let txn = self
            .current
            .as_mut()
            .ok_or(StoreError::no_active_transaction("put"))?;

        txn.put(key.into(), value);
        self.stats.record_write();

        Ok(())
    }

    /// Retrieves the value for a key.
    ///
    /// While a transaction is active, a pending write for the key shadows
    /// any committed value. Absence is reported as `None`, never as an
    /// error. The returned value is an owned clone; no reference into
    /// internal storage escapes.
    ///
    /// Callable whether or not a transaction is active.
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        let value = self
            .current
            .as_ref()
            .and_then(|txn| txn.get(key))
            .or_else(|| self.committed.get(key))
            .cloned();
        self.stats.record_read(value.is_some());
        value
    }

    /// Commits the active transaction.
    ///
    /// Every pending write is merged into the committed state, overwriting
    /// any prior committed value for the same key. The pending buffer is
    /// destroyed and the commit is assigned the next sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoActiveTransaction`] if no transaction is
    /// active.
    pub fn commit(&mut self) -> StoreResult<SequenceNumber> {
        let txn = self
            .current
            .take()
            .ok_or(StoreError::no_active_transaction("commit"))?;

        let txid = txn.id();
        let write_count = txn.write_count();
        for (key, value) in txn.into_writes() {
            self.committed.insert(key, value);
        }

        self.committed_seq = self.committed_seq.next();
        self.stats.record_transaction_commit();
        debug!(
            txid = %txid,
            sequence = %self.committed_seq,
            writes = write_count,
            "transaction committed"
        );

        Ok(self.committed_seq)
    }

    /// Rolls back the active transaction.
    ///
    /// The pending buffer is discarded entirely; committed state is
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoActiveTransaction`] if no transaction is
    /// active.
    pub fn rollback(&mut self) -> StoreResult<()> {
        let txn = self
            .current
            .take()
            .ok_or(StoreError::no_active_transaction("rollback"))?;

        self.stats.record_transaction_rollback();
        debug!(
            txid = %txn.id(),
            discarded = txn.write_count(),
            "transaction rolled back"
        );

        Ok(())
    }

    /// Executes a function within a transaction.
    ///
    /// If the function returns `Ok`, the transaction is committed. If it
    /// returns `Err`, the transaction is rolled back and the function's
    /// error is propagated unmasked.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TransactionConflict`] if a transaction is
    /// already active when this is called.
    pub fn transaction<T, F>(&mut self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Self) -> StoreResult<T>,
    {
        self.begin_transaction()?;
        match f(self) {
            Ok(result) => {
                self.commit()?;
                Ok(result)
            }
            Err(e) => {
                // Don't mask the original error.
                let _ = self.rollback();
                Err(e)
            }
        }
    }

    /// Returns whether a transaction is currently active.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the current transaction status.
    #[must_use]
    pub fn status(&self) -> TransactionStatus {
        if self.current.is_some() {
            TransactionStatus::Active
        } else {
            TransactionStatus::Inactive
        }
    }

    /// Returns true if the key resolves to a value, using the same
    /// pending-first resolution as `get`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.current
            .as_ref()
            .is_some_and(|txn| txn.contains(key))
            || self.committed.contains_key(key)
    }

    /// Returns the number of committed entries.
    ///
    /// Pending writes are not counted until they commit.
    #[must_use]
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Returns true if there are no committed entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Returns the number of pending writes in the active transaction,
    /// or 0 if no transaction is active.
    #[must_use]
    pub fn pending_writes(&self) -> usize {
        self.current.as_ref().map_or(0, Transaction::write_count)
    }

    /// Returns the sequence number of the last commit.
    ///
    /// Sequence 0 means no transaction has committed yet.
    #[must_use]
    pub fn committed_seq(&self) -> SequenceNumber {
        self.committed_seq
    }

    /// Returns the store's operation counters.
    #[must_use]
    pub fn stats(&self) -> &StoreStats {
        &self.stats
    }
}

impl<V> Default for Store<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for Store<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("len", &self.committed.len())
            .field("status", &self.status())
            .field("committed_seq", &self.committed_seq)
            .finish_non_exhaustive()
    }
}

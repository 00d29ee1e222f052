//! Store statistics.
//!
//! Counters for monitoring store usage.
//!
//! # Usage
//!
//! ```rust
//! use memtx_core::Store;
//!
//! let mut store: Store<i64> = Store::new();
//! store.begin_transaction().unwrap();
//! store.put("a", 1).unwrap();
//! store.commit().unwrap();
//!
//! let snap = store.stats().snapshot();
//! assert_eq!(snap.writes, 1);
//! assert_eq!(snap.transactions_committed, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Store statistics.
///
/// All counters are atomic so they can be read through a shared reference,
/// and are monotonically increasing.
#[derive(Debug, Default)]
pub struct StoreStats {
    /// Total number of read (get) operations.
    reads: AtomicU64,
    /// Number of reads that found no value.
    reads_absent: AtomicU64,
    /// Total number of write (put) operations.
    writes: AtomicU64,
    /// Total number of transactions started.
    transactions_started: AtomicU64,
    /// Total number of transactions committed.
    transactions_committed: AtomicU64,
    /// Total number of transactions rolled back.
    transactions_rolled_back: AtomicU64,
}

impl StoreStats {
    /// Creates a new stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    // === Increment methods (internal use) ===

    /// Records a read operation.
    pub(crate) fn record_read(&self, found: bool) {
        self.reads.fetch_add(1, Ordering::Relaxed);
        if !found {
            self.reads_absent.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records a write operation.
    pub(crate) fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a transaction start.
    pub(crate) fn record_transaction_start(&self) {
        self.transactions_started.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a transaction commit.
    pub(crate) fn record_transaction_commit(&self) {
        self.transactions_committed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a transaction rollback.
    pub(crate) fn record_transaction_rollback(&self) {
        self.transactions_rolled_back.fetch_add(1, Ordering::Relaxed);
    }

    // === Getter methods (public API) ===

    /// Returns the total number of read operations.
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    /// Returns the number of reads that found no value.
    pub fn reads_absent(&self) -> u64 {
        self.reads_absent.load(Ordering::Relaxed)
    }

    /// Returns the total number of write operations.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    /// Returns the total number of transactions started.
    pub fn transactions_started(&self) -> u64 {
        self.transactions_started.load(Ordering::Relaxed)
    }

    /// Returns the total number of transactions committed.
    pub fn transactions_committed(&self) -> u64 {
        self.transactions_committed.load(Ordering::Relaxed)
    }

    /// Returns the total number of transactions rolled back.
    pub fn transactions_rolled_back(&self) -> u64 {
        self.transactions_rolled_back.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of all stats.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            reads: self.reads(),
            reads_absent: self.reads_absent(),
            writes: self.writes(),
            transactions_started: self.transactions_started(),
            transactions_committed: self.transactions_committed(),
            transactions_rolled_back: self.transactions_rolled_back(),
        }
    }
}

/// A point-in-time snapshot of store statistics.
///
/// Unlike [`StoreStats`], this is a simple struct that can be compared or
/// passed around without atomics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    /// Total number of read operations.
    pub reads: u64,
    /// Number of reads that found no value.
    pub reads_absent: u64,
    /// Total number of write operations.
    pub writes: u64,
    /// Total number of transactions started.
    pub transactions_started: u64,
    /// Total number of transactions committed.
    pub transactions_committed: u64,
    /// Total number of transactions rolled back.
    pub transactions_rolled_back: u64,
}

//! # memtx core
//!
//! A minimal in-process key-value store with a single read/write
//! transaction layered on top of committed state.
//!
//! ## Design
//!
//! - Committed state lives for the store's lifetime and is mutated only by
//!   a successful commit.
//! - While a transaction is active, writes are buffered in a pending layer
//!   that shadows committed state for reads.
//! - Commit merges the pending layer into committed state (last write
//!   wins); rollback discards it.
//! - Transactions do not nest, and the store is single-caller by
//!   construction: wrap it in a lock for shared use.
//!
//! ## Example
//!
//! ```rust
//! use memtx_core::{Store, StoreError};
//!
//! let mut store: Store<i64> = Store::new();
//!
//! // Writes require an active transaction.
//! assert!(matches!(
//!     store.put("A", 5),
//!     Err(StoreError::NoActiveTransaction { .. })
//! ));
//!
//! store.begin_transaction()?;
//! store.put("A", 5)?;
//! store.commit()?;
//! assert_eq!(store.get("A"), Some(5));
//! # Ok::<(), StoreError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod stats;
mod store;
mod transaction;
mod types;

pub use config::Config;
pub use error::{StoreError, StoreResult};
pub use stats::{StatsSnapshot, StoreStats};
pub use store::Store;
pub use transaction::TransactionStatus;
pub use types::{SequenceNumber, TransactionId};

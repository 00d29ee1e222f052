//! Error types for memtx.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
///
/// A missing key is not represented here: [`Store::get`](crate::Store::get)
/// reports absence as `None`, since a lookup miss is an expected outcome
/// rather than a fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A transaction is already active.
    #[error("transaction already in progress")]
    TransactionConflict,

    /// The operation requires an active transaction.
    #[error("no active transaction for {operation}")]
    NoActiveTransaction {
        /// The operation that was attempted.
        operation: &'static str,
    },
}

impl StoreError {
    /// Creates a no-active-transaction error for the given operation.
    pub(crate) fn no_active_transaction(operation: &'static str) -> Self {
        Self::NoActiveTransaction { operation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            StoreError::TransactionConflict.to_string(),
            "transaction already in progress"
        );
        assert_eq!(
            StoreError::no_active_transaction("put").to_string(),
            "no active transaction for put"
        );
    }
}

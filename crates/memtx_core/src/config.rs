//! Store configuration.

/// Configuration for creating a store.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Initial capacity of the committed map (0 = allocate on first use).
    pub committed_capacity: usize,

    /// Initial capacity of each transaction's pending buffer
    /// (0 = allocate on first write).
    pub pending_capacity: usize,
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial capacity of the committed map.
    #[must_use]
    pub const fn committed_capacity(mut self, capacity: usize) -> Self {
        self.committed_capacity = capacity;
        self
    }

    /// Sets the initial capacity of each transaction's pending buffer.
    #[must_use]
    pub const fn pending_capacity(mut self, capacity: usize) -> Self {
        self.pending_capacity = capacity;
        self
    }
}

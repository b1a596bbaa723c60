//! Errors reported by `OpenAddressingMap`

use thiserror::Error;

/// Errors raised when configuring or growing an `OpenAddressingMap`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MapError {
    /// The table must have at least one slot
    #[error("Capacity must be at least 1")]
    InvalidCapacity,
    /// The load factor must lie in `(0, 1]`
    #[error("Load factor must be in (0, 1], got: {0}")]
    InvalidLoadFactor(f64),
    /// Doubling the table would overflow `usize`
    #[error("Doubling the table capacity overflows usize")]
    CapacityOverflow,
    /// The allocator could not provide the grown table
    #[error("Couldnt allocate a table of {capacity} slots")]
    AllocationFailed {
        /// Number of slots requested
        capacity: usize,
    },
}

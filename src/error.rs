//! Error types for table construction and fallible mutation.

use std::collections::TryReserveError;

/// The allocator could not provide storage for a slot array or a text copy.
///
/// Only the `try_*` operations return this. The infallible operations abort
/// the process instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocError {
    /// The bucket count for `size_index` does not fit in `usize`.
    #[error("no representable capacity for size index {size_index}")]
    CapacityOverflow { size_index: u32 },

    /// The global allocator refused the request.
    #[error("memory allocation failed: {0}")]
    Exhausted(#[from] TryReserveError),
}

/// Failure to construct a [`HashTable`](crate::HashTable) from a
/// [`Config`](crate::Config).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("invalid table configuration: {0}")]
    InvalidConfig(&'static str),

    #[error(transparent)]
    Alloc(#[from] AllocError),
}

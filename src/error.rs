use thiserror::Error;

/// Errors reported by [`FixVec`](crate::FixVec) operations.
///
/// Every variant carries the numbers a caller needs to report the failure
/// without re-querying the vector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixVecError {
    /// An operation would have grown the vector past its fixed capacity.
    #[error("Capacity exceeded: operation requires {requested} elements but capacity is fixed at {capacity}")]
    CapacityExceeded {
        /// Length the vector would have needed to complete the operation.
        requested: usize,
        /// Capacity the vector was defined with.
        capacity: usize,
    },

    /// A checked access used an index at or past the current length.
    #[error("Index out of range: index {index} is past the current length {length}")]
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
        /// Length of the vector at the time of the access.
        length: usize,
    },
}

/// Errors reported by the run-time freeze pipeline.
#[cfg(feature = "alloc")]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FreezeError {
    /// The discovery pass produced more elements than the scratch ceiling.
    ///
    /// Nothing is frozen when this happens; a later attempt with a fitting
    /// producer starts from a clean slate.
    #[error("Oversize limit exceeded: producer yielded more than {limit} elements")]
    OversizeExceeded {
        /// The scratch ceiling, [`OVERSIZED_LIMIT`](crate::OVERSIZED_LIMIT).
        limit: usize,
    },
}

use alloc::collections::TryReserveError;

use thiserror::Error;

/// Failure modes of the boxing transformation.
///
/// Well-formed input never produces an error on its own. Every variant
/// describes a capacity or allocation problem, so callers can tell them apart
/// from the I/O failures of their own layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoxError {
    /// The output size for the measured dimensions does not fit in `usize`.
    #[error("box of width {width} with {rows} rows does not fit in memory")]
    CapacityOverflow {
        /// Measured width of the input.
        width: usize,
        /// Measured number of body rows.
        rows: usize,
    },
    /// The output buffer could not be reserved.
    #[error("failed to reserve {capacity} bytes for the boxed output")]
    AllocationFailure {
        /// Number of bytes that was requested.
        capacity: usize,
        /// Error reported by the allocator.
        #[source]
        source: TryReserveError,
    },
    /// A renderer tried to write past the reserved capacity.
    #[error("write past the reserved capacity of {capacity} bytes")]
    CapacityExceeded {
        /// Capacity the cursor was created with.
        capacity: usize,
    },
}

impl BoxError {
    /// Returns `true` if the output buffer could not be sized or reserved.
    ///
    /// These failures are fatal for the current input: retrying with the same
    /// bytes fails the same way.
    #[must_use]
    pub fn is_allocation(&self) -> bool {
        matches!(
            self,
            BoxError::CapacityOverflow { .. } | BoxError::AllocationFailure { .. }
        )
    }
}

use alloc::vec::Vec;

use crate::error::BoxError;

/// Append-only output buffer with a fixed capacity.
///
/// The capacity is reserved up front and never grows: a write that would
/// exceed it fails with [`BoxError::CapacityExceeded`] and leaves the cursor
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputCursor {
    buf: Vec<u8>,
    capacity: usize,
}

impl OutputCursor {
    /// Reserves exactly `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::AllocationFailure`] if the allocator refuses the
    /// reservation.
    pub fn with_capacity(capacity: usize) -> Result<Self, BoxError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|source| BoxError::AllocationFailure { capacity, source })?;
        Ok(Self { buf, capacity })
    }

    /// Capacity the cursor was created with.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes still available before the capacity is reached.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.buf.len()
    }

    /// Bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the cursor and returns the written bytes.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    fn ensure(&self, additional: usize) -> Result<(), BoxError> {
        if additional > self.remaining() {
            return Err(BoxError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Appends a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::CapacityExceeded`] if the cursor is full.
    pub fn push(&mut self, byte: u8) -> Result<(), BoxError> {
        self.ensure(1)?;
        self.buf.push(byte);
        Ok(())
    }

    /// Appends `bytes` verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::CapacityExceeded`] if `bytes` does not fit.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> Result<(), BoxError> {
        self.ensure(bytes.len())?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Appends `count` copies of `byte`.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::CapacityExceeded`] if the run does not fit.
    pub fn fill(&mut self, byte: u8, count: usize) -> Result<(), BoxError> {
        self.ensure(count)?;
        self.buf.resize(self.buf.len() + count, byte);
        Ok(())
    }
}

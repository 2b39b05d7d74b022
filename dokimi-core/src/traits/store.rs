//! Persistent byte store trait

/// Errors reported by byte store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// The device did not acknowledge an address or data phase
    NoAcknowledge,
    /// The readiness poll exhausted its attempt budget
    Timeout,
}

/// Trait for single-byte-addressable persistent storage
///
/// The device needs physical settling time after a write; callers must
/// let [`wait_ready`](ByteStore::wait_ready) run to completion before the
/// next operation touches the store.
pub trait ByteStore {
    /// Read one byte
    fn read_byte(&mut self, address: u16) -> Result<u8, StoreError>;

    /// Write one byte
    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), StoreError>;

    /// Block until the store can accept the next operation
    ///
    /// Returns [`StoreError::Timeout`] when the implementation's attempt
    /// budget runs out before the device reports ready. Implementations
    /// configured without a budget block indefinitely and only ever
    /// return `Ok`.
    fn wait_ready(&mut self) -> Result<(), StoreError>;
}

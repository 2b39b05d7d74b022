//! Shared bus transport trait

/// Direction of a bus transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusDirection {
    /// Controller sends to the device
    Write,
    /// Controller receives from the device
    Read,
}

/// Trait for the shared addressed bus
///
/// The bus follows an explicit lock discipline: every
/// [`begin_transaction`](BusTransport::begin_transaction) must be paired
/// with an [`end_transaction`](BusTransport::end_transaction), on failure
/// paths too, so a dead device can never leave the bus held.
pub trait BusTransport {
    /// Address a device and open a transaction
    ///
    /// Returns `false` when the device does not acknowledge (absent or
    /// busy). The caller must still end the transaction.
    fn begin_transaction(&mut self, address: u8, direction: BusDirection) -> bool;

    /// Close the current transaction and release the bus
    fn end_transaction(&mut self);
}

//! I2C bus abstractions
//!
//! Provides a byte-level I2C master contract. Unlike transaction-oriented
//! APIs, transfers are built from explicit `start`/`stop` brackets with
//! individual byte moves in between. Devices like serial EEPROMs need this
//! granularity: acknowledgment polling after a write is a bare address
//! phase with no data, and a random read changes direction mid-transaction
//! with a repeated start.

/// Transfer direction encoded in the address phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cDirection {
    /// Master writes to the device
    Write,
    /// Master reads from the device
    Read,
}

impl I2cDirection {
    /// The R/W bit carried in the low bit of the address byte
    pub const fn bit(self) -> u8 {
        match self {
            I2cDirection::Write => 0,
            I2cDirection::Read => 1,
        }
    }
}

/// Error type for I2C master operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cError {
    /// The addressed device (or a data byte) was not acknowledged
    NoAcknowledge,
}

/// I2C bus master
///
/// A transaction is bracketed by [`start`](I2cBus::start) and
/// [`stop`](I2cBus::stop). A repeated start is expressed by calling
/// `start` again without an intervening `stop`. Callers must issue `stop`
/// on every path, including after an error, so the bus is never left held.
pub trait I2cBus {
    /// Error type for bus operations
    type Error;

    /// Issue a (repeated) START and send the address phase
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `direction` - R/W bit for this transfer
    ///
    /// Returns an error if the device does not acknowledge.
    fn start(&mut self, address: u8, direction: I2cDirection) -> Result<(), Self::Error>;

    /// Send one data byte; errors if the device does not acknowledge
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Clock in one data byte
    ///
    /// `ack` selects the master's response: `true` acknowledges (more
    /// bytes will be read), `false` ends the read sequence.
    fn read_byte(&mut self, ack: bool) -> u8;

    /// Issue a STOP and release the bus
    fn stop(&mut self);
}

/// I2C configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000, // 100kHz standard mode
        }
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Half of one SCL period, in nanoseconds
    ///
    /// Bit-banged implementations hold each clock phase this long.
    pub const fn half_period_ns(&self) -> u32 {
        500_000_000 / self.frequency
    }
}

//! 24Cxx serial EEPROM byte store
//!
//! Implements the byte store contract over the byte-level I2C master.
//! Random reads send the two-byte cell address and then flip direction
//! with a repeated start; write settling is detected by acknowledgment
//! polling. The bus is released on every path, error paths included.

use dokimi_core::config::StoreConfig;
use dokimi_core::traits::{ByteStore, StoreError};
use dokimi_hal::{I2cBus, I2cDirection};

/// 24C32/24C64 EEPROM driver
pub struct Eeprom24c<B> {
    bus: B,
    config: StoreConfig,
}

impl<B: I2cBus> Eeprom24c<B> {
    pub fn new(bus: B, config: StoreConfig) -> Self {
        Self { bus, config }
    }

    /// Device bus address from the configuration
    pub fn bus_address(&self) -> u8 {
        self.config.bus_address
    }

    /// Address the device in write mode and send the cell address
    fn select(&mut self, address: u16) -> Result<(), StoreError> {
        self.bus
            .start(self.config.bus_address, I2cDirection::Write)
            .map_err(|_| StoreError::NoAcknowledge)?;
        self.bus
            .write_byte((address >> 8) as u8)
            .map_err(|_| StoreError::NoAcknowledge)?;
        self.bus
            .write_byte(address as u8)
            .map_err(|_| StoreError::NoAcknowledge)?;
        Ok(())
    }

    fn try_read(&mut self, address: u16) -> Result<u8, StoreError> {
        self.select(address)?;
        self.bus
            .start(self.config.bus_address, I2cDirection::Read)
            .map_err(|_| StoreError::NoAcknowledge)?;
        Ok(self.bus.read_byte(false))
    }

    fn try_write(&mut self, address: u16, value: u8) -> Result<(), StoreError> {
        self.select(address)?;
        self.bus
            .write_byte(value)
            .map_err(|_| StoreError::NoAcknowledge)
    }
}

impl<B: I2cBus> ByteStore for Eeprom24c<B> {
    fn read_byte(&mut self, address: u16) -> Result<u8, StoreError> {
        let result = self.try_read(address);
        self.bus.stop();
        result
    }

    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), StoreError> {
        let result = self.try_write(address, value);
        self.bus.stop();
        result
    }

    /// Acknowledgment polling
    ///
    /// While the internal write cycle runs, the device ignores its
    /// address. Each poll is a bare address phase; the first
    /// acknowledgment means the device is ready again. The configured
    /// attempt budget bounds the poll; without one it spins until the
    /// device answers.
    fn wait_ready(&mut self) -> Result<(), StoreError> {
        let mut attempts: u32 = 0;
        loop {
            let acked = self
                .bus
                .start(self.config.bus_address, I2cDirection::Write)
                .is_ok();
            self.bus.stop();
            if acked {
                return Ok(());
            }
            attempts = attempts.wrapping_add(1);
            if let Some(budget) = self.config.ready_poll_budget {
                if attempts >= budget {
                    return Err(StoreError::Timeout);
                }
            }
        }
    }
}

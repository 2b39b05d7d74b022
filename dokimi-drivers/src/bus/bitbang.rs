//! Bit-banged I2C master
//!
//! Drives SCL push-pull and SDA open-drain style: low means driven, high
//! means released for the device (or the pull-up) to set the level.
//! Clock stretching is not honored; no device on the reference bus
//! stretches.

use dokimi_hal::{I2cBus, I2cConfig, I2cDirection, I2cError, IoPin, OutputPin};
use embedded_hal::delay::DelayNs;

/// GPIO bit-banged I2C master
pub struct BitBangI2c<SCL, SDA, D> {
    scl: SCL,
    sda: SDA,
    delay: D,
    half_period_ns: u32,
}

impl<SCL, SDA, D> BitBangI2c<SCL, SDA, D>
where
    SCL: OutputPin,
    SDA: IoPin,
    D: DelayNs,
{
    /// Create a master and leave both lines released (bus idle)
    pub fn new(scl: SCL, sda: SDA, delay: D, config: I2cConfig) -> Self {
        let mut bus = Self {
            scl,
            sda,
            delay,
            half_period_ns: config.half_period_ns(),
        };
        bus.sda.set_high();
        bus.scl.set_high();
        bus.settle();
        bus
    }

    fn settle(&mut self) {
        self.delay.delay_ns(self.half_period_ns);
    }

    /// START: SDA falls while SCL is high
    ///
    /// Entered from idle or from a low clock (repeated start); both
    /// lines are raised first, which is a no-op in the idle case.
    fn start_condition(&mut self) {
        self.sda.set_high();
        self.settle();
        self.scl.set_high();
        self.settle();
        self.sda.set_low();
        self.settle();
        self.scl.set_low();
        self.settle();
    }

    /// STOP: SDA rises while SCL is high
    fn stop_condition(&mut self) {
        self.sda.set_low();
        self.settle();
        self.scl.set_high();
        self.settle();
        self.sda.set_high();
        self.settle();
    }

    /// Clock out one byte MSB first, then sample the acknowledge bit
    fn transfer_byte(&mut self, byte: u8) -> Result<(), I2cError> {
        for bit in (0..8).rev() {
            self.sda.set_state(byte & (1 << bit) != 0);
            self.settle();
            self.scl.set_high();
            self.settle();
            self.scl.set_low();
        }
        // Ninth clock: release SDA; the device pulls it low to ack
        self.sda.set_high();
        self.settle();
        self.scl.set_high();
        self.settle();
        let acked = self.sda.is_low();
        self.scl.set_low();
        self.settle();
        if acked {
            Ok(())
        } else {
            Err(I2cError::NoAcknowledge)
        }
    }
}

impl<SCL, SDA, D> I2cBus for BitBangI2c<SCL, SDA, D>
where
    SCL: OutputPin,
    SDA: IoPin,
    D: DelayNs,
{
    type Error = I2cError;

    fn start(&mut self, address: u8, direction: I2cDirection) -> Result<(), I2cError> {
        self.start_condition();
        self.transfer_byte((address << 1) | direction.bit())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), I2cError> {
        self.transfer_byte(byte)
    }

    fn read_byte(&mut self, ack: bool) -> u8 {
        let mut byte = 0;
        // Release the data line for the device to drive
        self.sda.set_high();
        for _ in 0..8 {
            self.settle();
            self.scl.set_high();
            self.settle();
            byte = (byte << 1) | u8::from(self.sda.is_high());
            self.scl.set_low();
        }
        // Ninth clock: master drives the acknowledge (low = continue)
        self.sda.set_state(!ack);
        self.settle();
        self.scl.set_high();
        self.settle();
        self.scl.set_low();
        self.sda.set_high();
        self.settle();
        byte
    }

    fn stop(&mut self) {
        self.stop_condition();
    }
}

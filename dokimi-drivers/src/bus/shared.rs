//! Bus sharing cell
//!
//! The probe adapter and the EEPROM driver both sit on the one physical
//! I2C bus. [`SharedI2c`] hands out lightweight handles over a
//! `RefCell`; a handle borrows the bus only for the duration of a single
//! byte-level operation. The demo is single-threaded and transactions
//! never nest, so the borrows cannot overlap.

use core::cell::RefCell;

use dokimi_hal::{I2cBus, I2cDirection};

/// Cloneable handle to a shared I2C master
pub struct SharedI2c<'a, B> {
    bus: &'a RefCell<B>,
}

impl<'a, B> SharedI2c<'a, B> {
    pub fn new(bus: &'a RefCell<B>) -> Self {
        Self { bus }
    }
}

impl<'a, B> Clone for SharedI2c<'a, B> {
    fn clone(&self) -> Self {
        Self { bus: self.bus }
    }
}

impl<'a, B: I2cBus> I2cBus for SharedI2c<'a, B> {
    type Error = B::Error;

    fn start(&mut self, address: u8, direction: I2cDirection) -> Result<(), B::Error> {
        self.bus.borrow_mut().start(address, direction)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), B::Error> {
        self.bus.borrow_mut().write_byte(byte)
    }

    fn read_byte(&mut self, ack: bool) -> u8 {
        self.bus.borrow_mut().read_byte(ack)
    }

    fn stop(&mut self) {
        self.bus.borrow_mut().stop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    struct CountingBus {
        starts: usize,
        stops: usize,
        written: Vec<u8, 16>,
    }

    impl I2cBus for CountingBus {
        type Error = ();

        fn start(&mut self, _address: u8, _direction: I2cDirection) -> Result<(), ()> {
            self.starts += 1;
            Ok(())
        }

        fn write_byte(&mut self, byte: u8) -> Result<(), ()> {
            self.written.push(byte).unwrap();
            Ok(())
        }

        fn read_byte(&mut self, _ack: bool) -> u8 {
            0
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    #[test]
    fn test_two_handles_reach_the_same_bus() {
        let cell = RefCell::new(CountingBus {
            starts: 0,
            stops: 0,
            written: Vec::new(),
        });

        let mut first = SharedI2c::new(&cell);
        let mut second = first.clone();

        first.start(0x50, I2cDirection::Write).unwrap();
        first.write_byte(0x01).unwrap();
        first.stop();
        second.start(0x3C, I2cDirection::Read).unwrap();
        second.stop();

        let bus = cell.borrow();
        assert_eq!(bus.starts, 2);
        assert_eq!(bus.stops, 2);
        assert_eq!(bus.written.as_slice(), &[0x01]);
    }
}

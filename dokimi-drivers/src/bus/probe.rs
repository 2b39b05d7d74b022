//! Bus transport adapter for the self-test
//!
//! Adapts a byte-level I2C master to the begin/end transaction contract
//! the bus check drives: a begin is a bare start plus address phase, an
//! end is a stop. Nothing is transferred in between; the probe exists
//! only to see whether the addressed device answers.

use dokimi_core::traits::{BusDirection, BusTransport};
use dokimi_hal::{I2cBus, I2cDirection};

/// Transaction-bracket adapter over an I2C master
pub struct BusProbe<B> {
    bus: B,
}

impl<B: I2cBus> BusProbe<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }
}

fn direction(dir: BusDirection) -> I2cDirection {
    match dir {
        BusDirection::Write => I2cDirection::Write,
        BusDirection::Read => I2cDirection::Read,
    }
}

impl<B: I2cBus> BusTransport for BusProbe<B> {
    fn begin_transaction(&mut self, address: u8, dir: BusDirection) -> bool {
        self.bus.start(address, direction(dir)).is_ok()
    }

    fn end_transaction(&mut self) {
        self.bus.stop();
    }
}

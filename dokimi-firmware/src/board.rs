//! Adapters wiring embassy-rp peripherals to the dokimi-hal traits
//!
//! Push-pull lines wrap [`Output`]. The bidirectional lines (I2C SDA and
//! the TM1638 data pin) wrap [`Flex`] as open-drain: `set_low` drives the
//! line, `set_high` releases it to the pull-up so a device can answer.

use dokimi_hal::{InputPin, OutputPin, UartTx};
use embassy_rp::gpio::{Flex, Output, Pull};
use embassy_rp::uart::{Blocking, UartTx as RpUartTx};

/// Push-pull output pin
pub struct PushPull {
    pin: Output<'static>,
}

impl PushPull {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputPin for PushPull {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

/// Open-drain line over a flexible pin with the internal pull-up
pub struct OpenDrain {
    pin: Flex<'static>,
}

impl OpenDrain {
    pub fn new(mut pin: Flex<'static>) -> Self {
        pin.set_pull(Pull::Up);
        // Prime the output register low so set_as_output always pulls
        // the line down; released otherwise.
        pin.set_low();
        pin.set_as_input();
        Self { pin }
    }
}

impl OutputPin for OpenDrain {
    fn set_high(&mut self) {
        self.pin.set_as_input();
    }

    fn set_low(&mut self) {
        self.pin.set_as_output();
    }
}

impl InputPin for OpenDrain {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Blocking console transmitter over a hardware UART
pub struct ConsoleUart {
    tx: RpUartTx<'static, Blocking>,
}

impl ConsoleUart {
    pub fn new(tx: RpUartTx<'static, Blocking>) -> Self {
        Self { tx }
    }
}

impl UartTx for ConsoleUart {
    type Error = embassy_rp::uart::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush()
    }
}

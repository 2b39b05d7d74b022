//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the peripheral traits
//! defined in dokimi-core for the hardware on the demo board:
//!
//! - TM1638 LED&Key front panel (7-segment digits plus key scan)
//! - 24C32/24C64 serial EEPROM byte store
//! - Bit-banged I2C master with sharing and probing adapters
//! - Serial console over a blocking UART transmitter
//!
//! All drivers are generic over the dokimi-hal traits and are tested on
//! the host against mock pins and buses.

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod console;
pub mod eeprom24c;
pub mod tm1638;

pub use bus::{BitBangI2c, BusProbe, SharedI2c};
pub use console::SerialConsole;
pub use eeprom24c::Eeprom24c;
pub use tm1638::Tm1638;

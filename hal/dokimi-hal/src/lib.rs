//! Dokimi Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that the peripheral
//! drivers build on. The firmware implements them with thin adapters over
//! the chip HAL, which keeps the drivers (and everything above them)
//! host-testable against mock pins and buses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers (dokimi-drivers)               │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dokimi-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Board wiring (dokimi-firmware)         │
//! │  embassy-rp pin and UART adapters       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::IoPin`] - Digital I/O
//! - [`uart::UartTx`] - Serial transmit
//! - [`i2c::I2cBus`] - Byte-level I2C master operations

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, IoPin, OutputPin};
pub use i2c::{I2cBus, I2cConfig, I2cDirection, I2cError};
pub use uart::UartTx;

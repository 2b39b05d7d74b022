//! Dokimi - Board Self-Test & Demo Firmware
//!
//! Firmware binary for RP2040-based demo boards: run the power-on
//! self-test against the front panel, console, bus, and EEPROM, then
//! hand the board to the interactive key-capture loop.
//!
//! Named after the Greek "dokime" meaning "trial, proof" - what this
//! firmware puts the board through at every power-on.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Flex, Level, Output};
use embassy_rp::uart::{Config as UartConfig, UartTx};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use dokimi_core::capture::CaptureLoop;
use dokimi_core::config::BoardConfig;
use dokimi_core::harness;
use dokimi_drivers::{BitBangI2c, BusProbe, Eeprom24c, SerialConsole, SharedI2c, Tm1638};
use dokimi_hal::I2cConfig;

use crate::board::{ConsoleUart, OpenDrain, PushPull};

mod board;

/// Idle samples between heartbeat characters
///
/// The RP2040 samples the keypad far faster than the reference board,
/// so the period is raised to keep the dots readable.
const HEARTBEAT_PERIOD: u32 = 4096;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Dokimi firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());

    let mut config = BoardConfig::default();
    config.heartbeat_period = HEARTBEAT_PERIOD;

    // Console on UART0 TX (GPIO0), 115200 baud default
    let uart = UartTx::new_blocking(p.UART0, p.PIN_0, UartConfig::default());
    let mut console = SerialConsole::new(ConsoleUart::new(uart));

    // TM1638 front panel: STB=GPIO2, CLK=GPIO3, DIO=GPIO4
    let stb = PushPull::new(Output::new(p.PIN_2, Level::High));
    let clk = PushPull::new(Output::new(p.PIN_3, Level::High));
    let dio = OpenDrain::new(Flex::new(p.PIN_4));
    let mut panel = Tm1638::new(stb, clk, dio, Delay);

    // Bit-banged I2C to the EEPROM: SCL=GPIO6, SDA=GPIO7
    let scl = PushPull::new(Output::new(p.PIN_6, Level::High));
    let sda = OpenDrain::new(Flex::new(p.PIN_7));
    let i2c = RefCell::new(BitBangI2c::new(scl, sda, Delay, I2cConfig::STANDARD));

    let mut bus = BusProbe::new(SharedI2c::new(&i2c));
    let mut store = Eeprom24c::new(SharedI2c::new(&i2c), config.store);

    info!("Peripherals initialized");

    let result = harness::boot(&mut console, &mut panel, &mut bus, &mut store, &config);
    info!("Self-test passed: {}", result.is_pass());

    // Leave the verdict on the panel long enough to read
    Timer::after_secs(2).await;

    let mut capture = CaptureLoop::new(&mut console, &mut panel, &mut store, &config);
    capture.announce();
    info!("Entering capture loop");
    capture.run()
}

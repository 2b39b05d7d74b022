//! TM1638 LED&Key front panel driver
//!
//! Three-wire serial interface: strobe and clock outputs plus a
//! bidirectional data line. The panel carries eight 7-segment digits,
//! eight LEDs, and eight keys; this driver renders the text/number
//! surface and scans the keys. Bytes move LSB first in both directions.

use dokimi_core::traits::{KeyEvent, Panel, PANEL_TEXT_LEN};
use dokimi_hal::{IoPin, OutputPin};
use embedded_hal::delay::DelayNs;

/// TM1638 commands
mod cmd {
    /// Data command: write display registers, auto-increment address
    pub const WRITE_AUTO: u8 = 0x40;
    /// Data command: read the key scan matrix
    pub const READ_KEYS: u8 = 0x42;
    /// Address command: select display register 0
    pub const SET_ADDRESS: u8 = 0xC0;
    /// Display control: on, brightness in the low three bits
    pub const DISPLAY_ON: u8 = 0x88;
}

/// Display RAM size: digit bytes interleaved with LED bytes
const DISPLAY_REGISTERS: usize = 16;

/// Serial pacing between line transitions
const BIT_DELAY_US: u32 = 1;

/// TM1638 LED&Key driver
///
/// `STB` and `CLK` are plain outputs; `DIO` must be able to release the
/// line so the device can drive the key scan reply.
pub struct Tm1638<STB, CLK, DIO, D> {
    stb: STB,
    clk: CLK,
    dio: DIO,
    delay: D,
    brightness: u8,
}

impl<STB, CLK, DIO, D> Tm1638<STB, CLK, DIO, D>
where
    STB: OutputPin,
    CLK: OutputPin,
    DIO: IoPin,
    D: DelayNs,
{
    /// Create a new driver at full brightness
    pub fn new(stb: STB, clk: CLK, dio: DIO, delay: D) -> Self {
        Self {
            stb,
            clk,
            dio,
            delay,
            brightness: 7,
        }
    }

    /// Set display brightness (0-7), applied on the next display write
    pub fn set_brightness(&mut self, level: u8) {
        self.brightness = level & 0x07;
    }

    fn pace(&mut self) {
        self.delay.delay_us(BIT_DELAY_US);
    }

    fn begin(&mut self) {
        self.stb.set_low();
        self.pace();
    }

    fn end(&mut self) {
        self.stb.set_high();
        self.pace();
    }

    /// Shift one byte out, LSB first
    fn shift_out(&mut self, byte: u8) {
        for bit in 0..8 {
            self.clk.set_low();
            self.dio.set_state(byte & (1 << bit) != 0);
            self.pace();
            self.clk.set_high();
            self.pace();
        }
    }

    /// Shift one byte in, LSB first; the data line must be released
    fn shift_in(&mut self) -> u8 {
        let mut byte = 0;
        for bit in 0..8 {
            self.clk.set_low();
            self.pace();
            self.clk.set_high();
            if self.dio.is_high() {
                byte |= 1 << bit;
            }
            self.pace();
        }
        byte
    }

    fn command(&mut self, value: u8) {
        self.begin();
        self.shift_out(value);
        self.end();
    }

    /// Write the full display RAM in one auto-increment burst
    fn write_display(&mut self, registers: &[u8; DISPLAY_REGISTERS]) {
        self.command(cmd::WRITE_AUTO);
        self.begin();
        self.shift_out(cmd::SET_ADDRESS);
        for &value in registers {
            self.shift_out(value);
        }
        self.end();
    }

    /// Read the four key scan bytes
    fn read_scan(&mut self) -> [u8; 4] {
        self.begin();
        self.shift_out(cmd::READ_KEYS);
        // Release the data line so the device can drive the reply
        self.dio.set_high();
        self.pace();
        let mut scan = [0u8; 4];
        for byte in scan.iter_mut() {
            *byte = self.shift_in();
        }
        self.end();
        scan
    }
}

impl<STB, CLK, DIO, D> Panel for Tm1638<STB, CLK, DIO, D>
where
    STB: OutputPin,
    CLK: OutputPin,
    DIO: IoPin,
    D: DelayNs,
{
    fn init(&mut self) {
        self.stb.set_high();
        self.clk.set_high();
        self.dio.set_high();
        self.pace();
        self.write_display(&[0; DISPLAY_REGISTERS]);
        self.command(cmd::DISPLAY_ON | self.brightness);
    }

    fn show_text(&mut self, text: &str) {
        let mut registers = [0u8; DISPLAY_REGISTERS];
        for (i, ch) in text.chars().take(PANEL_TEXT_LEN).enumerate() {
            registers[2 * i] = glyph(ch);
        }
        self.write_display(&registers);
    }

    fn show_number(&mut self, value: u32) {
        let mut registers = [0u8; DISPLAY_REGISTERS];
        for (i, digit) in digits(value).into_iter().enumerate() {
            if let Some(d) = digit {
                registers[2 * i] = glyph((b'0' + d) as char);
            }
        }
        self.write_display(&registers);
    }

    fn read_key(&mut self) -> KeyEvent {
        decode_scan(self.read_scan())
    }
}

/// 7-segment pattern for one character; unknown characters render blank
fn glyph(ch: char) -> u8 {
    match ch {
        '0' => 0x3F,
        '1' => 0x06,
        '2' => 0x5B,
        '3' => 0x4F,
        '4' => 0x66,
        '5' => 0x6D,
        '6' => 0x7D,
        '7' => 0x07,
        '8' => 0x7F,
        '9' => 0x6F,
        'A' => 0x77,
        'B' | 'b' => 0x7C,
        'C' => 0x39,
        'D' | 'd' => 0x5E,
        'E' => 0x79,
        'F' => 0x71,
        'G' => 0x3D,
        'H' => 0x76,
        'I' => 0x06,
        'K' => 0x75,
        'L' => 0x38,
        'N' | 'n' => 0x54,
        'O' => 0x3F,
        'P' => 0x73,
        'R' | 'r' => 0x50,
        'S' => 0x6D,
        'T' | 't' => 0x78,
        'U' => 0x3E,
        'Y' => 0x6E,
        '-' => 0x40,
        _ => 0x00,
    }
}

/// Decimal digits of `value`, right-aligned across the eight positions
///
/// Values wider than eight digits keep their least significant eight.
fn digits(value: u32) -> [Option<u8>; PANEL_TEXT_LEN] {
    let mut out = [None; PANEL_TEXT_LEN];
    let mut rest = value;
    let mut pos = PANEL_TEXT_LEN;
    loop {
        pos -= 1;
        out[pos] = Some((rest % 10) as u8);
        rest /= 10;
        if rest == 0 || pos == 0 {
            break;
        }
    }
    out
}

/// Map the four scan bytes to the first pressed key
///
/// Scan byte `i` carries S(i+1) in bit 0 and S(i+5) in bit 4; key codes
/// are 0-7. With nothing pressed the sample is the no-key sentinel.
fn decode_scan(scan: [u8; 4]) -> KeyEvent {
    for (i, byte) in scan.iter().enumerate() {
        if byte & 0x01 != 0 {
            return KeyEvent::Pressed(i as u8);
        }
        if byte & 0x10 != 0 {
            return KeyEvent::Pressed(i as u8 + 4);
        }
    }
    KeyEvent::NoKey
}

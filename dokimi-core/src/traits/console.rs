//! Serial console output trait

/// Line terminator used on the console wire
pub const CRLF: &str = "\r\n";

/// Uppercase hex digits used for byte echo
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Trait for one-way diagnostic console output
///
/// The console is fire-and-forget: implementations swallow transmit
/// errors rather than surfacing them, since every caller treats output
/// as best-effort tracing. All text the firmware emits (self-test
/// report, key echo, heartbeat) goes through this trait.
pub trait ConsoleOut {
    /// Write a single raw byte
    fn write_byte(&mut self, byte: u8);

    /// Write a string
    ///
    /// Implementations with a bulk transmit path should override this.
    fn write_str(&mut self, s: &str) {
        for &byte in s.as_bytes() {
            self.write_byte(byte);
        }
    }

    /// Write a string followed by CRLF
    fn write_line(&mut self, s: &str) {
        self.write_str(s);
        self.write_str(CRLF);
    }

    /// Write a byte as two uppercase hexadecimal characters
    fn write_hex_byte(&mut self, value: u8) {
        self.write_byte(HEX_DIGITS[(value >> 4) as usize]);
        self.write_byte(HEX_DIGITS[(value & 0x0F) as usize]);
    }
}

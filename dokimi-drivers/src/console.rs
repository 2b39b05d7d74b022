//! Serial console over a blocking UART transmitter

use dokimi_core::traits::ConsoleOut;
use dokimi_hal::UartTx;

/// Console adapter turning a fallible UART into fire-and-forget output
///
/// Transmit errors are dropped. The console is a best-effort trace; a
/// broken wire must not take the board down with it.
pub struct SerialConsole<T> {
    tx: T,
}

impl<T: UartTx> SerialConsole<T> {
    pub fn new(tx: T) -> Self {
        Self { tx }
    }
}

impl<T: UartTx> ConsoleOut for SerialConsole<T> {
    fn write_byte(&mut self, byte: u8) {
        let _ = self.tx.write_blocking(&[byte]);
    }

    fn write_str(&mut self, s: &str) {
        let _ = self.tx.write_blocking(s.as_bytes());
    }
}

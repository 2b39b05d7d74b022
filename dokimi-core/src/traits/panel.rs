//! Front panel trait: 7-segment text area plus a key surface

/// Raw sample value meaning "no key currently asserted"
pub const NO_KEY: u8 = 0xFF;

/// Fixed width of the panel text area, in characters
pub const PANEL_TEXT_LEN: usize = 8;

/// One sampled key state from the panel
///
/// Keeping the sentinel as its own variant means a key code and "no
/// key" can never be confused downstream; only genuine codes reach the
/// persistence path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    /// Nothing pressed
    NoKey,
    /// A key is held down; the payload is its code (0x00..=0xFE)
    Pressed(u8),
}

impl KeyEvent {
    /// Decode a raw sample byte
    pub const fn from_raw(raw: u8) -> Self {
        if raw == NO_KEY {
            KeyEvent::NoKey
        } else {
            KeyEvent::Pressed(raw)
        }
    }

    /// Re-encode as the raw wire value
    pub const fn raw(self) -> u8 {
        match self {
            KeyEvent::NoKey => NO_KEY,
            KeyEvent::Pressed(code) => code,
        }
    }

    /// True when a key is held
    pub const fn is_pressed(self) -> bool {
        matches!(self, KeyEvent::Pressed(_))
    }
}

/// Trait for the board's front panel
///
/// The panel is write-only hardware with no readback path, so the
/// display methods are infallible and success is assumed. The key
/// surface is the only input on the board.
pub trait Panel {
    /// Bring the panel up: clear everything, display on
    fn init(&mut self);

    /// Show a fixed-width text
    ///
    /// Text longer than [`PANEL_TEXT_LEN`] is truncated; shorter text
    /// leaves the remaining positions blank.
    fn show_text(&mut self, text: &str);

    /// Show an unsigned number, decimal, right-aligned
    fn show_number(&mut self, value: u32);

    /// Sample the key surface without blocking
    fn read_key(&mut self) -> KeyEvent;
}

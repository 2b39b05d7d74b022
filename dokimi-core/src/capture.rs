//! Interactive key-capture loop
//!
//! The steady state of the firmware after self-test: a state machine
//! that samples the panel keys, echoes each press to the console and the
//! panel, persists the key code to the byte store, and holds until the
//! key is released. The machine advances exactly one transition per
//! [`step`](CaptureLoop::step) call so tests can drive it against
//! scripted key sequences; [`run`](CaptureLoop::run) just steps forever.

use crate::config::BoardConfig;
use crate::traits::console::CRLF;
use crate::traits::{ByteStore, ConsoleOut, KeyEvent, Panel, StoreError};

/// Console prefix for each captured key
pub const KEY_ECHO_PREFIX: &str = "Key: ";
/// Panel text shown while the capture loop owns the board
pub const CAPTURE_TEXT: &str = "KEYS    ";
/// Console prompt printed when the capture loop takes over
pub const CAPTURE_PROMPT: &str = "Press keys on the panel...";
/// Liveness character emitted while idle
pub const HEARTBEAT: u8 = b'.';

/// Capture loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureState {
    /// Sampling for a new key press
    Idle,
    /// A press was sampled; echo and persist it this transition
    KeyDown(u8),
    /// Holding until the pressed key reads as released
    WaitRelease,
}

/// Interactive capture loop over console, panel, and store
pub struct CaptureLoop<'a, C, P, S> {
    console: &'a mut C,
    panel: &'a mut P,
    store: &'a mut S,
    config: &'a BoardConfig,
    state: CaptureState,
    /// Idle samples since the last heartbeat; owned by the loop
    ticks: u32,
}

impl<'a, C, P, S> CaptureLoop<'a, C, P, S>
where
    C: ConsoleOut,
    P: Panel,
    S: ByteStore,
{
    pub fn new(
        console: &'a mut C,
        panel: &'a mut P,
        store: &'a mut S,
        config: &'a BoardConfig,
    ) -> Self {
        Self {
            console,
            panel,
            store,
            config,
            state: CaptureState::Idle,
            ticks: 0,
        }
    }

    /// Current state, for tests and diagnostics
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Announce the capture phase on console and panel
    pub fn announce(&mut self) {
        self.console.write_str(CRLF);
        self.console.write_line(CAPTURE_PROMPT);
        self.panel.show_text(CAPTURE_TEXT);
    }

    /// Advance the state machine by exactly one transition
    pub fn step(&mut self) {
        match self.state {
            CaptureState::Idle => match self.panel.read_key() {
                KeyEvent::NoKey => self.heartbeat_tick(),
                KeyEvent::Pressed(code) => self.state = CaptureState::KeyDown(code),
            },
            CaptureState::KeyDown(code) => {
                // Console echo first, then the panel, then the store
                self.echo(code);
                self.panel.show_number(code as u32);
                self.persist(code);
                self.state = CaptureState::WaitRelease;
            }
            CaptureState::WaitRelease => {
                if self.panel.read_key() == KeyEvent::NoKey {
                    self.state = CaptureState::Idle;
                }
            }
        }
    }

    /// Run forever; the firmware's steady state
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    fn heartbeat_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        if self.ticks >= self.config.heartbeat_period {
            self.console.write_byte(HEARTBEAT);
            self.ticks = 0;
        }
    }

    fn echo(&mut self, code: u8) {
        self.console.write_str(KEY_ECHO_PREFIX);
        self.console.write_hex_byte(code);
        self.console.write_str(CRLF);
    }

    /// Persist the code and let the store settle
    ///
    /// Store faults are reported on the console and dropped; capture
    /// continues regardless.
    fn persist(&mut self, code: u8) {
        match self.store.write_byte(self.config.store.persist_address, code) {
            Ok(()) => match self.store.wait_ready() {
                Ok(()) => {}
                Err(StoreError::Timeout) => self.console.write_line("store timeout"),
                Err(_) => self.console.write_line("store err"),
            },
            Err(_) => self.console.write_line("store err"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{MockConsole, MockPanel, MockStore};

    fn config_with_period(period: u32) -> BoardConfig {
        let mut config = BoardConfig::default();
        config.heartbeat_period = period;
        config
    }

    #[test]
    fn test_key_press_capture_cycle() {
        let mut console = MockConsole::new();
        let mut panel = MockPanel::new();
        let mut store = MockStore::new();
        let config = BoardConfig::default();

        // Key 0x07 held for one extra sample, then released
        panel.script_key(KeyEvent::Pressed(0x07));
        panel.script_key(KeyEvent::Pressed(0x07));
        panel.script_key(KeyEvent::NoKey);

        let mut capture = CaptureLoop::new(&mut console, &mut panel, &mut store, &config);
        assert_eq!(capture.state(), CaptureState::Idle);

        capture.step();
        assert_eq!(capture.state(), CaptureState::KeyDown(0x07));

        capture.step();
        assert_eq!(capture.state(), CaptureState::WaitRelease);

        // Still held
        capture.step();
        assert_eq!(capture.state(), CaptureState::WaitRelease);

        // Released
        capture.step();
        assert_eq!(capture.state(), CaptureState::Idle);

        assert_eq!(console.transcript(), "Key: 07\r\n");
        assert_eq!(panel.numbers.as_slice(), &[7]);
        assert_eq!(store.writes.as_slice(), &[(0x0000, 0x07)]);
        assert_eq!(store.wait_calls, 1);
    }

    #[test]
    fn test_echo_is_uppercase_hex() {
        let mut console = MockConsole::new();
        let mut panel = MockPanel::new();
        let mut store = MockStore::new();
        let config = BoardConfig::default();

        panel.script_key(KeyEvent::Pressed(0xAB));

        let mut capture = CaptureLoop::new(&mut console, &mut panel, &mut store, &config);
        capture.step();
        capture.step();

        assert_eq!(console.transcript(), "Key: AB\r\n");
    }

    fn idle_transcript(period: u32, steps: u32) -> heapless::String<16> {
        let mut console = MockConsole::new();
        let mut panel = MockPanel::new();
        let mut store = MockStore::new();
        let config = config_with_period(period);

        let mut capture = CaptureLoop::new(&mut console, &mut panel, &mut store, &config);
        for _ in 0..steps {
            capture.step();
        }

        let mut out = heapless::String::new();
        out.push_str(console.transcript()).unwrap();
        out
    }

    #[test]
    fn test_heartbeat_waits_a_full_period() {
        assert_eq!(idle_transcript(4, 3).as_str(), "");
    }

    #[test]
    fn test_heartbeat_emits_on_period() {
        assert_eq!(idle_transcript(4, 4).as_str(), ".");
    }

    #[test]
    fn test_heartbeat_counter_restarts_after_emit() {
        assert_eq!(idle_transcript(4, 8).as_str(), "..");
        assert_eq!(idle_transcript(4, 11).as_str(), "..");
        assert_eq!(idle_transcript(4, 12).as_str(), "...");
    }

    #[test]
    fn test_no_heartbeat_while_waiting_for_release() {
        let mut console = MockConsole::new();
        let mut panel = MockPanel::new();
        let mut store = MockStore::new();
        let config = config_with_period(2);

        panel.script_key(KeyEvent::Pressed(0x01));
        for _ in 0..10 {
            panel.script_key(KeyEvent::Pressed(0x01));
        }

        let mut capture = CaptureLoop::new(&mut console, &mut panel, &mut store, &config);
        capture.step(); // Idle -> KeyDown
        capture.step(); // KeyDown -> WaitRelease
        for _ in 0..10 {
            capture.step(); // held down, stays in WaitRelease
        }

        assert_eq!(capture.state(), CaptureState::WaitRelease);
        assert!(!console.transcript().contains('.'));
    }

    #[test]
    fn test_held_key_is_captured_once() {
        let mut console = MockConsole::new();
        let mut panel = MockPanel::new();
        let mut store = MockStore::new();
        let config = BoardConfig::default();

        for _ in 0..6 {
            panel.script_key(KeyEvent::Pressed(0x03));
        }
        panel.script_key(KeyEvent::NoKey);

        let mut capture = CaptureLoop::new(&mut console, &mut panel, &mut store, &config);
        for _ in 0..8 {
            capture.step();
        }

        assert_eq!(capture.state(), CaptureState::Idle);
        assert_eq!(store.writes.len(), 1);
        assert_eq!(console.transcript(), "Key: 03\r\n");
    }

    #[test]
    fn test_no_key_is_never_persisted() {
        let mut console = MockConsole::new();
        let mut panel = MockPanel::new();
        let mut store = MockStore::new();
        let config = config_with_period(u32::MAX);

        panel.script_key(KeyEvent::NoKey);
        panel.script_key(KeyEvent::Pressed(0x02));
        panel.script_key(KeyEvent::NoKey);
        panel.script_key(KeyEvent::NoKey);
        panel.script_key(KeyEvent::Pressed(0x05));
        panel.script_key(KeyEvent::NoKey);

        let mut capture = CaptureLoop::new(&mut console, &mut panel, &mut store, &config);
        for _ in 0..12 {
            capture.step();
        }

        assert_eq!(store.writes.as_slice(), &[(0x0000, 0x02), (0x0000, 0x05)]);
        for &(_, value) in store.writes.iter() {
            assert_ne!(value, 0xFF);
        }
    }

    #[test]
    fn test_store_fault_is_reported_and_non_fatal() {
        let mut console = MockConsole::new();
        let mut panel = MockPanel::new();
        let mut store = MockStore::new();
        store.fail_writes = true;
        let config = BoardConfig::default();

        panel.script_key(KeyEvent::Pressed(0x04));
        panel.script_key(KeyEvent::NoKey);

        let mut capture = CaptureLoop::new(&mut console, &mut panel, &mut store, &config);
        capture.step();
        capture.step();
        assert_eq!(capture.state(), CaptureState::WaitRelease);
        capture.step();
        assert_eq!(capture.state(), CaptureState::Idle);

        assert!(console.transcript().contains("store err"));
    }

    #[test]
    fn test_settle_timeout_is_reported() {
        let mut console = MockConsole::new();
        let mut panel = MockPanel::new();
        let mut store = MockStore::new();
        store.wait_result = Err(StoreError::Timeout);
        let config = BoardConfig::default();

        panel.script_key(KeyEvent::Pressed(0x04));

        let mut capture = CaptureLoop::new(&mut console, &mut panel, &mut store, &config);
        capture.step();
        capture.step();

        assert!(console.transcript().contains("store timeout"));
    }

    #[test]
    fn test_announce_prompt_and_panel_text() {
        let mut console = MockConsole::new();
        let mut panel = MockPanel::new();
        let mut store = MockStore::new();
        let config = BoardConfig::default();

        let mut capture = CaptureLoop::new(&mut console, &mut panel, &mut store, &config);
        capture.announce();

        assert!(console.transcript().contains(CAPTURE_PROMPT));
        assert_eq!(panel.last_text(), CAPTURE_TEXT);
    }
}

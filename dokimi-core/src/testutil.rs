//! Recording mock peripherals shared by the test modules

use heapless::{Deque, String, Vec};

use crate::traits::{
    BusDirection, BusTransport, ByteStore, ConsoleOut, KeyEvent, Panel, StoreError,
};

/// Console mock capturing every byte written
pub struct MockConsole {
    pub out: Vec<u8, 4096>,
}

impl MockConsole {
    pub fn new() -> Self {
        Self { out: Vec::new() }
    }

    /// Captured output as text
    pub fn transcript(&self) -> &str {
        core::str::from_utf8(&self.out).unwrap()
    }
}

impl ConsoleOut for MockConsole {
    fn write_byte(&mut self, byte: u8) {
        self.out.push(byte).unwrap();
    }
}

/// Panel mock recording writes and replaying a scripted key sequence
///
/// `read_key` pops the next scripted sample; once the script runs out it
/// reports `NoKey` forever.
pub struct MockPanel {
    pub init_count: usize,
    pub texts: Vec<String<8>, 8>,
    pub numbers: Vec<u32, 8>,
    pub keys: Deque<KeyEvent, 32>,
}

impl MockPanel {
    pub fn new() -> Self {
        Self {
            init_count: 0,
            texts: Vec::new(),
            numbers: Vec::new(),
            keys: Deque::new(),
        }
    }

    /// Queue one sampled key state
    pub fn script_key(&mut self, event: KeyEvent) {
        self.keys.push_back(event).unwrap();
    }

    /// Most recent text written, or "" if none
    pub fn last_text(&self) -> &str {
        self.texts.last().map(|s| s.as_str()).unwrap_or("")
    }
}

impl Panel for MockPanel {
    fn init(&mut self) {
        self.init_count += 1;
    }

    fn show_text(&mut self, text: &str) {
        let mut copy = String::new();
        copy.push_str(text).unwrap();
        self.texts.push(copy).unwrap();
    }

    fn show_number(&mut self, value: u32) {
        self.numbers.push(value).unwrap();
    }

    fn read_key(&mut self) -> KeyEvent {
        self.keys.pop_front().unwrap_or(KeyEvent::NoKey)
    }
}

/// Bus mock with a programmable acknowledgment response
pub struct MockBus {
    pub ack: bool,
    pub begins: Vec<(u8, BusDirection), 8>,
    pub ends: usize,
}

impl MockBus {
    pub fn new(ack: bool) -> Self {
        Self {
            ack,
            begins: Vec::new(),
            ends: 0,
        }
    }
}

impl BusTransport for MockBus {
    fn begin_transaction(&mut self, address: u8, direction: BusDirection) -> bool {
        self.begins.push((address, direction)).unwrap();
        self.ack
    }

    fn end_transaction(&mut self) {
        self.ends += 1;
    }
}

/// Byte store mock over a small in-memory array with fault injection
///
/// `corrupt_writes` models silent write corruption: the write itself
/// reports success but the cell ends up holding the corrupt value, which
/// is exactly the fault the self-test's verify step exists to catch.
pub struct MockStore {
    pub mem: [u8; 0x200],
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub corrupt_writes: Option<u8>,
    pub wait_result: Result<(), StoreError>,
    pub writes: Vec<(u16, u8), 16>,
    pub wait_calls: usize,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            mem: [0; 0x200],
            fail_reads: false,
            fail_writes: false,
            corrupt_writes: None,
            wait_result: Ok(()),
            writes: Vec::new(),
            wait_calls: 0,
        }
    }

    /// Preload one cell
    pub fn preload(&mut self, address: u16, value: u8) {
        self.mem[address as usize] = value;
    }
}

impl ByteStore for MockStore {
    fn read_byte(&mut self, address: u16) -> Result<u8, StoreError> {
        if self.fail_reads {
            return Err(StoreError::NoAcknowledge);
        }
        Ok(self.mem[address as usize])
    }

    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::NoAcknowledge);
        }
        self.writes.push((address, value)).unwrap();
        self.mem[address as usize] = self.corrupt_writes.unwrap_or(value);
        Ok(())
    }

    fn wait_ready(&mut self) -> Result<(), StoreError> {
        self.wait_calls += 1;
        self.wait_result
    }
}

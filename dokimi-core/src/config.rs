//! Configuration type definitions
//!
//! Every address and tuning value the reference board bakes into its
//! logic lives here as a named value and is supplied to the component
//! constructors. Nothing reads configuration at runtime; a board picks
//! its values at build time.

/// Default attempt budget for the post-write readiness poll
pub const DEFAULT_READY_POLL_BUDGET: u32 = 10_000;

/// Default number of idle samples between heartbeat characters
pub const DEFAULT_HEARTBEAT_PERIOD: u32 = 256;

/// Supported serial EEPROM device kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreDevice {
    /// 24C32, 4 KiB
    Eeprom24c32,
    /// 24C64, 8 KiB
    Eeprom24c64,
}

impl StoreDevice {
    /// Device capacity in bytes
    pub const fn capacity(self) -> u32 {
        match self {
            StoreDevice::Eeprom24c32 => 4096,
            StoreDevice::Eeprom24c64 => 8192,
        }
    }
}

/// Byte store wiring and self-test parameters
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoreConfig {
    /// Device kind on the bus
    pub device: StoreDevice,
    /// 7-bit bus address
    pub bus_address: u8,
    /// Address holding the most recently captured key
    pub persist_address: u16,
    /// Address used by the self-test round trip, kept away from
    /// `persist_address` so testing never corrupts runtime state
    pub probe_address: u16,
    /// Pattern written during the self-test round trip
    pub probe_pattern: u8,
    /// Attempt budget for the readiness poll; `None` polls forever
    pub ready_poll_budget: Option<u32>,
}

impl StoreConfig {
    /// Create a store config with the standard addresses and budget
    pub const fn new(device: StoreDevice, bus_address: u8) -> Self {
        Self {
            device,
            bus_address,
            persist_address: 0x0000,
            probe_address: 0x0100,
            probe_pattern: 0xAB,
            ready_poll_budget: Some(DEFAULT_READY_POLL_BUDGET),
        }
    }
}

impl Default for StoreConfig {
    /// Reference board: 24C64 at bus address 0x50
    fn default() -> Self {
        Self::new(StoreDevice::Eeprom24c64, 0x50)
    }
}

/// Top-level board configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Byte store wiring and self-test parameters
    pub store: StoreConfig,
    /// Idle samples between heartbeat characters in the capture loop
    pub heartbeat_period: u32,
}

impl BoardConfig {
    /// Create a board config with the default heartbeat cadence
    pub const fn new(store: StoreConfig) -> Self {
        Self {
            store,
            heartbeat_period: DEFAULT_HEARTBEAT_PERIOD,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

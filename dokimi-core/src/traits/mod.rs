//! Peripheral abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod bus;
pub mod console;
pub mod panel;
pub mod store;

pub use bus::{BusDirection, BusTransport};
pub use console::ConsoleOut;
pub use panel::{KeyEvent, Panel, NO_KEY, PANEL_TEXT_LEN};
pub use store::{ByteStore, StoreError};

//! I2C bus implementations and adapters
//!
//! - [`BitBangI2c`]: GPIO bit-banged master
//! - [`SharedI2c`]: cell handing one physical bus to several drivers
//! - [`BusProbe`]: bus transport adapter driven by the self-test

pub mod bitbang;
pub mod probe;
pub mod shared;

pub use bitbang::BitBangI2c;
pub use probe::BusProbe;
pub use shared::SharedI2c;

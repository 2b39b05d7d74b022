//! Board-agnostic core logic for the Dokimi self-test firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Peripheral abstraction traits (console, panel, bus, byte store)
//! - Power-on self-test runner and verdict presentation
//! - Interactive key-capture state machine with idle heartbeat
//! - Boot harness tying the pieces together
//! - Configuration type definitions
//!
//! Everything here is host-testable: the tests drive the logic against
//! recording mock peripherals.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod capture;
pub mod config;
pub mod harness;
pub mod selftest;
pub mod traits;

#[cfg(test)]
mod testutil;

//! Power-on self-test: check table, runner, and verdict presentation
//!
//! The runner walks an ordered table of named checks, reports each one
//! on the console, and folds the per-check verdicts into one aggregate
//! by logical AND. A failing check never stops the walk, so every
//! subsystem gets a definitive status line even when an earlier one is
//! dead.

use crate::config::BoardConfig;
use crate::traits::console::CRLF;
use crate::traits::{BusDirection, BusTransport, ByteStore, ConsoleOut, Panel, StoreError};

/// Text shown on the panel by the display check
pub const GREETING_TEXT: &str = "HELLO   ";
/// Panel text for an all-pass verdict
pub const PASS_TEXT: &str = "PASS    ";
/// Panel text for a failed run
pub const FAIL_TEXT: &str = "FAIL    ";

/// Console summary line for an all-pass run
pub const PASS_SUMMARY: &str = "*** ALL TESTS PASSED ***";
/// Console summary line when any check failed
pub const FAIL_SUMMARY: &str = "*** SOME TESTS FAILED ***";

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Console suffix for this verdict
    pub const fn label(self) -> &'static str {
        match self {
            Verdict::Pass => "OK",
            Verdict::Fail => "FAIL",
        }
    }

    pub const fn is_pass(self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub const fn from_bool(pass: bool) -> Self {
        if pass {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

/// Aggregate outcome across a whole check sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AggregateResult {
    Pass,
    Fail,
}

impl AggregateResult {
    /// Fold one verdict into the aggregate (logical AND)
    pub const fn fold(self, verdict: Verdict) -> Self {
        match (self, verdict) {
            (AggregateResult::Pass, Verdict::Pass) => AggregateResult::Pass,
            _ => AggregateResult::Fail,
        }
    }

    pub const fn is_pass(self) -> bool {
        matches!(self, AggregateResult::Pass)
    }
}

/// One named self-test
///
/// Checks are defined at build time and run in table order; the report
/// order on the console is the execution order.
pub struct Check<'a, C, P, B, S> {
    /// Label reported on the console
    pub name: &'static str,
    /// Procedure performing the check
    pub run: fn(&mut SelfTest<'a, C, P, B, S>) -> Verdict,
}

/// Sequential self-test runner over the four peripheral collaborators
pub struct SelfTest<'a, C, P, B, S> {
    console: &'a mut C,
    panel: &'a mut P,
    bus: &'a mut B,
    store: &'a mut S,
    config: &'a BoardConfig,
}

impl<'a, C, P, B, S> SelfTest<'a, C, P, B, S>
where
    C: ConsoleOut,
    P: Panel,
    B: BusTransport,
    S: ByteStore,
{
    pub fn new(
        console: &'a mut C,
        panel: &'a mut P,
        bus: &'a mut B,
        store: &'a mut S,
        config: &'a BoardConfig,
    ) -> Self {
        Self {
            console,
            panel,
            bus,
            store,
            config,
        }
    }

    /// The canonical check table, in report order
    pub fn canonical_checks() -> [Check<'a, C, P, B, S>; 4] {
        [
            Check {
                name: "Display",
                run: Self::check_display,
            },
            Check {
                name: "Console",
                run: Self::check_console,
            },
            Check {
                name: "Bus",
                run: Self::check_bus,
            },
            Check {
                name: "Store",
                run: Self::check_store,
            },
        ]
    }

    /// Run the canonical check table
    pub fn run(&mut self) -> AggregateResult {
        let checks = Self::canonical_checks();
        self.run_checks(&checks)
    }

    /// Run an explicit check sequence, in order
    ///
    /// Each check gets one numbered console line ("1.Display: OK"); its
    /// verdict is folded into the aggregate. There is no retry and no
    /// early exit.
    pub fn run_checks(&mut self, checks: &[Check<'a, C, P, B, S>]) -> AggregateResult {
        let mut aggregate = AggregateResult::Pass;
        for (index, check) in checks.iter().enumerate() {
            self.write_decimal(index as u32 + 1);
            self.console.write_byte(b'.');
            self.console.write_str(check.name);
            self.console.write_byte(b':');
            let verdict = (check.run)(self);
            self.console.write_byte(b' ');
            self.console.write_str(verdict.label());
            self.console.write_str(CRLF);
            aggregate = aggregate.fold(verdict);
        }
        aggregate
    }

    fn write_decimal(&mut self, value: u32) {
        if value >= 10 {
            self.write_decimal(value / 10);
        }
        self.console.write_byte(b'0' + (value % 10) as u8);
    }

    /// Panel bring-up: init plus a greeting text
    ///
    /// The panel has no readback path, so the check cannot verify that
    /// anything actually lit; it passes once the writes are issued.
    fn check_display(&mut self) -> Verdict {
        self.panel.init();
        self.panel.show_text(GREETING_TEXT);
        Verdict::Pass
    }

    /// The console proves itself by carrying this very report
    fn check_console(&mut self) -> Verdict {
        Verdict::Pass
    }

    /// Address the store on the shared bus and expect an acknowledgment
    ///
    /// The transaction is ended on both outcomes so a dead device cannot
    /// leave the bus held.
    fn check_bus(&mut self) -> Verdict {
        let acked = self
            .bus
            .begin_transaction(self.config.store.bus_address, BusDirection::Write);
        self.bus.end_transaction();
        Verdict::from_bool(acked)
    }

    /// Store round trip: read, write pattern, settle, verify
    ///
    /// Fails fast: a read error on the first step skips the write
    /// entirely. Each step reports an indented sub-line; a verification
    /// mismatch reads differently from a read or write error so the two
    /// faults can be told apart on the console.
    fn check_store(&mut self) -> Verdict {
        let cfg = self.config.store;

        self.console.write_str(CRLF);
        self.console.write_str("  read ");
        let initial = match self.store.read_byte(cfg.probe_address) {
            Ok(value) => value,
            Err(_) => {
                self.console.write_str("err");
                return Verdict::Fail;
            }
        };
        self.console.write_str("0x");
        self.console.write_hex_byte(initial);
        self.console.write_str(CRLF);

        self.console.write_str("  write 0x");
        self.console.write_hex_byte(cfg.probe_pattern);
        if self
            .store
            .write_byte(cfg.probe_address, cfg.probe_pattern)
            .is_err()
        {
            self.console.write_str(" err");
            return Verdict::Fail;
        }
        self.console.write_str(CRLF);

        self.console.write_str("  wait ");
        match self.store.wait_ready() {
            Ok(()) => self.console.write_line("ok"),
            Err(StoreError::Timeout) => {
                self.console.write_str("timeout");
                return Verdict::Fail;
            }
            Err(_) => {
                self.console.write_str("err");
                return Verdict::Fail;
            }
        }

        self.console.write_str("  verify ");
        match self.store.read_byte(cfg.probe_address) {
            Ok(value) => {
                self.console.write_str("0x");
                self.console.write_hex_byte(value);
                if value == cfg.probe_pattern {
                    Verdict::Pass
                } else {
                    self.console.write_str(" mismatch");
                    Verdict::Fail
                }
            }
            Err(_) => {
                self.console.write_str("err");
                Verdict::Fail
            }
        }
    }
}

/// Render the aggregate verdict on the panel
///
/// Deterministic mapping with no failure path; the panel is write-only.
pub fn present<P: Panel>(panel: &mut P, result: AggregateResult) {
    let text = if result.is_pass() { PASS_TEXT } else { FAIL_TEXT };
    panel.show_text(text);
}

/// Write the one-line console summary
pub fn summarize<C: ConsoleOut>(console: &mut C, result: AggregateResult) {
    let line = if result.is_pass() {
        PASS_SUMMARY
    } else {
        FAIL_SUMMARY
    };
    console.write_line(line);
}

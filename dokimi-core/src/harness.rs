//! Boot harness: banner, self-test, verdict presentation
//!
//! One call runs the whole power-on sequence against the four peripheral
//! collaborators. The aggregate comes back to the caller so the firmware
//! can log it before handing the board to the capture loop.

use crate::config::BoardConfig;
use crate::selftest::{present, summarize, AggregateResult, SelfTest};
use crate::traits::{BusTransport, ByteStore, ConsoleOut, Panel};

/// Banner printed before the self-test report
pub const BANNER: &str = "\r\n\
================================\r\n\
   Dokimi System Test\r\n\
   Peripheral Bring-Up Demo\r\n\
================================\r\n\
\r\n";

/// Run the power-on sequence: banner, checks, summary, panel verdict
pub fn boot<C, P, B, S>(
    console: &mut C,
    panel: &mut P,
    bus: &mut B,
    store: &mut S,
    config: &BoardConfig,
) -> AggregateResult
where
    C: ConsoleOut,
    P: Panel,
    B: BusTransport,
    S: ByteStore,
{
    console.write_str(BANNER);
    let result = SelfTest::new(console, panel, bus, store, config).run();
    console.write_line("");
    summarize(console, result);
    present(panel, result);
    result
}

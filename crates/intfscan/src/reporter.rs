//! Aggregate reporting for a completed scan.
//!
//! Summary counters go to the log channel; the record table is rendered
//! to the structured output stream as fixed-width comma-separated rows,
//! one per interface, in insertion order. The two channels stay separate
//! so the structured output can be piped and parsed on its own.

use std::io::Write;

use tracing::info;

use intfscan_common::{ScanError, ScanResult};

use crate::parser::ScanContext;
use crate::types::InterfaceRecord;

/// Logs the run summary counters.
pub fn log_summary(ctx: &ScanContext) {
    let counters = ctx.counters();
    info!(
        "scan: {} lines, {} interfaces, {} advisories",
        ctx.line_count(),
        ctx.len(),
        ctx.advisories()
    );
    info!(
        "scan: {} multilink, {} loopback, {} port-channel",
        counters.multilink, counters.loopback, counters.port_channel
    );
}

/// Renders every record to the structured output stream.
pub fn render_table<W: Write>(out: &mut W, ctx: &ScanContext) -> ScanResult<()> {
    for rec in ctx.records() {
        render_row(out, rec)?;
    }
    out.flush().map_err(ScanError::write)
}

/// Renders one record as a fixed-width comma-separated row.
///
/// Columns: name, vrf, address, bandwidth, shutdown marker, then the
/// description double-quoted verbatim (no internal escaping). Empty
/// fields render as padding only.
fn render_row<W: Write>(out: &mut W, rec: &InterfaceRecord) -> ScanResult<()> {
    writeln!(
        out,
        "{:>25},{:>15},{:>15},{:>10},{:>8},\"{}\"",
        rec.name,
        rec.vrf,
        rec.address,
        rec.bandwidth,
        rec.shutdown_marker(),
        rec.description
    )
    .map_err(ScanError::write)
}

//! Interface record scanner for router/switch configuration dumps.
//!
//! This crate implements the `intfscan` tool, which reads flat
//! `interface X` / indented-sub-line configuration text on standard input
//! and prints one fixed-width comma-separated row per interface on
//! standard output.
//!
//! # Responsibilities
//!
//! - Stream lines from the input, in order, in a single pass
//! - Track the interface block currently in scope and extract per-interface
//!   attributes (VRF, address, bandwidth, description, shutdown)
//! - Log line-numbered advisories for malformed `interface` lines and
//!   attribute redefinitions, without stopping the run
//! - Count Multilink/Loopback/Port-channel interface lines
//! - Render the collected table after the stream is exhausted
//!
//! # Channels
//!
//! | Stream | Content |
//! |--------|---------|
//! | stdin  | configuration text, consumed to completion |
//! | stdout | one row per interface record, no header |
//! | stderr | run banners, summaries, advisories (via `tracing`) |
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! let dump = "interface Loopback0\n ip address 192.0.2.1 255.255.255.255\n!\n";
//! let mut out = Vec::new();
//! let ctx = intfscan::run(Cursor::new(dump), &mut out).unwrap();
//!
//! assert_eq!(ctx.len(), 1);
//! assert!(String::from_utf8(out).unwrap().contains("192.0.2.1"));
//! ```

use std::io::{BufRead, Write};

use intfscan_common::{LineSource, ScanResult};

mod parser;
mod reporter;
mod types;

pub use parser::{prefixes, ScanContext};
pub use reporter::{log_summary, render_table};
pub use types::{CategoryCounters, IntfCategory, InterfaceRecord};

/// Runs one full scan: consume the input to completion, log the summary,
/// render the table.
///
/// Returns the final [`ScanContext`] so callers can inspect the table and
/// counters. A read failure (other than clean end-of-stream) aborts the
/// run before any structured output is written.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> ScanResult<ScanContext> {
    let mut ctx = ScanContext::new();

    for line in LineSource::new(input) {
        ctx.consume(&line?);
    }

    log_summary(&ctx);
    render_table(&mut output, &ctx)?;

    Ok(ctx)
}

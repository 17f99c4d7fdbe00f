//! Block-scoped configuration parser.
//!
//! [`ScanContext`] consumes configuration lines one at a time, strictly in
//! arrival order, with no lookahead. It tracks the interface currently in
//! scope and applies per-attribute extraction rules to it. Attribute
//! redefinitions inside a block are logged with their line number and then
//! overwritten (last write wins); malformed `interface` lines are logged
//! and skipped.
//!
//! Records live in an insertion-ordered arena indexed by name, and the
//! "current interface" cursor is an index into that arena. Insertion order
//! is the render order.

use std::collections::HashMap;

use tracing::warn;

use crate::types::{CategoryCounters, InterfaceRecord};

/// Line prefixes recognized by the parser.
///
/// Classification is plain prefix matching on the unindented line text;
/// the leading space on the attribute prefixes is the stanza indentation.
pub mod prefixes {
    /// Opens an interface block.
    pub const INTERFACE: &str = "interface ";

    /// VRF binding attribute.
    pub const VRF: &str = " ip vrf forwarding ";

    /// IP address attribute.
    pub const ADDRESS: &str = " ip address ";

    /// Free-text description attribute.
    pub const DESCRIPTION: &str = " description ";

    /// Bandwidth attribute.
    pub const BANDWIDTH: &str = " bandwidth ";

    /// Administrative shutdown marker (any trailing text ignored).
    pub const SHUTDOWN: &str = " shutdown";

    /// Block separator; closes the open block.
    pub const SEPARATOR: char = '!';

    /// Final token marking an address line as secondary.
    pub const SECONDARY: &str = "secondary";
}

/// Parser state for one scan run.
#[derive(Debug)]
pub struct ScanContext {
    /// Records in insertion order.
    records: Vec<InterfaceRecord>,

    /// Interface name → arena index.
    index: HashMap<String, usize>,

    /// Arena index of the interface currently in scope.
    current: Option<usize>,

    /// Lines consumed so far, blank lines included.
    line_count: u64,

    /// Per-category interface line counters.
    counters: CategoryCounters,

    /// Advisory diagnostics emitted so far.
    advisories: u64,
}

impl ScanContext {
    /// Creates an empty context with no block in scope.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            current: None,
            line_count: 0,
            counters: CategoryCounters::default(),
            advisories: 0,
        }
    }

    /// Consumes one line, already stripped of trailing CR/LF.
    ///
    /// Rules apply in precedence order: block start, then (only with a
    /// block open) block end, then the attribute prefixes. Everything
    /// else is ignored.
    pub fn consume(&mut self, line: &str) {
        self.line_count += 1;

        if line.trim().is_empty() {
            return;
        }

        // Block start takes priority whether or not a block is open.
        if let Some(tail) = line.strip_prefix(prefixes::INTERFACE) {
            self.open_block(tail, line);
            return;
        }

        // Outside any block every other line is ignored silently.
        let Some(curr) = self.current else {
            return;
        };

        if line.starts_with(prefixes::SEPARATOR) {
            self.current = None;
            return;
        }

        if let Some(tail) = line.strip_prefix(prefixes::VRF) {
            self.set_vrf(curr, tail.trim(), line);
        } else if let Some(tail) = line.strip_prefix(prefixes::ADDRESS) {
            self.set_address(curr, tail, line);
        } else if let Some(tail) = line.strip_prefix(prefixes::DESCRIPTION) {
            self.set_description(curr, tail.trim(), line);
        } else if let Some(tail) = line.strip_prefix(prefixes::BANDWIDTH) {
            self.set_bandwidth(curr, tail.trim(), line);
        } else if line.starts_with(prefixes::SHUTDOWN) {
            self.set_shutdown(curr, line);
        }
        // Any other indented line is ignored silently.
    }

    /// Opens (or reopens) the block for the named interface.
    fn open_block(&mut self, tail: &str, line: &str) {
        let line_no = self.line_count;
        let Some(name) = tail.split_whitespace().next() else {
            // Malformed block start: log and leave the cursor untouched.
            self.advise(format_args!("line {line_no}: bad interface name: [{line}]"));
            return;
        };

        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                let idx = self.records.len();
                self.records.push(InterfaceRecord::new(name));
                self.index.insert(name.to_string(), idx);
                idx
            }
        };

        self.current = Some(idx);
        self.counters.count(name);
    }

    fn set_vrf(&mut self, idx: usize, value: &str, line: &str) {
        let line_no = self.line_count;
        if !self.records[idx].vrf.is_empty() {
            let old = self.records[idx].vrf.clone();
            self.advise(format_args!(
                "line {line_no}: vrf redefinition old={old} new={value}: [{line}]"
            ));
        }
        self.records[idx].vrf = value.to_string();
    }

    fn set_address(&mut self, idx: usize, tail: &str, line: &str) {
        // Secondary addresses are not modeled; skip without diagnostic.
        if line.split_whitespace().last() == Some(prefixes::SECONDARY) {
            return;
        }
        let Some(addr) = tail.split_whitespace().next() else {
            return;
        };
        let line_no = self.line_count;
        if !self.records[idx].address.is_empty() {
            let old = self.records[idx].address.clone();
            self.advise(format_args!(
                "line {line_no}: addr redefinition old={old} new={addr}: [{line}]"
            ));
        }
        self.records[idx].address = addr.to_string();
    }

    fn set_description(&mut self, idx: usize, value: &str, line: &str) {
        let line_no = self.line_count;
        if !self.records[idx].description.is_empty() {
            let old = self.records[idx].description.clone();
            self.advise(format_args!(
                "line {line_no}: desc redefinition old={old} new={value}: [{line}]"
            ));
        }
        self.records[idx].description = value.to_string();
    }

    fn set_bandwidth(&mut self, idx: usize, value: &str, line: &str) {
        let line_no = self.line_count;
        if !self.records[idx].bandwidth.is_empty() {
            let old = self.records[idx].bandwidth.clone();
            self.advise(format_args!(
                "line {line_no}: bw redefinition old={old} new={value}: [{line}]"
            ));
        }
        self.records[idx].bandwidth = value.to_string();
    }

    fn set_shutdown(&mut self, idx: usize, line: &str) {
        let line_no = self.line_count;
        if self.records[idx].shutdown {
            self.advise(format_args!(
                "line {line_no}: shutdown redefinition: [{line}]"
            ));
        }
        self.records[idx].shutdown = true;
    }

    /// Emits an advisory diagnostic and counts it.
    fn advise(&mut self, message: std::fmt::Arguments<'_>) {
        warn!("{}", message);
        self.advisories += 1;
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[InterfaceRecord] {
        &self.records
    }

    /// Looks up a record by interface name.
    pub fn get(&self, name: &str) -> Option<&InterfaceRecord> {
        self.index.get(name).map(|&idx| &self.records[idx])
    }

    /// Record currently in scope, if any.
    pub fn current(&self) -> Option<&InterfaceRecord> {
        self.current.map(|idx| &self.records[idx])
    }

    /// Number of distinct interfaces seen.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no interface has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lines consumed so far.
    pub fn line_count(&self) -> u64 {
        self.line_count
    }

    /// Per-category interface line counters.
    pub fn counters(&self) -> CategoryCounters {
        self.counters
    }

    /// Advisory diagnostics emitted so far.
    pub fn advisories(&self) -> u64 {
        self.advisories
    }
}

impl Default for ScanContext {
    fn default() -> Self {
        Self::new()
    }
}

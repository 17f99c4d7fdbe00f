//! Integration tests for the intfscan pipeline
//!
//! Tests the full scan workflow from raw configuration text to rendered
//! output rows:
//! - Interface block extraction across a realistic dump
//! - Category counters and summary state
//! - Structured output layout and ordering
//! - Fatal read error handling

use std::io::{self, Cursor, Read};

use pretty_assertions::assert_eq;

use intfscan::run;

/// A realistic configuration dump exercising every rule at once.
const DUMP: &str = "\
!
hostname edge-router-1
ip routing
!
interface Loopback0
 description management loopback
 ip address 192.0.2.1 255.255.255.255
!
interface GigabitEthernet0/0
 description uplink to core, primary
 ip vrf forwarding CUSTOMER-A
 ip address 10.1.0.1 255.255.255.252
 bandwidth 100000
 no ip redirects
!
interface GigabitEthernet0/1
 shutdown
!
interface Multilink1
 ip address 10.9.0.1 255.255.255.0
 ip address 10.9.1.1 255.255.255.0 secondary
!
interface Port-channel2
 bandwidth 2000000
!
end
";

fn scan(dump: &str) -> (intfscan::ScanContext, String) {
    let mut out = Vec::new();
    let ctx = run(Cursor::new(dump), &mut out).expect("scan failed");
    (ctx, String::from_utf8(out).expect("output not UTF-8"))
}

fn row(name: &str, vrf: &str, addr: &str, bw: &str, shut: &str, desc: &str) -> String {
    format!("{name:>25},{vrf:>15},{addr:>15},{bw:>10},{shut:>8},\"{desc}\"\n")
}

#[test]
fn test_full_scan_workflow() {
    let (ctx, out) = scan(DUMP);

    let expected = [
        row("Loopback0", "", "192.0.2.1", "", "", "management loopback"),
        row(
            "GigabitEthernet0/0",
            "CUSTOMER-A",
            "10.1.0.1",
            "100000",
            "",
            "uplink to core, primary",
        ),
        row("GigabitEthernet0/1", "", "", "", "shutdown", ""),
        row("Multilink1", "", "10.9.0.1", "", "", ""),
        row("Port-channel2", "", "", "2000000", "", ""),
    ]
    .concat();

    assert_eq!(out, expected);

    assert_eq!(ctx.len(), 5);
    assert_eq!(ctx.line_count(), DUMP.lines().count() as u64);
    assert_eq!(ctx.advisories(), 0);

    let counters = ctx.counters();
    assert_eq!(counters.multilink, 1);
    assert_eq!(counters.loopback, 1);
    assert_eq!(counters.port_channel, 1);
}

#[test]
fn test_dump_without_interfaces() {
    let (ctx, out) = scan("hostname lab\n!\nip routing\n");

    assert_eq!(out, "");
    assert!(ctx.is_empty());
    assert_eq!(ctx.counters(), intfscan::CategoryCounters::default());
}

#[test]
fn test_repeated_stanza_yields_one_row() {
    let dump = "\
interface Loopback0
 ip address 192.0.2.1 255.255.255.255
!
interface Loopback0
 ip address 192.0.2.1 255.255.255.255
!
";
    let (ctx, out) = scan(dump);

    assert_eq!(out.lines().count(), 1);
    assert_eq!(ctx.len(), 1);
    assert_eq!(ctx.counters().loopback, 2);
    // The replayed address hits an already-set field and is logged.
    assert_eq!(ctx.advisories(), 1);
}

#[test]
fn test_attributes_after_separator_need_new_block() {
    let dump = "\
interface GigabitEthernet0/1
!
 shutdown
interface GigabitEthernet0/1
 bandwidth 1000
";
    let (ctx, out) = scan(dump);

    let rec = ctx.get("GigabitEthernet0/1").unwrap();
    assert!(!rec.shutdown);
    assert_eq!(rec.bandwidth, "1000");
    assert_eq!(out, row("GigabitEthernet0/1", "", "", "1000", "", ""));
}

/// Reader that serves one line, then fails.
struct FailingReader {
    served: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream reset"));
        }
        self.served = true;
        let data = b"interface Loopback0\n";
        buf[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }
}

#[test]
fn test_fatal_read_error_yields_no_output() {
    let reader = io::BufReader::new(FailingReader { served: false });
    let mut out = Vec::new();

    let err = run(reader, &mut out).unwrap_err();

    assert!(err.is_read());
    assert!(err.to_string().contains("line 2"));
    // Reporting happens only after full consumption; nothing was rendered.
    assert!(out.is_empty());
}

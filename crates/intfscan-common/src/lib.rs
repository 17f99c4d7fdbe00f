//! Common infrastructure for the intfscan configuration scanner.
//!
//! This crate provides the plumbing shared by the intfscan tool crates:
//!
//! - [`source`]: line-oriented input streaming with CR/LF stripping
//! - [`error`]: error types for scan operations
//!
//! # Architecture
//!
//! A scan run is a strictly sequential pipeline:
//!
//! 1. A [`LineSource`] yields raw lines from the input stream
//! 2. The parser classifies each line and updates the interface table
//! 3. The reporter renders the table once the stream is exhausted
//!
//! This crate owns step 1 and the error surface for all three steps.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use intfscan_common::LineSource;
//!
//! let source = LineSource::new(Cursor::new("interface Gi0/1\r\n"));
//! let lines: Vec<_> = source.map(|l| l.unwrap()).collect();
//! assert_eq!(lines, vec!["interface Gi0/1"]);
//! ```

pub mod error;
pub mod source;

// Re-export commonly used items at crate root
pub use error::{ScanError, ScanResult};
pub use source::LineSource;

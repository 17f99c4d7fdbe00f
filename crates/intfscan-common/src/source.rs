//! Line source over a buffered input stream.
//!
//! [`LineSource`] yields the lines of a stream one at a time, in order,
//! with trailing carriage-return/line-feed characters stripped. End of
//! stream terminates the iterator normally; any other read failure is
//! surfaced as a [`ScanError::Read`] carrying the line number.

use std::io::BufRead;

use crate::error::{ScanError, ScanResult};

/// Lazy, finite, non-restartable sequence of raw text lines.
pub struct LineSource<R> {
    reader: R,
    line_no: u64,
}

impl<R: BufRead> LineSource<R> {
    /// Creates a line source over any buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }

    /// Number of lines yielded so far.
    pub fn line_no(&self) -> u64 {
        self.line_no
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = ScanResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            // Ok(0) is clean end-of-stream, a normal terminal condition.
            Ok(0) => None,
            Ok(_) => {
                self.line_no += 1;
                while buf.ends_with('\n') || buf.ends_with('\r') {
                    buf.pop();
                }
                Some(Ok(buf))
            }
            Err(source) => Some(Err(ScanError::read(self.line_no + 1, source))),
        }
    }
}

//! File-backed switch trace adapter.
//!
//! Implements [`SwitchPort`] over any [`BufRead`]: opens the trace,
//! discards the header line, then decodes one line per poll. Tests drive
//! it with an in-memory cursor; production wraps a buffered file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::app::ports::{InputError, SwitchPort};
use crate::parse::parse_line;
use crate::switches::SwitchSnapshot;

/// Replays a switch trace, one snapshot per line.
#[derive(Debug)]
pub struct TraceReader<R> {
    reader: R,
    /// Physical line number of the last line read (the header is line 1).
    line_no: u64,
    exhausted: bool,
}

impl TraceReader<BufReader<File>> {
    /// Open a trace file and discard its header line.
    pub fn open(path: &Path) -> Result<Self, InputError> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead> TraceReader<R> {
    /// Wrap an already-open reader, consuming its header line.
    pub fn new(mut reader: R) -> Result<Self, InputError> {
        let mut header = String::new();
        reader.read_line(&mut header)?;
        Ok(Self {
            reader,
            line_no: 1,
            exhausted: false,
        })
    }
}

impl<R: BufRead> SwitchPort for TraceReader<R> {
    fn poll(&mut self) -> Result<SwitchSnapshot, InputError> {
        if self.exhausted {
            return Err(InputError::Exhausted);
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            self.exhausted = true;
            return Err(InputError::Exhausted);
        }
        self.line_no += 1;

        parse_line(line.trim_end_matches(['\r', '\n'])).map_err(|source| {
            InputError::Malformed {
                line: self.line_no,
                source,
            }
        })
    }
}

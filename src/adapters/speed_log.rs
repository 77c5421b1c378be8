//! File-backed speed log adapter.
//!
//! Implements [`SpeedSink`] over any [`Write`]: truncates the target,
//! writes the fixed header once, then appends one integer per recorded
//! tick. Tests drive it with a `Vec<u8>`; production wraps a buffered
//! file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::app::ports::{OutputError, SpeedSink};

/// Header line written once at creation.
const HEADER: &str = "Motor angle";

/// Records the motor speed after every sample tick.
#[derive(Debug)]
pub struct SpeedLog<W> {
    writer: W,
}

impl SpeedLog<BufWriter<File>> {
    /// Create (or truncate) the speed log file and write its header.
    pub fn create(path: &Path) -> Result<Self, OutputError> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> SpeedLog<W> {
    /// Wrap an already-open writer, emitting the header line.
    pub fn new(mut writer: W) -> Result<Self, OutputError> {
        writeln!(writer, "{HEADER}")?;
        Ok(Self { writer })
    }

    /// Flush buffered records to the underlying writer.
    pub fn flush(&mut self) -> Result<(), OutputError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the log, returning the underlying writer.
    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SpeedSink for SpeedLog<W> {
    fn record(&mut self, speed: i32) -> Result<(), OutputError> {
        writeln!(self.writer, "{speed}")?;
        Ok(())
    }
}

//! Port traits — the boundary between the controller core and the outside
//! world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SpeedController (domain)
//! ```
//!
//! Driven adapters (trace reader, speed log, event sinks) implement these
//! traits. The controller consumes them via generics, so the core never
//! opens a file itself and tests drive it with in-memory doubles.

use core::fmt;

use crate::parse::ParseError;
use crate::switches::SwitchSnapshot;

// ───────────────────────────────────────────────────────────────
// Switch port (driven adapter: input trace → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the controller calls this once per sample tick.
///
/// Each successful poll yields a complete snapshot decoded from exactly one
/// input line. After [`InputError::Exhausted`] the port stays exhausted;
/// callers stop iterating rather than retry.
pub trait SwitchPort {
    fn poll(&mut self) -> Result<SwitchSnapshot, InputError>;
}

// ───────────────────────────────────────────────────────────────
// Speed sink port (driven adapter: domain → speed log)
// ───────────────────────────────────────────────────────────────

/// Write-side port: receives the clamped motor speed after every tick.
pub trait SpeedSink {
    fn record(&mut self, speed: i32) -> Result<(), OutputError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The controller emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`SwitchPort::poll`].
#[derive(Debug)]
pub enum InputError {
    /// The trace has no more lines. Normal termination, not a fault.
    Exhausted,
    /// One line could not be tokenized. The port remains usable; the
    /// offending line is identified for reporting.
    Malformed { line: u64, source: ParseError },
    /// The underlying reader failed.
    Io(std::io::Error),
}

/// Errors from [`SpeedSink::record`].
#[derive(Debug)]
pub enum OutputError {
    /// The underlying writer failed.
    Io(std::io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => write!(f, "end of input trace"),
            Self::Malformed { line, source } => write!(f, "line {line}: {source}"),
            Self::Io(e) => write!(f, "input I/O error: {e}"),
        }
    }
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "output I/O error: {e}"),
        }
    }
}

impl std::error::Error for InputError {}
impl std::error::Error for OutputError {}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<std::io::Error> for OutputError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

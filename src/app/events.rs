//! Outbound application events.
//!
//! The [`SpeedController`](super::service::SpeedController) emits these
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on the
//! other side decide what to do with them — log to the console, collect in
//! a test, feed a future UI.

use crate::parse::ParseError;

/// Structured events emitted by the controller core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The run loop started (carries the initial motor speed).
    Started { speed: i32 },

    /// A processed line changed the motor speed.
    SpeedChanged { from: i32, to: i32 },

    /// A line could not be tokenized and was skipped.
    LineSkipped { line: u64, reason: ParseError },

    /// The trace is exhausted and the run loop stopped.
    Finished(RunSummary),
}

/// Totals for one complete run over a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines successfully processed (sample ticks).
    pub lines: u64,
    /// Malformed lines skipped.
    pub skipped: u64,
    /// Motor speed when the trace ended.
    pub final_speed: i32,
}

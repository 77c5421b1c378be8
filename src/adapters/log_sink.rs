//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (the binary installs `env_logger`). A future UI or
//! telemetry adapter would implement the same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { speed } => {
                info!("START | speed={speed}");
            }
            AppEvent::SpeedChanged { from, to } => {
                info!("SPEED | {from} -> {to}");
            }
            AppEvent::LineSkipped { line, reason } => {
                warn!("SKIP  | line {line}: {reason}");
            }
            AppEvent::Finished(summary) => {
                info!(
                    "DONE  | lines={} skipped={} final_speed={}",
                    summary.lines, summary.skipped, summary.final_speed
                );
            }
        }
    }
}

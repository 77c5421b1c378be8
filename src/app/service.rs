//! Application service — the hexagonal core.
//!
//! [`SpeedController`] owns the motor and the run-loop orchestration. All
//! I/O flows through port traits injected at call sites, making the whole
//! service testable with in-memory doubles.
//!
//! ```text
//!  SwitchPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │    SpeedController      │
//!   SpeedSink ◀── │  decide · clamp · log   │
//!                 └────────────────────────┘
//! ```

use log::{info, warn};

use crate::control::compute_next_speed;
use crate::error::Error;
use crate::motor::Motor;
use crate::switches::SwitchSnapshot;

use super::events::{AppEvent, RunSummary};
use super::ports::{EventSink, InputError, SpeedSink, SwitchPort};

/// Orchestrates one trace-driven run of the motor-speed controller.
pub struct SpeedController {
    motor: Motor,
    /// Successfully processed lines (sample ticks).
    ticks: u64,
    /// Malformed lines skipped so far.
    skipped: u64,
}

impl SpeedController {
    /// A controller with the motor at its power-on default speed.
    pub fn new() -> Self {
        Self {
            motor: Motor::new(),
            ticks: 0,
            skipped: 0,
        }
    }

    /// Current motor speed.
    pub fn speed(&self) -> i32 {
        self.motor.speed()
    }

    /// Process one decoded snapshot: decide, clamp, persist, report.
    pub fn step(
        &mut self,
        snapshot: &SwitchSnapshot,
        sink: &mut impl SpeedSink,
        events: &mut impl EventSink,
    ) -> Result<(), Error> {
        self.ticks += 1;
        let prev = self.motor.speed();
        let candidate = compute_next_speed(snapshot, prev);
        self.motor.update(candidate, sink)?;

        let now = self.motor.speed();
        if now != prev {
            events.emit(&AppEvent::SpeedChanged {
                from: prev,
                to: now,
            });
        }
        Ok(())
    }

    /// Drive the controller until the trace is exhausted.
    ///
    /// One pass per sample tick: poll → decide → clamp/persist → report.
    /// Malformed lines are skipped with a warning; I/O failures are
    /// terminal for the run.
    pub fn run(
        &mut self,
        switches: &mut impl SwitchPort,
        sink: &mut impl SpeedSink,
        events: &mut impl EventSink,
    ) -> Result<RunSummary, Error> {
        events.emit(&AppEvent::Started {
            speed: self.motor.speed(),
        });
        info!("controller started at speed {}", self.motor.speed());

        loop {
            match switches.poll() {
                Ok(snapshot) => self.step(&snapshot, sink, events)?,
                Err(InputError::Exhausted) => break,
                Err(InputError::Malformed { line, source }) => {
                    warn!("skipping malformed line {line}: {source}");
                    self.skipped += 1;
                    events.emit(&AppEvent::LineSkipped {
                        line,
                        reason: source,
                    });
                }
                Err(e @ InputError::Io(_)) => return Err(e.into()),
            }
        }

        let summary = RunSummary {
            lines: self.ticks,
            skipped: self.skipped,
            final_speed: self.motor.speed(),
        };
        events.emit(&AppEvent::Finished(summary));
        info!(
            "trace exhausted after {} lines ({} skipped), final speed {}",
            summary.lines, summary.skipped, summary.final_speed
        );
        Ok(summary)
    }
}

impl Default for SpeedController {
    fn default() -> Self {
        Self::new()
    }
}

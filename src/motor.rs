//! Motor model: owns the current speed and enforces its bounds.
//!
//! The decision engine only proposes a candidate speed; the motor's
//! saturating setter is the single place where `[MIN_SPEED, MAX_SPEED]`
//! is enforced, so a candidate one step past a bound (see
//! [`crate::control`]) is absorbed here.

use crate::app::ports::{OutputError, SpeedSink};

/// Lowest speed the motor will run at.
pub const MIN_SPEED: i32 = 10;
/// Highest speed the motor will run at.
pub const MAX_SPEED: i32 = 140;
/// Power-on default speed.
pub const MEDIUM_SPEED: i32 = 90;

/// Saturate a candidate speed to the motor's operating range.
pub fn clamp(speed: i32) -> i32 {
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

/// The motor. Constructed at loop start, threaded through the run loop,
/// dropped at loop end — no module-level state.
#[derive(Debug)]
pub struct Motor {
    speed: i32,
}

impl Motor {
    /// A motor spinning at the power-on default.
    pub fn new() -> Self {
        Self {
            speed: MEDIUM_SPEED,
        }
    }

    /// Current speed. Always within `[MIN_SPEED, MAX_SPEED]`.
    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Set the speed, saturating to the operating range.
    pub fn set_speed(&mut self, speed: i32) {
        self.speed = clamp(speed);
    }

    /// Set the speed and record the clamped value through the sink.
    pub fn update(
        &mut self,
        new_speed: i32,
        sink: &mut impl SpeedSink,
    ) -> Result<(), OutputError> {
        self.set_speed(new_speed);
        sink.record(self.speed)
    }
}

impl Default for Motor {
    fn default() -> Self {
        Self::new()
    }
}

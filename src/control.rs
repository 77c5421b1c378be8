//! Speed decision engine.
//!
//! Pure function of the latest switch snapshot and the current speed; it
//! never touches the motor. The caller clamps and persists the result.

use crate::motor::{MAX_SPEED, MIN_SPEED};
use crate::switches::{SwitchSnapshot, SwitchState};

/// Hold-duration units that buy one decrement step while the momentary
/// switch is held.
pub const STEP_HOLD_UNITS: i32 = 30_000;

/// Compute the next motor speed from one snapshot.
///
/// Priority order, first match wins:
///
/// 1. momentary switch `Pressed` with at least one full hold interval
///    accumulated — one step down per full [`STEP_HOLD_UNITS`] contained in
///    the duration, stopping once the speed floor is reached;
/// 2. decrement switch on its press edge (`PrePressed`) — one step down;
/// 3. increment switch on its press edge — one step up;
/// 4. otherwise the speed is unchanged.
///
/// The boundary guards are `>= MIN_SPEED` / `<= MAX_SPEED`, so a speed
/// sitting exactly on a bound still moves one step past it; the motor's
/// saturating setter absorbs that overshoot. Pinned by tests rather than
/// "fixed" here — the observable output after clamping is the contract.
pub fn compute_next_speed(snapshot: &SwitchSnapshot, current_speed: i32) -> i32 {
    let mut speed = current_speed;

    if snapshot.momentary == SwitchState::Pressed && snapshot.press_duration >= STEP_HOLD_UNITS {
        if speed >= MIN_SPEED {
            let mut remaining = snapshot.press_duration;
            loop {
                speed -= 1;
                remaining -= STEP_HOLD_UNITS;
                if remaining < STEP_HOLD_UNITS || speed < MIN_SPEED {
                    break;
                }
            }
        }
    } else if snapshot.decrement == SwitchState::PrePressed {
        if speed >= MIN_SPEED {
            speed -= 1;
        }
    } else if snapshot.increment == SwitchState::PrePressed && speed <= MAX_SPEED {
        speed += 1;
    }

    speed
}

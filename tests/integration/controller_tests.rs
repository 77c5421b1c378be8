//! Controller integration tests driven by the scripted switch double.

use speedctl::app::events::AppEvent;
use speedctl::app::service::SpeedController;
use speedctl::control::STEP_HOLD_UNITS;
use speedctl::motor::{MAX_SPEED, MEDIUM_SPEED, MIN_SPEED};
use speedctl::switches::{SwitchId, SwitchSnapshot, SwitchState};

use crate::fake_switches::{CollectingEvents, FakeSwitches, RecordingSink};

#[test]
fn controller_starts_at_medium_speed() {
    let ctl = SpeedController::new();
    assert_eq!(ctl.speed(), MEDIUM_SPEED);
}

#[test]
fn increment_edge_then_two_hold_intervals() {
    // The end-to-end scenario: 90 → 91 on the press edge, then a held
    // momentary switch with two full intervals takes 91 → 89.
    let mut switches = FakeSwitches::new();
    switches.push_state(SwitchId::Increment, SwitchState::PrePressed);
    switches.push_hold(2 * STEP_HOLD_UNITS);

    let mut sink = RecordingSink::new();
    let mut events = CollectingEvents::new();
    let mut ctl = SpeedController::new();

    let summary = ctl.run(&mut switches, &mut sink, &mut events).unwrap();

    assert_eq!(sink.speeds, vec![MEDIUM_SPEED + 1, MEDIUM_SPEED - 1]);
    assert_eq!(summary.lines, 2);
    assert_eq!(summary.final_speed, MEDIUM_SPEED - 1);
    assert_eq!(
        events.speed_changes(),
        vec![
            (MEDIUM_SPEED, MEDIUM_SPEED + 1),
            (MEDIUM_SPEED + 1, MEDIUM_SPEED - 1),
        ]
    );
}

#[test]
fn idle_ticks_hold_the_speed() {
    let mut switches = FakeSwitches::new();
    for _ in 0..5 {
        switches.push_idle();
    }

    let mut sink = RecordingSink::new();
    let mut events = CollectingEvents::new();
    let mut ctl = SpeedController::new();

    let summary = ctl.run(&mut switches, &mut sink, &mut events).unwrap();

    assert_eq!(sink.speeds, vec![MEDIUM_SPEED; 5]);
    assert_eq!(summary.final_speed, MEDIUM_SPEED);
    assert!(events.speed_changes().is_empty());
}

#[test]
fn momentary_rule_preempts_both_edges() {
    let mut switches = FakeSwitches::from_script(vec![SwitchSnapshot {
        increment: SwitchState::PrePressed,
        decrement: SwitchState::PrePressed,
        momentary: SwitchState::Pressed,
        press_duration: STEP_HOLD_UNITS,
    }]);

    let mut sink = RecordingSink::new();
    let mut events = CollectingEvents::new();
    let mut ctl = SpeedController::new();

    ctl.run(&mut switches, &mut sink, &mut events).unwrap();

    // Exactly one step down — not one per rule.
    assert_eq!(sink.last(), Some(MEDIUM_SPEED - 1));
}

#[test]
fn speed_saturates_at_the_maximum() {
    let mut switches = FakeSwitches::new();
    for _ in 0..(MAX_SPEED - MEDIUM_SPEED + 10) {
        switches.push_state(SwitchId::Increment, SwitchState::PrePressed);
    }

    let mut sink = RecordingSink::new();
    let mut events = CollectingEvents::new();
    let mut ctl = SpeedController::new();

    let summary = ctl.run(&mut switches, &mut sink, &mut events).unwrap();

    assert_eq!(summary.final_speed, MAX_SPEED);
    assert!(sink.speeds.iter().all(|&s| s <= MAX_SPEED));
}

#[test]
fn speed_saturates_at_the_minimum() {
    let mut switches = FakeSwitches::new();
    for _ in 0..(MEDIUM_SPEED - MIN_SPEED + 10) {
        switches.push_state(SwitchId::Decrement, SwitchState::PrePressed);
    }

    let mut sink = RecordingSink::new();
    let mut events = CollectingEvents::new();
    let mut ctl = SpeedController::new();

    let summary = ctl.run(&mut switches, &mut sink, &mut events).unwrap();

    assert_eq!(summary.final_speed, MIN_SPEED);
    assert!(sink.speeds.iter().all(|&s| s >= MIN_SPEED));
}

#[test]
fn long_hold_drops_to_the_floor_in_one_tick() {
    let mut switches = FakeSwitches::new();
    switches.push_hold(1000 * STEP_HOLD_UNITS);

    let mut sink = RecordingSink::new();
    let mut events = CollectingEvents::new();
    let mut ctl = SpeedController::new();

    let summary = ctl.run(&mut switches, &mut sink, &mut events).unwrap();

    // The raw candidate overshoots by one step; the motor clamp restores it.
    assert_eq!(summary.final_speed, MIN_SPEED);
}

#[test]
fn run_brackets_the_trace_with_started_and_finished() {
    let mut switches = FakeSwitches::new();
    switches.push_idle();

    let mut sink = RecordingSink::new();
    let mut events = CollectingEvents::new();
    let mut ctl = SpeedController::new();

    let summary = ctl.run(&mut switches, &mut sink, &mut events).unwrap();

    assert_eq!(
        events.events.first(),
        Some(&AppEvent::Started {
            speed: MEDIUM_SPEED
        })
    );
    assert_eq!(events.events.last(), Some(&AppEvent::Finished(summary)));
}

#[test]
fn error_state_switches_are_inert() {
    // An unrecognized token decodes to SwitchState::Error, which no rule
    // matches — the speed must not move.
    let mut switches = FakeSwitches::new();
    switches.push_state(SwitchId::Increment, SwitchState::Error);
    switches.push_state(SwitchId::Decrement, SwitchState::Error);
    switches.push_state(SwitchId::Momentary, SwitchState::Error);

    let mut sink = RecordingSink::new();
    let mut events = CollectingEvents::new();
    let mut ctl = SpeedController::new();

    let summary = ctl.run(&mut switches, &mut sink, &mut events).unwrap();
    assert_eq!(summary.final_speed, MEDIUM_SPEED);
}

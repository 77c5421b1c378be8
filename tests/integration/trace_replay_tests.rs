//! Full-pipeline tests: text trace in, speed log out.
//!
//! Uses in-memory readers/writers through the same adapters the binary
//! wires to real files.

use std::io::Cursor;

use speedctl::adapters::{SpeedLog, TraceReader};
use speedctl::app::service::SpeedController;
use speedctl::motor::MEDIUM_SPEED;

use crate::fake_switches::CollectingEvents;

#[test]
fn replay_produces_one_speed_per_data_line() {
    let trace = "inc\tdec\tp\tduration\n\
                 pre_pressed\treleased\treleased\t0\n\
                 pre_pressed\treleased\treleased\t0\n\
                 released\tpre_pressed\treleased\t0\n";

    let mut switches = TraceReader::new(Cursor::new(trace)).unwrap();
    let mut log = SpeedLog::new(Vec::new()).unwrap();
    let mut events = CollectingEvents::new();
    let mut ctl = SpeedController::new();

    let summary = ctl.run(&mut switches, &mut log, &mut events).unwrap();

    assert_eq!(summary.lines, 3);
    assert_eq!(summary.final_speed, MEDIUM_SPEED + 1);
    assert_eq!(
        events.speed_changes(),
        vec![
            (MEDIUM_SPEED, MEDIUM_SPEED + 1),
            (MEDIUM_SPEED + 1, MEDIUM_SPEED + 2),
            (MEDIUM_SPEED + 2, MEDIUM_SPEED + 1),
        ]
    );
}

#[test]
fn malformed_lines_are_skipped_and_reported() {
    let trace = "header\n\
                 pre_pressed\treleased\treleased\t0\n\
                 pressed\treleased\treleased\n\
                 released\tpre_pressed\treleased\t0\n";

    let mut switches = TraceReader::new(Cursor::new(trace)).unwrap();
    let mut log = SpeedLog::new(Vec::new()).unwrap();
    let mut events = CollectingEvents::new();
    let mut ctl = SpeedController::new();

    let summary = ctl.run(&mut switches, &mut log, &mut events).unwrap();

    assert_eq!(summary.lines, 2);
    assert_eq!(summary.skipped, 1);
    // Line 3 of the file (header is line 1).
    assert_eq!(events.skipped_lines(), vec![3]);
    assert_eq!(summary.final_speed, MEDIUM_SPEED);
}

#[test]
fn held_momentary_switch_decrements_across_ticks() {
    // Per the trace format, duration accumulates while held; each line is
    // one sample tick carrying the total so far.
    let trace = "header\n\
                 released\treleased\tpressed\t15000\n\
                 released\treleased\tpressed\t30000\n\
                 released\treleased\tpressed\t60000\n";

    let mut switches = TraceReader::new(Cursor::new(trace)).unwrap();
    let mut log = SpeedLog::new(Vec::new()).unwrap();
    let mut events = CollectingEvents::new();
    let mut ctl = SpeedController::new();

    let summary = ctl.run(&mut switches, &mut log, &mut events).unwrap();

    // 90 → 90 (under one interval) → 89 (one interval) → 87 (two).
    assert_eq!(summary.final_speed, MEDIUM_SPEED - 3);
}

#[test]
fn header_only_trace_is_an_empty_run() {
    let mut switches = TraceReader::new(Cursor::new("Motor angle header\n")).unwrap();
    let mut log = SpeedLog::new(Vec::new()).unwrap();
    let mut events = CollectingEvents::new();
    let mut ctl = SpeedController::new();

    let summary = ctl.run(&mut switches, &mut log, &mut events).unwrap();
    assert_eq!(summary.lines, 0);
    assert_eq!(summary.final_speed, MEDIUM_SPEED);
}

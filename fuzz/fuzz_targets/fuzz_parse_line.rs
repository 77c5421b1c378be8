//! Fuzz target: `parse::parse_line`
//!
//! Drives arbitrary byte sequences through the trace-line parser and
//! asserts that it never panics and that every accepted line yields a
//! duration consistent with re-parsing the same input.
//!
//! cargo fuzz run fuzz_parse_line

#![no_main]

use libfuzzer_sys::fuzz_target;
use speedctl::parse::parse_line;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    // May reject the line, but must never panic or scan out of bounds.
    if let Ok(snapshot) = parse_line(line) {
        // Parsing is deterministic.
        assert_eq!(parse_line(line), Ok(snapshot));
    }
});

//! Trace-line tokenizer.
//!
//! One line encodes four fields: increment-switch state, decrement-switch
//! state, momentary-switch state, and the momentary hold duration. Fields
//! are free-text tokens separated by arbitrary runs of bytes outside
//! `[a-z0-9_]` (tabs and spaces in practice).
//!
//! Skipping is keyword-led rather than whitespace-led, inherited from the
//! trace format: every legal state keyword starts with `p` or `r`, so the
//! scanner advances to the first such byte. A field whose legal values did
//! not start with `p`/`r` could not be parsed this way — that is a format
//! constraint, not a general-purpose tokenizer.
//!
//! All scans are bounded by the line length. A line that runs out before a
//! field is found is rejected with a [`ParseError`] instead of read past.

use core::fmt;

use crate::switches::{SwitchId, SwitchSnapshot, SwitchState};

/// Why a trace line could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The line ended before a state token was found for this switch.
    MissingStateToken(SwitchId),
    /// The line ended before the duration field was found.
    MissingDuration,
    /// The duration field had a sign but no digits, or overflowed `i32`.
    BadDuration,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStateToken(id) => {
                write!(f, "no state token for {id} switch before end of line")
            }
            Self::MissingDuration => write!(f, "no duration field before end of line"),
            Self::BadDuration => write!(f, "duration is not a valid signed integer"),
        }
    }
}

impl std::error::Error for ParseError {}

/// True for bytes that belong to a token: lowercase ASCII, digits, `_`.
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_'
}

/// Advance to the first `p`/`r` at or after `from`. State keywords all
/// start with one of these two letters.
fn skip_to_state(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from.min(bytes.len())..]
        .iter()
        .position(|&b| b == b'p' || b == b'r')
        .map(|off| from + off)
}

/// Advance to the first decimal digit or `-` at or after `from`.
fn skip_to_number(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from.min(bytes.len())..]
        .iter()
        .position(|&b| b.is_ascii_digit() || b == b'-')
        .map(|off| from + off)
}

/// Length of the token run starting at `start`.
fn token_len(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .take_while(|&&b| is_token_byte(b))
        .count()
}

/// Parse one trace line into a switch snapshot.
///
/// The four fields are extracted in one left-to-right pass; the cursor
/// advances past each token before the next skip, so tokens are never
/// re-scanned from the start of the line. Unrecognized state tokens map to
/// [`SwitchState::Error`] and are reported through the snapshot, not as a
/// parse failure.
pub fn parse_line(line: &str) -> Result<SwitchSnapshot, ParseError> {
    let bytes = line.as_bytes();
    let mut cursor = 0;
    let mut states = [SwitchState::Error; 3];

    let fields = [SwitchId::Increment, SwitchId::Decrement, SwitchId::Momentary];
    for (slot, id) in states.iter_mut().zip(fields) {
        let start = skip_to_state(bytes, cursor).ok_or(ParseError::MissingStateToken(id))?;
        let len = token_len(bytes, start);
        // Token bytes are all ASCII, so the slice sits on char boundaries.
        *slot = SwitchState::from_token(&line[start..start + len]);
        cursor = start + len;
    }

    let start = skip_to_number(bytes, cursor).ok_or(ParseError::MissingDuration)?;
    let press_duration = parse_duration(bytes, line, start)?;

    Ok(SwitchSnapshot {
        increment: states[0],
        decrement: states[1],
        momentary: states[2],
        press_duration,
    })
}

/// Parse a signed decimal integer starting at `start`: an optional `-`
/// followed by the maximal digit run. Trailing non-digit bytes are
/// ignored, as `atoi`-style parsing would.
fn parse_duration(bytes: &[u8], line: &str, start: usize) -> Result<i32, ParseError> {
    let mut end = start;
    if bytes.get(end) == Some(&b'-') {
        end += 1;
    }
    let digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return Err(ParseError::BadDuration);
    }
    end += digits;
    line[start..end].parse().map_err(|_| ParseError::BadDuration)
}

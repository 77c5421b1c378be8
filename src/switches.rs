//! Switch domain types: identities, decoded states, and the per-line snapshot.
//!
//! The input trace encodes three physical switches per line. The increment
//! and decrement switches act on their press edge (`PrePressed`); the
//! momentary switch acts on its sustained `Pressed` state combined with the
//! accumulated hold duration (see [`crate::control`]).

use core::fmt;

/// State keyword as it appears in the trace file.
pub const PRE_PRESSED_TOKEN: &str = "pre_pressed";
/// State keyword as it appears in the trace file.
pub const PRESSED_TOKEN: &str = "pressed";
/// State keyword as it appears in the trace file.
pub const RELEASED_TOKEN: &str = "released";
/// State keyword as it appears in the trace file.
pub const PRE_RELEASED_TOKEN: &str = "pre_released";

/// Identifies one of the three logical switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchId {
    /// The "+ve" switch — steps the speed up on its press edge.
    Increment,
    /// The "-ve" switch — steps the speed down on its press edge.
    Decrement,
    /// The "P" switch — steps the speed down per full hold interval.
    Momentary,
}

impl fmt::Display for SwitchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increment => write!(f, "increment"),
            Self::Decrement => write!(f, "decrement"),
            Self::Momentary => write!(f, "momentary"),
        }
    }
}

/// Decoded state of a single switch.
///
/// `Error` doubles as "not yet decoded" and "unrecognized token" — the two
/// are deliberately indistinguishable at this level, matching the trace
/// format's contract that downstream logic treats both as inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchState {
    /// The token did not match any known state keyword.
    #[default]
    Error,
    /// Transition edge into a press — the single-shot trigger state.
    PrePressed,
    /// Fully pressed and held.
    Pressed,
    /// Fully released.
    Released,
    /// Transition edge into a release.
    PreReleased,
}

impl SwitchState {
    /// Map a trace token to a switch state.
    ///
    /// Exact, case-sensitive match against the four state keywords; any
    /// other token (including the empty string) yields [`SwitchState::Error`].
    pub fn from_token(token: &str) -> Self {
        match token {
            PRE_PRESSED_TOKEN => Self::PrePressed,
            PRESSED_TOKEN => Self::Pressed,
            RELEASED_TOKEN => Self::Released,
            PRE_RELEASED_TOKEN => Self::PreReleased,
            _ => Self::Error,
        }
    }
}

/// One input line's worth of decoded switch data.
///
/// Replaced wholesale on every successfully parsed line — never a merge of
/// two lines, never partially updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchSnapshot {
    pub increment: SwitchState,
    pub decrement: SwitchState,
    pub momentary: SwitchState,
    /// Sample ticks the momentary switch has been held; may be negative in
    /// malformed-but-parseable traces.
    pub press_duration: i32,
}

impl SwitchSnapshot {
    /// Look up a state by switch identity.
    pub fn state(&self, id: SwitchId) -> SwitchState {
        match id {
            SwitchId::Increment => self.increment,
            SwitchId::Decrement => self.decrement,
            SwitchId::Momentary => self.momentary,
        }
    }
}

impl Default for SwitchSnapshot {
    /// All switches released, zero hold duration — the power-on value.
    fn default() -> Self {
        Self {
            increment: SwitchState::Released,
            decrement: SwitchState::Released,
            momentary: SwitchState::Released,
            press_duration: 0,
        }
    }
}

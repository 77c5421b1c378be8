//! Unified error type for the simulator.
//!
//! Every subsystem error converts into the single top-level `Error`,
//! keeping the run loop's error handling uniform. Parse failures are *not*
//! here: a malformed line is recoverable and travels inside
//! [`InputError::Malformed`](crate::app::ports::InputError) so the loop
//! can skip it.

use core::fmt;

use crate::app::ports::{InputError, OutputError};
use crate::config::ConfigError;

/// Every terminal failure in the simulator funnels into this type.
#[derive(Debug)]
pub enum Error {
    /// The input trace could not be opened or read.
    Input(InputError),
    /// The speed log could not be created or written.
    Output(OutputError),
    /// Configuration is invalid or could not be loaded.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "input: {e}"),
            Self::Output(e) => write!(f, "output: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl From<OutputError> for Error {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

//! speedctl — PC-hosted vacuum-cleaner motor-speed controller.
//!
//! Replays a text trace of switch samples (one line per sample tick) and
//! drives a simulated motor speed through a priority-based decision
//! engine. Exposes the pure-logic modules for integration testing; all
//! file I/O lives behind port traits in adapters.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod motor;
pub mod parse;
pub mod switches;

pub mod adapters;

mod error;

pub use error::{Error, Result};

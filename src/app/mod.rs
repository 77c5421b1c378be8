//! Application layer: the controller service, its port traits, and the
//! events it emits.

pub mod events;
pub mod ports;
pub mod service;

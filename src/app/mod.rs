//! Application layer: port traits, outbound events, and the control
//! service that owns the task table and shared state.

pub mod events;
pub mod ports;
pub mod service;

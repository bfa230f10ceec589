//! Thermostat controller: a cooperative time-triggered control loop.
//!
//! Three periodic state-machine tasks share a single control context:
//! button-check adjusts the set-point from latched edge flags,
//! thermostat-control compares ambient temperature against the
//! set-point and drives the heater, and uart-report emits one status
//! line per second.  A fixed task table fires each task at its own
//! period over a 100 ms base tick.
//!
//! Layout follows a ports-and-adapters split: `tasks` and `scheduler`
//! hold the control behaviour against the traits in [`app::ports`], and
//! `adapters` binds those traits to the sensor driver, indicator, and
//! console, or to test doubles.

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod flags;
pub mod scheduler;
pub mod sensors;
pub mod tasks;

pub use config::SystemConfig;
pub use error::{Error, Result};

//! Heater indicator LED.
//!
//! On the host build the "LED" is a log line; the driver still tracks
//! the commanded level so callers can query it.

use log::info;

#[derive(Debug, Default)]
pub struct HeaterIndicator {
    active: bool,
}

impl HeaterIndicator {
    pub fn new() -> Self {
        Self { active: false }
    }

    /// Drive the indicator.  Idempotent: re-driving the current level is
    /// allowed and only logs on an actual change.
    pub fn set(&mut self, active: bool) {
        if active != self.active {
            info!("heater indicator {}", if active { "ON" } else { "off" });
        }
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

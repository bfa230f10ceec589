//! System configuration parameters
//!
//! All tunable parameters for the thermostat.  Task periods are expressed
//! in milliseconds and must be integer multiples of the base tick; the
//! scheduler measures elapsed time in base-tick increments only.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Timing ---
    /// Scheduler base tick (milliseconds).  Every task period is a
    /// multiple of this interval.
    pub base_tick_ms: u32,
    /// Button-check task period (milliseconds)
    pub button_period_ms: u32,
    /// Thermostat-control task period (milliseconds)
    pub thermostat_period_ms: u32,
    /// Status-report task period (milliseconds).  Defined to equal one
    /// second of wall time: the report task increments its seconds
    /// counter by exactly 1 per firing.
    pub report_period_ms: u32,

    // --- Set-point ---
    /// Target temperature at power-on (degrees)
    pub initial_set_point: u8,
    /// Lower saturation bound for the set-point (degrees)
    pub set_point_min: u8,
    /// Upper saturation bound for the set-point (degrees)
    pub set_point_max: u8,
}

impl SystemConfig {
    /// Check the cross-field constraints the scheduler relies on.
    /// Called once at start-up, before the task table is built.
    pub fn validate(&self) -> crate::Result<()> {
        if self.base_tick_ms == 0 {
            return Err(Error::Config("base tick must be non-zero"));
        }
        let periods = [
            self.button_period_ms,
            self.thermostat_period_ms,
            self.report_period_ms,
        ];
        if periods.iter().any(|p| *p == 0 || p % self.base_tick_ms != 0) {
            return Err(Error::Config(
                "task periods must be non-zero multiples of the base tick",
            ));
        }
        if self.set_point_min > self.set_point_max {
            return Err(Error::Config("set-point bounds are inverted"));
        }
        if self.initial_set_point < self.set_point_min
            || self.initial_set_point > self.set_point_max
        {
            return Err(Error::Config("initial set-point outside its bounds"));
        }
        Ok(())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Timing
            base_tick_ms: 100,
            button_period_ms: 200,
            thermostat_period_ms: 500,
            report_period_ms: 1000,

            // Set-point
            initial_set_point: 18,
            set_point_min: 0,
            set_point_max: 99,
        }
    }
}

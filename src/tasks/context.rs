//! Shared mutable context threaded through every task tick.
//!
//! `ControlContext` is the single struct that task state machines read
//! from and write to.  It replaces the ambient globals of a classic C
//! control loop with an explicit value passed by reference.
//!
//! ## Single-writer rule
//!
//! Locking is unnecessary because every shared datum has exactly one
//! writer task:
//!
//! | Field                 | Writer          | Readers            |
//! |-----------------------|-----------------|--------------------|
//! | `set_point`           | Button task     | Thermostat, Report |
//! | `ambient_temperature` | Thermostat task | Report             |
//! | `heater_on`           | Thermostat task | Report             |
//! | `seconds_elapsed`     | Report task     | —                  |
//!
//! Tasks never run concurrently (the scheduler invokes them strictly in
//! sequence), so the rule holds by construction; it is documented here
//! because it is the invariant that keeps the design lock-free.

use crate::config::SystemConfig;

/// The shared control variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedControlState {
    /// User-adjustable target temperature, saturating in
    /// `[set_point_min, set_point_max]`.
    pub set_point: u8,
    /// Last good ambient reading in whole degrees.  Held at its previous
    /// value across failed sensor reads.
    pub ambient_temperature: i16,
    /// Whether the heater is currently commanded on.
    pub heater_on: bool,
    /// Monotonically increasing wall-clock seconds since start-up.
    pub seconds_elapsed: u32,
}

/// The context passed to every task tick function.
pub struct ControlContext {
    /// Shared control variables (see the single-writer table above).
    pub shared: SharedControlState,
    /// System configuration (tunable parameters).
    pub config: SystemConfig,
}

impl ControlContext {
    /// Create a new context with the given configuration.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            shared: SharedControlState {
                set_point: config.initial_set_point,
                ambient_temperature: 0,
                heater_on: false,
                seconds_elapsed: 0,
            },
            config,
        }
    }
}

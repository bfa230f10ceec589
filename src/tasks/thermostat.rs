//! Thermostat-control task: threshold comparison and heater output.
//!
//! ```text
//! Start ─▶ Off ──[ambient < set-point]──▶ On
//!           ▲                             │
//!           └──[ambient >= set-point]─────┘
//! ```
//!
//! The comparison is a strict threshold with no hysteresis.  A reading
//! sitting exactly on the boundary lands on the Off side and may
//! oscillate once per firing; downstream consumers depend on that exact
//! control law, so do not add a dead band.
//!
//! The entry action runs on every firing, not just on transitions: each
//! firing re-drives the indicator (idempotent) and refreshes the ambient
//! reading, so the temperature is sampled once per task period.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, IndicatorPort, SensorPort};

use super::context::ControlContext;

/// Thermostat-control task states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermostatState {
    Start,
    /// Heater commanded on.
    On,
    /// Heater commanded off.
    Off,
}

pub(crate) fn tick(
    state: ThermostatState,
    ctx: &mut ControlContext,
    hw: &mut (impl SensorPort + IndicatorPort),
    sink: &mut impl EventSink,
) -> ThermostatState {
    let set_point = i16::from(ctx.shared.set_point);

    // Phase one: next state from the last reading and the set-point.
    let next = match state {
        ThermostatState::Start => ThermostatState::Off,
        ThermostatState::Off => {
            if ctx.shared.ambient_temperature < set_point {
                ThermostatState::On
            } else {
                ThermostatState::Off
            }
        }
        ThermostatState::On => {
            if ctx.shared.ambient_temperature >= set_point {
                ThermostatState::Off
            } else {
                ThermostatState::On
            }
        }
    };

    // Phase two: entry actions — heater flag, indicator, sensor refresh.
    match next {
        ThermostatState::On => {
            ctx.shared.heater_on = true;
            hw.set_active(true);
            refresh_ambient(ctx, hw, sink);
        }
        ThermostatState::Off => {
            ctx.shared.heater_on = false;
            hw.set_active(false);
            refresh_ambient(ctx, hw, sink);
        }
        // Start never survives phase one.
        ThermostatState::Start => {}
    }

    if next != state && state != ThermostatState::Start {
        info!(
            "heater {} (ambient {} / set-point {})",
            if ctx.shared.heater_on { "on" } else { "off" },
            ctx.shared.ambient_temperature,
            set_point,
        );
        sink.emit(&AppEvent::HeaterChanged {
            on: ctx.shared.heater_on,
        });
    }

    next
}

/// Refresh the ambient reading.  A failed read keeps the previous value;
/// the task stays on its normal schedule and retries next firing.
fn refresh_ambient(
    ctx: &mut ControlContext,
    hw: &mut impl SensorPort,
    sink: &mut impl EventSink,
) {
    match hw.read_temperature() {
        Ok(degrees) => ctx.shared.ambient_temperature = degrees,
        Err(e) => {
            warn!(
                "temperature read failed ({e}); holding last reading {}",
                ctx.shared.ambient_temperature
            );
            sink.emit(&AppEvent::SensorReadFailed(e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SystemConfig;
    use crate::error::SensorError;

    /// Scriptable sensor plus indicator recorder.
    struct FakeHw {
        reading: Result<i16, SensorError>,
        reads: u32,
        indicator: Vec<bool>,
    }

    impl FakeHw {
        fn new(reading: i16) -> Self {
            Self {
                reading: Ok(reading),
                reads: 0,
                indicator: Vec::new(),
            }
        }
    }

    impl SensorPort for FakeHw {
        fn read_temperature(&mut self) -> Result<i16, SensorError> {
            self.reads += 1;
            self.reading
        }
    }

    impl IndicatorPort for FakeHw {
        fn set_active(&mut self, active: bool) {
            self.indicator.push(active);
        }
    }

    struct NullSink;

    impl EventSink for NullSink {
        fn emit(&mut self, _event: &AppEvent) {}
    }

    fn ctx_with_ambient(ambient: i16) -> ControlContext {
        let mut ctx = ControlContext::new(SystemConfig::default());
        ctx.shared.ambient_temperature = ambient;
        ctx
    }

    #[test]
    fn start_enters_off() {
        let mut ctx = ctx_with_ambient(20);
        let mut hw = FakeHw::new(20);
        let next = tick(ThermostatState::Start, &mut ctx, &mut hw, &mut NullSink);
        assert_eq!(next, ThermostatState::Off);
        assert!(!ctx.shared.heater_on);
        assert_eq!(hw.indicator, vec![false]);
    }

    #[test]
    fn below_set_point_turns_on() {
        // Ambient 17, set-point 18 → Off transitions to On.
        let mut ctx = ctx_with_ambient(17);
        let mut hw = FakeHw::new(17);
        let next = tick(ThermostatState::Off, &mut ctx, &mut hw, &mut NullSink);
        assert_eq!(next, ThermostatState::On);
        assert!(ctx.shared.heater_on);
        assert_eq!(hw.indicator, vec![true]);
    }

    #[test]
    fn boundary_is_inclusive_on_the_off_side() {
        // Ambient 18, set-point 18 → On transitions to Off.
        let mut ctx = ctx_with_ambient(18);
        let mut hw = FakeHw::new(18);
        let next = tick(ThermostatState::On, &mut ctx, &mut hw, &mut NullSink);
        assert_eq!(next, ThermostatState::Off);
        assert!(!ctx.shared.heater_on);

        // And Off stays Off at the boundary.
        let next = tick(next, &mut ctx, &mut hw, &mut NullSink);
        assert_eq!(next, ThermostatState::Off);
    }

    #[test]
    fn refreshes_ambient_on_every_firing() {
        let mut ctx = ctx_with_ambient(25);
        let mut hw = FakeHw::new(25);
        let mut state = ThermostatState::Off;
        for _ in 0..4 {
            state = tick(state, &mut ctx, &mut hw, &mut NullSink);
        }
        assert_eq!(hw.reads, 4, "one sensor read per firing, even without transitions");
    }

    #[test]
    fn fresh_reading_drives_next_firing() {
        let mut ctx = ctx_with_ambient(20);
        let mut hw = FakeHw::new(15); // The room got colder.
        let state = tick(ThermostatState::Off, &mut ctx, &mut hw, &mut NullSink);
        assert_eq!(state, ThermostatState::Off, "decision used the old reading");
        assert_eq!(ctx.shared.ambient_temperature, 15);

        let state = tick(state, &mut ctx, &mut hw, &mut NullSink);
        assert_eq!(state, ThermostatState::On);
    }

    #[test]
    fn failed_read_holds_last_value_and_reports() {
        struct Recorder(Vec<AppEvent>);
        impl EventSink for Recorder {
            fn emit(&mut self, event: &AppEvent) {
                self.0.push(*event);
            }
        }

        let mut ctx = ctx_with_ambient(21);
        let mut hw = FakeHw::new(0);
        hw.reading = Err(SensorError::BusReadFailed);
        let mut sink = Recorder(Vec::new());

        let next = tick(ThermostatState::Off, &mut ctx, &mut hw, &mut sink);
        assert_eq!(next, ThermostatState::Off);
        assert_eq!(ctx.shared.ambient_temperature, 21, "previous reading retained");
        assert_eq!(
            sink.0,
            vec![AppEvent::SensorReadFailed(SensorError::BusReadFailed)]
        );
    }
}

//! Task state machines.
//!
//! Three independent finite-state machines driven by the scheduler:
//!
//! ```text
//! Button-Check      Start ─▶ Check ─▶ {Increment|Decrement} ─▶ Check
//! Thermostat        Start ─▶ Off ◀──▶ On
//! Report            Start ─▶ Report (self-looping)
//! ```
//!
//! The classic embedded pattern dispatches tick functions through raw
//! function pointers; here the task set is closed and known at compile
//! time, so dispatch is a tagged enum instead.  Each variant carries its
//! own state enum and every tick is total: it always returns a valid
//! next state and never aborts the scheduler.  "Unrecognised state"
//! recovery is unnecessary because out-of-range states are
//! unrepresentable.
//!
//! Every tick is two-phase: phase one computes the next state from the
//! current state and inputs (without consuming anything), phase two runs
//! the entry actions for the state just computed.

pub mod button;
pub mod context;
pub mod report;
pub mod thermostat;

use crate::app::ports::{EventSink, IndicatorPort, SensorPort, SerialPort};
use crate::flags::InterruptFlags;
use button::ButtonState;
use context::ControlContext;
use report::ReportState;
use thermostat::ThermostatState;

/// A task's state machine, tagged by task kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFsm {
    /// Polls the button-edge flags and adjusts the set-point.
    Button(ButtonState),
    /// Compares ambient temperature to the set-point and drives the
    /// heater indicator.
    Thermostat(ThermostatState),
    /// Counts seconds and emits the serial status line.
    Report(ReportState),
}

impl TaskFsm {
    /// Human-readable task name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Button(_) => "button-check",
            Self::Thermostat(_) => "thermostat-control",
            Self::Report(_) => "uart-report",
        }
    }

    /// Advance this task's state machine by one firing.
    ///
    /// Side effects are confined to the invoked task's owned state (see
    /// the single-writer table in [`context`]), the flags it consumes,
    /// and the ports it drives.
    pub fn tick(
        self,
        ctx: &mut ControlContext,
        flags: &InterruptFlags,
        hw: &mut (impl SensorPort + IndicatorPort + SerialPort),
        sink: &mut impl EventSink,
    ) -> TaskFsm {
        match self {
            Self::Button(state) => Self::Button(button::tick(state, ctx, flags, sink)),
            Self::Thermostat(state) => Self::Thermostat(thermostat::tick(state, ctx, hw, sink)),
            Self::Report(state) => Self::Report(report::tick(state, ctx, hw, sink)),
        }
    }
}

//! UART-report task: seconds counter and the serial status line.
//!
//! ```text
//! Start ─▶ Report ─╮
//!            ▲     │
//!            ╰─────╯
//! ```
//!
//! The task period is defined to equal one second of wall time, so each
//! firing increments `seconds_elapsed` by exactly 1 — the counter is a
//! unit count of firings, not a reading of any clock.  Each firing then
//! emits exactly one status record over the serial port.

use crate::app::events::{AppEvent, StatusRecord};
use crate::app::ports::{EventSink, SerialPort};

use super::context::ControlContext;

/// Report task states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportState {
    Start,
    /// Steady state: never left once entered.
    Report,
}

pub(crate) fn tick(
    state: ReportState,
    ctx: &mut ControlContext,
    hw: &mut impl SerialPort,
    sink: &mut impl EventSink,
) -> ReportState {
    let next = match state {
        ReportState::Start | ReportState::Report => ReportState::Report,
    };

    // Entry action: one second, one line.
    ctx.shared.seconds_elapsed += 1;
    let record = StatusRecord {
        ambient: ctx.shared.ambient_temperature,
        set_point: ctx.shared.set_point,
        heater_on: ctx.shared.heater_on,
        seconds: ctx.shared.seconds_elapsed,
    };
    hw.write_line(record.render().as_str());
    sink.emit(&AppEvent::Report(record));

    next
}

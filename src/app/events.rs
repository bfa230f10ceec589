//! Outbound application events.
//!
//! Tasks and the control service emit these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — log to the console, forward to
//! telemetry, or record in a test harness.

use core::fmt::Write as _;

use crate::error::SensorError;

/// Structured events emitted by the control core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The control service has started.
    Started,

    /// The set-point changed in response to a button edge.
    SetPointChanged { from: u8, to: u8 },

    /// The heater turned on or off.
    HeaterChanged { on: bool },

    /// The report task emitted a status record.
    Report(StatusRecord),

    /// A temperature read failed; the previous reading was retained.
    SensorReadFailed(SensorError),
}

/// A point-in-time status snapshot, one per report-task firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRecord {
    /// Ambient temperature in whole degrees.
    pub ambient: i16,
    /// Current target temperature.
    pub set_point: u8,
    /// Whether the heater is on.
    pub heater_on: bool,
    /// Seconds since start-up, counted by the report task.
    pub seconds: u32,
}

impl StatusRecord {
    /// Render the serial wire format: `<AA, SS, H, TTTT>` with the
    /// temperature and set-point zero-padded to two digits, the heater
    /// flag as 0/1, and the seconds counter zero-padded to four digits.
    /// The line terminator is appended by the serial adapter.
    pub fn render(&self) -> heapless::String<32> {
        let mut line = heapless::String::new();
        // Worst case is 28 bytes; the write cannot fail at capacity 32.
        let _ = write!(
            line,
            "<{:02}, {:02}, {}, {:04}>",
            self.ambient,
            self.set_point,
            u8::from(self.heater_on),
            self.seconds,
        );
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_matches_wire_format() {
        let record = StatusRecord {
            ambient: 20,
            set_point: 18,
            heater_on: false,
            seconds: 1,
        };
        assert_eq!(record.render(), "<20, 18, 0, 0001>");
    }

    #[test]
    fn render_zero_pads_narrow_fields() {
        let record = StatusRecord {
            ambient: 5,
            set_point: 7,
            heater_on: true,
            seconds: 42,
        };
        assert_eq!(record.render(), "<05, 07, 1, 0042>");
    }

    #[test]
    fn render_handles_negative_ambient() {
        let record = StatusRecord {
            ambient: -3,
            set_point: 18,
            heater_on: true,
            seconds: 9999,
        };
        assert_eq!(record.render(), "<-3, 18, 1, 9999>");
    }

    #[test]
    fn render_widens_past_four_digit_seconds() {
        let record = StatusRecord {
            ambient: 21,
            set_point: 21,
            heater_on: false,
            seconds: 123_456,
        };
        assert_eq!(record.render(), "<21, 21, 0, 123456>");
    }
}

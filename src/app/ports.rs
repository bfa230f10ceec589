//! Port traits — the boundary between the control core and hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ task state machines (domain)
//! ```
//!
//! Driven adapters (the I2C temperature sensor, the heater indicator
//! output, the serial console, the event log) implement these traits.
//! The scheduler and tasks consume them via generics, so the core never
//! touches hardware directly and runs unmodified against mocks.

use crate::error::SensorError;

// ───────────────────────────────────────────────────────────────
// Temperature sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the thermostat task calls this to refresh the ambient
/// temperature.
pub trait SensorPort {
    /// Read the current ambient temperature in whole degrees.
    ///
    /// Failures are recoverable: the caller keeps its last good reading
    /// and retries on its next scheduled firing.
    fn read_temperature(&mut self) -> Result<i16, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Heater indicator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the heater indicator output.  Synchronous and
/// infallible — no failure path is exposed to the core.
pub trait IndicatorPort {
    /// Drive the indicator active (heater on) or inactive (heater off).
    fn set_active(&mut self, active: bool);
}

// ───────────────────────────────────────────────────────────────
// Serial output port (driven adapter: domain → UART)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the status report line.  Best-effort: the core
/// does not check for backpressure or failure beyond what the adapter
/// handles internally.
pub trait SerialPort {
    /// Write one status record.  The implementation appends the line
    /// terminator.
    fn write_line(&mut self, line: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log,
/// telemetry channel, a test recorder).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

//! Shared test doubles for the integration and property tests.

// Each test binary compiles this module separately and uses a different
// subset of it.
#![allow(dead_code)]

use thermostat::app::events::AppEvent;
use thermostat::app::ports::{EventSink, IndicatorPort, SensorPort, SerialPort};
use thermostat::error::SensorError;

/// Scriptable hardware double implementing all three ports.
pub struct MockHw {
    /// The reading every `read_temperature` call returns.
    pub temperature: Result<i16, SensorError>,
    /// Total sensor reads.
    pub reads: u32,
    /// Every indicator drive, in order.
    pub indicator: Vec<bool>,
    /// Every serial line, terminator excluded.
    pub lines: Vec<String>,
}

impl MockHw {
    pub fn new(temperature: i16) -> Self {
        Self {
            temperature: Ok(temperature),
            reads: 0,
            indicator: Vec::new(),
            lines: Vec::new(),
        }
    }

    pub fn set_temperature(&mut self, degrees: i16) {
        self.temperature = Ok(degrees);
    }

    pub fn fail_reads(&mut self) {
        self.temperature = Err(SensorError::BusReadFailed);
    }

    /// Level last commanded on the indicator.
    pub fn indicator_active(&self) -> bool {
        self.indicator.last().copied().unwrap_or(false)
    }
}

impl SensorPort for MockHw {
    fn read_temperature(&mut self) -> Result<i16, SensorError> {
        self.reads += 1;
        self.temperature
    }
}

impl IndicatorPort for MockHw {
    fn set_active(&mut self, active: bool) {
        self.indicator.push(active);
    }
}

impl SerialPort for MockHw {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Event sink that records everything it sees.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

/// Check one serial line against the `<AA, SS, H, TTTT>` shape without
/// pinning the field values.
pub fn is_status_line(line: &str) -> bool {
    let Some(body) = line.strip_prefix('<').and_then(|s| s.strip_suffix('>')) else {
        return false;
    };
    let fields: Vec<&str> = body.split(", ").collect();
    if fields.len() != 4 {
        return false;
    }
    fields[0].parse::<i16>().is_ok()
        && fields[1].parse::<u8>().is_ok()
        && matches!(fields[2], "0" | "1")
        && fields[3].parse::<u32>().is_ok()
        && fields[3].len() >= 4
}

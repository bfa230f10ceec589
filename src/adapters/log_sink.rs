//! Event sink that forwards application events to the logger.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => info!("started"),
            AppEvent::SetPointChanged { from, to } => {
                info!("set point {from} -> {to}");
            }
            AppEvent::HeaterChanged { on } => {
                info!("heater {}", if *on { "on" } else { "off" });
            }
            AppEvent::Report(record) => {
                info!(
                    "report: ambient {} set {} heater {} uptime {}s",
                    record.ambient, record.set_point, record.heater_on, record.seconds
                );
            }
            AppEvent::SensorReadFailed(e) => warn!("sensor read failed: {e}"),
        }
    }
}

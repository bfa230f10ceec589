//! Application service: owns the task table and shared context and
//! exposes one entry point per scheduler tick.
//!
//! The service is deliberately thin.  All control behaviour lives in
//! the task state machines; the service wires them to the scheduler and
//! offers read-only queries for callers that want to observe the loop
//! (the host simulator, integration tests).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, IndicatorPort, SensorPort, SerialPort};
use crate::config::SystemConfig;
use crate::flags::InterruptFlags;
use crate::scheduler::TaskTable;
use crate::tasks::context::ControlContext;

pub struct ControlService {
    table: TaskTable,
    ctx: ControlContext,
    pass_count: u64,
}

impl ControlService {
    pub fn new(config: SystemConfig) -> Self {
        Self {
            table: TaskTable::new(&config),
            ctx: ControlContext::new(config),
            pass_count: 0,
        }
    }

    /// Bring outputs to a known state before the first pass: heater
    /// indicator off, start-up event emitted.
    pub fn start(&mut self, hw: &mut impl IndicatorPort, sink: &mut impl EventSink) {
        hw.set_active(false);
        sink.emit(&AppEvent::Started);
        info!(
            "control loop started, set point {} degrees",
            self.ctx.shared.set_point
        );
    }

    /// Run one scheduler pass.  Call exactly once per base tick.
    pub fn run_pass(
        &mut self,
        flags: &InterruptFlags,
        hw: &mut (impl SensorPort + IndicatorPort + SerialPort),
        sink: &mut impl EventSink,
    ) {
        self.table.run_one_pass(&mut self.ctx, flags, hw, sink);
        self.pass_count += 1;
    }

    pub fn set_point(&self) -> u8 {
        self.ctx.shared.set_point
    }

    pub fn ambient_temperature(&self) -> i16 {
        self.ctx.shared.ambient_temperature
    }

    pub fn heater_on(&self) -> bool {
        self.ctx.shared.heater_on
    }

    pub fn seconds_elapsed(&self) -> u32 {
        self.ctx.shared.seconds_elapsed
    }

    pub fn pass_count(&self) -> u64 {
        self.pass_count
    }
}

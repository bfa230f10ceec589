//! Cooperative periodic task scheduler.
//!
//! ```text
//!               ┌──────────────────────────────────────────┐
//!               │ TaskTable                                │
//!  one pass     │  ┌────────────┬────────┬─────────────┐   │
//!  per base ───▶│  │   fsm      │ period │ elapsed     │   │
//!  tick         │  ├────────────┼────────┼─────────────┤   │
//!               │  │ Button     │ 200 ms │ fires, +100 │   │
//!               │  │ Thermostat │ 500 ms │ fires, +100 │   │
//!               │  │ Report     │ 1000 ms│ fires, +100 │   │
//!               │  └────────────┴────────┴─────────────┘   │
//!               └──────────────────────────────────────────┘
//! ```
//!
//! The table is fixed at start-up: three tasks, declaration order
//! Button, Thermostat, Report, process lifetime.  One pass walks the
//! table in order; a task fires iff its elapsed time has reached its
//! period, and fires at most once per pass.  Tasks never interleave —
//! there is no concurrency between them, only sequential invocation.
//!
//! Periods are multiples of the base tick, not absolute time: calling
//! `run_one_pass` at any cadence other than one base tick per call
//! desynchronises every declared period.

use log::debug;

use crate::app::ports::{EventSink, IndicatorPort, SensorPort, SerialPort};
use crate::config::SystemConfig;
use crate::flags::InterruptFlags;
use crate::tasks::button::ButtonState;
use crate::tasks::context::ControlContext;
use crate::tasks::report::ReportState;
use crate::tasks::thermostat::ThermostatState;
use crate::tasks::TaskFsm;

/// Number of tasks in the table.  The set is closed; there is no
/// dynamic task creation.
pub const TASK_COUNT: usize = 3;

/// One schedulable unit: a state machine plus its firing cadence.
#[derive(Debug, Clone, Copy)]
struct Task {
    fsm: TaskFsm,
    /// Firing period in milliseconds; a multiple of the base tick.
    period_ms: u32,
    /// Time accumulated since the last firing, in base-tick increments.
    /// Seeded to `period_ms` so every task fires on the very first pass.
    elapsed_ms: u32,
}

/// The fixed, ordered task table.
pub struct TaskTable {
    tasks: [Task; TASK_COUNT],
    base_tick_ms: u32,
}

impl TaskTable {
    /// Build the table from configuration.  Each task starts with
    /// `elapsed_ms = period_ms`, forcing a firing on the first pass.
    pub fn new(config: &SystemConfig) -> Self {
        let task = |fsm: TaskFsm, period_ms: u32| Task {
            fsm,
            period_ms,
            elapsed_ms: period_ms,
        };
        Self {
            tasks: [
                task(TaskFsm::Button(ButtonState::Start), config.button_period_ms),
                task(
                    TaskFsm::Thermostat(ThermostatState::Start),
                    config.thermostat_period_ms,
                ),
                task(TaskFsm::Report(ReportState::Start), config.report_period_ms),
            ],
            base_tick_ms: config.base_tick_ms,
        }
    }

    /// Run one scheduler pass.  Call exactly once per base tick.
    ///
    /// For every task in table order: if due, tick its state machine and
    /// reset its elapsed time; then unconditionally advance the elapsed
    /// time by one base tick.
    pub fn run_one_pass(
        &mut self,
        ctx: &mut ControlContext,
        flags: &InterruptFlags,
        hw: &mut (impl SensorPort + IndicatorPort + SerialPort),
        sink: &mut impl EventSink,
    ) {
        for task in &mut self.tasks {
            if task.elapsed_ms >= task.period_ms {
                debug!("firing {}", task.fsm.name());
                task.fsm = task.fsm.tick(ctx, flags, hw, sink);
                task.elapsed_ms = 0;
            }
            task.elapsed_ms += self.base_tick_ms;
        }
    }

    /// Current state of every task, in table order.
    pub fn states(&self) -> [TaskFsm; TASK_COUNT] {
        [self.tasks[0].fsm, self.tasks[1].fsm, self.tasks[2].fsm]
    }

    /// Elapsed times in table order (exposed for invariant checks).
    pub fn elapsed_times(&self) -> [u32; TASK_COUNT] {
        [
            self.tasks[0].elapsed_ms,
            self.tasks[1].elapsed_ms,
            self.tasks[2].elapsed_ms,
        ]
    }

    /// Periods in table order.
    pub fn periods(&self) -> [u32; TASK_COUNT] {
        [
            self.tasks[0].period_ms,
            self.tasks[1].period_ms,
            self.tasks[2].period_ms,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::events::AppEvent;
    use crate::error::SensorError;

    /// Minimal test double satisfying all three hardware ports.
    struct NullHw {
        temperature: i16,
        lines: Vec<String>,
        indicator: Vec<bool>,
    }

    impl NullHw {
        fn new(temperature: i16) -> Self {
            Self {
                temperature,
                lines: Vec::new(),
                indicator: Vec::new(),
            }
        }
    }

    impl SensorPort for NullHw {
        fn read_temperature(&mut self) -> Result<i16, SensorError> {
            Ok(self.temperature)
        }
    }

    impl IndicatorPort for NullHw {
        fn set_active(&mut self, active: bool) {
            self.indicator.push(active);
        }
    }

    impl SerialPort for NullHw {
        fn write_line(&mut self, line: &str) {
            self.lines.push(line.to_string());
        }
    }

    struct NullSink;

    impl EventSink for NullSink {
        fn emit(&mut self, _event: &AppEvent) {}
    }

    fn setup() -> (TaskTable, ControlContext, InterruptFlags, NullHw, NullSink) {
        let config = SystemConfig::default();
        (
            TaskTable::new(&config),
            ControlContext::new(config),
            InterruptFlags::new(),
            NullHw::new(20),
            NullSink,
        )
    }

    #[test]
    fn every_task_fires_on_first_pass() {
        let (mut table, mut ctx, flags, mut hw, mut sink) = setup();
        table.run_one_pass(&mut ctx, &flags, &mut hw, &mut sink);

        // All three left their Start state in one pass.
        assert_eq!(
            table.states(),
            [
                TaskFsm::Button(crate::tasks::button::ButtonState::Check),
                TaskFsm::Thermostat(crate::tasks::thermostat::ThermostatState::Off),
                TaskFsm::Report(crate::tasks::report::ReportState::Report),
            ]
        );
        assert_eq!(ctx.shared.seconds_elapsed, 1);
        assert_eq!(hw.lines.len(), 1);
    }

    #[test]
    fn elapsed_resets_on_fire_then_advances() {
        let (mut table, mut ctx, flags, mut hw, mut sink) = setup();
        table.run_one_pass(&mut ctx, &flags, &mut hw, &mut sink);
        // Every task fired, reset to 0, then advanced one base tick.
        assert_eq!(table.elapsed_times(), [100, 100, 100]);
    }

    #[test]
    fn tasks_fire_at_their_declared_cadence() {
        let (mut table, mut ctx, flags, mut hw, mut sink) = setup();

        // 100 passes = 10 s of simulated time.  First pass fires all
        // three, then every 2nd/5th/10th pass fires button/thermostat/
        // report respectively.
        for _ in 0..100 {
            table.run_one_pass(&mut ctx, &flags, &mut hw, &mut sink);
        }
        assert_eq!(ctx.shared.seconds_elapsed, 10);
        assert_eq!(hw.lines.len(), 10);
        // Thermostat fires every 5 passes: 20 firings, one indicator
        // drive each.
        assert_eq!(hw.indicator.len(), 20);
    }

    #[test]
    fn fires_iff_elapsed_reaches_period() {
        let (mut table, mut ctx, flags, mut hw, mut sink) = setup();

        for pass in 1..=40u32 {
            let due: Vec<bool> = table
                .elapsed_times()
                .iter()
                .zip(table.periods())
                .map(|(e, p)| *e >= p)
                .collect();
            let before = hw.lines.len();
            table.run_one_pass(&mut ctx, &flags, &mut hw, &mut sink);
            let report_fired = hw.lines.len() > before;
            assert_eq!(report_fired, due[2], "pass {pass}: report due-ness must match firing");
        }
    }

    #[test]
    fn elapsed_never_exceeds_period_after_a_pass() {
        let (mut table, mut ctx, flags, mut hw, mut sink) = setup();
        for _ in 0..200 {
            table.run_one_pass(&mut ctx, &flags, &mut hw, &mut sink);
            for (elapsed, period) in table.elapsed_times().iter().zip(table.periods()) {
                assert!(*elapsed <= period, "elapsed {elapsed} > period {period}");
            }
        }
    }
}

//! Host simulator for the thermostat control loop.
//!
//! Runs the full control loop against a simulated I2C sensor, with a
//! real 100 ms timer thread driving the tick signal and stdin standing
//! in for the two buttons:
//!
//! ```text
//!   +        right button edge (raise set-point)
//!   -        left button edge (lower set-point)
//!   t <deg>  set the simulated ambient temperature
//! ```
//!
//! Status lines appear on stdout once per second.

use std::io::BufRead;
use std::thread;
use std::time::Duration;

use log::{info, warn};

use thermostat::adapters::{HardwareAdapter, LogEventSink, SimI2cBus};
use thermostat::app::service::ControlService;
use thermostat::flags::{ButtonEdge, InterruptFlags, TickSignal};
use thermostat::sensors::TmpSensor;
use thermostat::SystemConfig;

/// Set by the simulated button "ISRs" (the stdin thread), consumed by
/// the Button task.
static FLAGS: InterruptFlags = InterruptFlags::new();

/// Pulsed by the timer thread once per base tick.
static TICK: TickSignal = TickSignal::new();

/// Simulated start-of-day room temperature.
const INITIAL_AMBIENT: i16 = 20;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SystemConfig::default();
    config.validate()?;
    let tick_ms = u64::from(config.base_tick_ms);

    let bus = SimI2cBus::new(0x48);
    bus.set_degrees(INITIAL_AMBIENT);

    let sensor = TmpSensor::probe(bus.clone())?;
    let mut hw = HardwareAdapter::new(sensor);
    let mut sink = LogEventSink::new();
    let mut service = ControlService::new(config);

    spawn_timer(tick_ms);
    spawn_input(bus);

    service.start(&mut hw, &mut sink);
    loop {
        TICK.wait();
        service.run_pass(&FLAGS, &mut hw, &mut sink);
    }
}

/// Timer thread: one tick pulse per base tick, forever.
fn spawn_timer(tick_ms: u64) {
    // Detached: the loop below never exits, so the handle is never joined.
    let _ = thread::spawn(move || loop {
        thread::sleep(Duration::from_millis(tick_ms));
        TICK.signal();
    });
}

/// Input thread: translates stdin lines into button edges and ambient
/// temperature changes.
fn spawn_input(bus: SimI2cBus) {
    let _ = thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match line.trim() {
                "+" => FLAGS.set(ButtonEdge::Right),
                "-" => FLAGS.set(ButtonEdge::Left),
                "" => {}
                cmd => {
                    if let Some(rest) = cmd.strip_prefix("t ") {
                        match rest.trim().parse::<i16>() {
                            Ok(degrees) => {
                                bus.set_degrees(degrees);
                                info!("ambient set to {degrees} degrees");
                            }
                            Err(_) => warn!("not a temperature: {rest:?}"),
                        }
                    } else {
                        warn!("unknown command: {cmd:?}");
                    }
                }
            }
        }
    });
}

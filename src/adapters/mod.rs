//! Adapters binding the application ports to concrete backends.

pub mod hardware;
pub mod log_sink;
pub mod sim_bus;

pub use hardware::HardwareAdapter;
pub use log_sink::LogEventSink;
pub use sim_bus::SimI2cBus;

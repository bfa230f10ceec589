//! Output device drivers.

pub mod console;
pub mod indicator;

pub use console::SerialConsole;
pub use indicator::HeaterIndicator;

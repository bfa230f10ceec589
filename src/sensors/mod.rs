//! Sensor drivers.

pub mod temperature;

pub use temperature::{raw_to_degrees, TmpSensor};

//! Hardware adapter: binds the concrete drivers to the application's
//! port traits.

use embedded_hal::i2c::I2c;

use crate::app::ports::{IndicatorPort, SensorPort, SerialPort};
use crate::drivers::{HeaterIndicator, SerialConsole};
use crate::error::SensorError;
use crate::sensors::TmpSensor;

pub struct HardwareAdapter<B: I2c> {
    sensor: TmpSensor<B>,
    indicator: HeaterIndicator,
    console: SerialConsole,
}

impl<B: I2c> HardwareAdapter<B> {
    pub fn new(sensor: TmpSensor<B>) -> Self {
        Self {
            sensor,
            indicator: HeaterIndicator::new(),
            console: SerialConsole::new(),
        }
    }

    pub fn indicator_active(&self) -> bool {
        self.indicator.is_active()
    }
}

impl<B: I2c> SensorPort for HardwareAdapter<B> {
    fn read_temperature(&mut self) -> Result<i16, SensorError> {
        self.sensor.read()
    }
}

impl<B: I2c> IndicatorPort for HardwareAdapter<B> {
    fn set_active(&mut self, active: bool) {
        self.indicator.set(active);
    }
}

impl<B: I2c> SerialPort for HardwareAdapter<B> {
    fn write_line(&mut self, line: &str) {
        self.console.write_line(line);
    }
}

//! In-process simulated I2C bus.
//!
//! Implements `embedded_hal::i2c::I2c` over a shared atomic cell, so
//! the sensor driver runs unmodified on the host.  Handles are cheap
//! clones of one shared state: the control loop owns one, and the
//! simulator's input thread (or a test) keeps another to change the
//! "ambient" temperature or inject faults while the loop runs.

use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::sync::Arc;

use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

/// Raw register steps per whole degree (1/0.0078125).
const STEPS_PER_DEGREE: i16 = 128;

#[derive(Debug)]
struct SimSensorState {
    /// 7-bit address the simulated sensor answers on.
    address: u8,
    /// Big-endian register value, as the wire would carry it.
    raw: AtomicU16,
    /// When set, every transaction fails with a bus error.
    failing: AtomicBool,
}

/// A handle to the simulated bus.  Clones share state.
#[derive(Debug, Clone)]
pub struct SimI2cBus {
    inner: Arc<SimSensorState>,
}

impl SimI2cBus {
    /// Create a bus with one sensor parked at `address`, reading 0 degrees.
    pub fn new(address: u8) -> Self {
        Self {
            inner: Arc::new(SimSensorState {
                address,
                raw: AtomicU16::new(0),
                failing: AtomicBool::new(false),
            }),
        }
    }

    /// Set the simulated ambient temperature in whole degrees.
    pub fn set_degrees(&self, degrees: i16) {
        let word = degrees.wrapping_mul(STEPS_PER_DEGREE);
        self.inner.raw.store(word as u16, Ordering::Release);
    }

    /// Set the raw register word directly, for fractional or edge-case
    /// readings.
    pub fn set_raw(&self, word: u16) {
        self.inner.raw.store(word, Ordering::Release);
    }

    /// Toggle fault injection: while failing, every transaction errors.
    pub fn set_failing(&self, failing: bool) {
        self.inner.failing.store(failing, Ordering::Release);
    }
}

/// Bus-level transaction failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimBusError {
    /// No device at the addressed location.
    NoAcknowledge,
    /// Injected transfer fault.
    Failed,
}

impl i2c::Error for SimBusError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NoAcknowledge => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
            Self::Failed => ErrorKind::Other,
        }
    }
}

impl ErrorType for SimI2cBus {
    type Error = SimBusError;
}

impl I2c for SimI2cBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != self.inner.address {
            return Err(SimBusError::NoAcknowledge);
        }
        if self.inner.failing.load(Ordering::Acquire) {
            return Err(SimBusError::Failed);
        }
        for op in operations {
            match op {
                // Register-select writes are accepted and ignored; the
                // simulated part has a single readable register.
                Operation::Write(_) => {}
                Operation::Read(buf) => {
                    let word = self.inner.raw.load(Ordering::Acquire);
                    let bytes = word.to_be_bytes();
                    for (dst, src) in buf.iter_mut().zip(bytes.iter().cycle()) {
                        *dst = *src;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_returns_big_endian_word() {
        let mut bus = SimI2cBus::new(0x48);
        bus.set_raw(0x0C80);
        let mut rx = [0u8; 2];
        bus.write_read(0x48, &[0x00], &mut rx).unwrap();
        assert_eq!(rx, [0x0C, 0x80]);
    }

    #[test]
    fn wrong_address_is_not_acknowledged() {
        let mut bus = SimI2cBus::new(0x49);
        let mut rx = [0u8; 2];
        assert_eq!(
            bus.write_read(0x48, &[0x00], &mut rx),
            Err(SimBusError::NoAcknowledge)
        );
    }

    #[test]
    fn fault_injection_fails_transactions() {
        let bus = SimI2cBus::new(0x48);
        bus.set_failing(true);
        let mut handle = bus.clone();
        let mut rx = [0u8; 2];
        assert_eq!(
            handle.write_read(0x48, &[0x00], &mut rx),
            Err(SimBusError::Failed)
        );

        bus.set_failing(false);
        assert!(handle.write_read(0x48, &[0x00], &mut rx).is_ok());
    }

    #[test]
    fn negative_degrees_encode_as_twos_complement() {
        let bus = SimI2cBus::new(0x48);
        bus.set_degrees(-2);
        let mut handle = bus.clone();
        let mut rx = [0u8; 2];
        handle.write_read(0x48, &[0x00], &mut rx).unwrap();
        assert_eq!(rx, [0xFF, 0x00]);
    }
}

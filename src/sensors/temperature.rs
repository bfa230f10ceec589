//! TMP-series I2C temperature sensor driver.
//!
//! The driver is generic over `embedded_hal::i2c::I2c`, so the same
//! code runs against real bus hardware and against the in-process
//! simulated bus used by the host build and the tests.
//!
//! Board revisions ship one of three pin-compatible sensors at
//! different addresses, so start-up probes a fixed candidate table in
//! order and binds to the first part that acknowledges.

use embedded_hal::i2c::I2c;
use log::{info, warn};

use crate::error::SensorError;

/// Applied to the converted reading when the raw MSB carries the sign
/// bit, widening the 13-bit two's-complement result to a full `i16`.
const SIGN_EXTEND_MASK: u16 = 0xF000;

/// Degrees Celsius per least-significant bit of the temperature
/// register (1/128).
const DEGREES_PER_LSB: f32 = 0.0078125;

/// One probeable sensor variant.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    /// 7-bit I2C address.
    address: u8,
    /// Temperature result register.
    register: u8,
    /// Marking on the package, for the start-up log.
    part: &'static str,
}

/// Probe order matters: the most common part first.
const CANDIDATES: [Candidate; 3] = [
    Candidate { address: 0x48, register: 0x00, part: "11X" },
    Candidate { address: 0x49, register: 0x00, part: "116" },
    Candidate { address: 0x41, register: 0x01, part: "006" },
];

/// Convert a big-endian raw register reading to whole degrees Celsius.
///
/// The register value is a two's-complement count of 1/128-degree
/// steps.  Scaling is done in `f32` and truncated toward zero, then the
/// sign is re-extended from the raw MSB.  Both steps are part of the
/// device's published conversion recipe and must not be "simplified":
/// an arithmetic-shift rendition rounds differently for negative
/// readings.
pub fn raw_to_degrees(raw: [u8; 2]) -> i16 {
    let word = i16::from_be_bytes(raw);
    let mut degrees = (f32::from(word) * DEGREES_PER_LSB) as i16;
    if raw[0] & 0x80 != 0 {
        degrees = (degrees as u16 | SIGN_EXTEND_MASK) as i16;
    }
    degrees
}

/// A bound temperature sensor: the bus plus the variant that answered
/// the probe.
pub struct TmpSensor<B: I2c> {
    bus: B,
    address: u8,
    register: u8,
}

impl<B: I2c> TmpSensor<B> {
    /// Probe the candidate table and bind to the first sensor that
    /// acknowledges a register read.
    pub fn probe(mut bus: B) -> crate::Result<Self> {
        for candidate in CANDIDATES {
            let mut rx = [0u8; 2];
            match bus.write_read(candidate.address, &[candidate.register], &mut rx) {
                Ok(()) => {
                    info!(
                        "temperature sensor TMP{} found at address 0x{:02x}",
                        candidate.part, candidate.address
                    );
                    return Ok(Self {
                        bus,
                        address: candidate.address,
                        register: candidate.register,
                    });
                }
                Err(_) => {
                    warn!("no sensor at address 0x{:02x}", candidate.address);
                }
            }
        }
        Err(SensorError::NotDetected.into())
    }

    /// Read the current temperature in whole degrees Celsius.
    pub fn read(&mut self) -> Result<i16, SensorError> {
        let mut rx = [0u8; 2];
        self.bus
            .write_read(self.address, &[self.register], &mut rx)
            .map_err(|_| SensorError::BusReadFailed)?;
        Ok(raw_to_degrees(rx))
    }
}

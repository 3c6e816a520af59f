//! Echo ranging sensor trait

use core::fmt;

use crate::units;

/// Errors that can occur while ranging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeError {
    /// No echo arrived before the timeout
    ///
    /// The sensor may be absent, the object out of range, or the line
    /// noisy. These cases cannot be told apart.
    NoEcho,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::NoEcho => f.write_str("no echo before timeout"),
        }
    }
}

/// Trait for echo-timing distance sensors
///
/// Implementations perform one physical measurement per call. Nothing is
/// cached: every conversion method triggers a fresh reading.
///
/// All methods take `&mut self` and block until the reading completes, so
/// one instance can never run two measurements at once. Separate instances
/// sharing a physical line must be serialized by the caller.
pub trait RangeSensor {
    /// Trigger a reading and return the echo round-trip time in microseconds
    ///
    /// Returns 0 if no echo arrived before the timeout.
    fn measure_raw_duration(&mut self) -> u32;

    /// Trigger a reading, reporting a missing echo as an error
    fn try_measure(&mut self) -> Result<u32, RangeError> {
        match self.measure_raw_duration() {
            0 => Err(RangeError::NoEcho),
            duration => Ok(duration),
        }
    }

    /// Trigger a reading and return the distance in whole inches
    fn to_inches(&mut self) -> u32 {
        units::inches_from_us(self.measure_raw_duration())
    }

    /// Trigger a reading and return the distance in whole centimetres
    fn to_centimeters(&mut self) -> u32 {
        units::centimeters_from_us(self.measure_raw_duration())
    }

    /// Trigger a reading and return the distance in whole feet
    fn to_feet(&mut self) -> u32 {
        units::feet_from_us(self.measure_raw_duration())
    }

    /// Trigger a reading and return the distance in metres
    ///
    /// Unlike the other units this one is not truncated.
    fn to_meters(&mut self) -> f32 {
        units::meters_from_us(self.measure_raw_duration())
    }
}

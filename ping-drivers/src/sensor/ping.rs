//! PING-style ultrasonic distance sensor
//!
//! The sensor has a single signal line. The host pulls it high briefly to
//! start a reading, then releases it; the sensor answers on the same line
//! with a high pulse whose width is the round-trip time of the sound burst.
//!
//! ```text
//!  host drives                     sensor drives
//!  ┌──────────────────────┐        ┌──────────────────────┐
//!      ┌─────┐                         ┌─────────────────┐
//!  ────┘     └─────────────          ──┘                 └──
//!  low  high   low  → input             echo (round trip)
//!  ≥2µs ≥5µs                            ≤ 10 ms
//! ```

use embedded_hal::delay::DelayNs;
use ping_core::config::SensorConfig;
use ping_core::traits::RangeSensor;
use ping_hal::{DigitalIo, PinDirection, PinLevel};

/// Time the line is held low before the trigger pulse (µs)
pub const SETTLE_US: u32 = 2;

/// Width of the trigger pulse (µs)
pub const TRIGGER_US: u32 = 5;

/// Longest echo waited for (µs), about 3 m of range
pub const ECHO_TIMEOUT_US: u32 = 10_000;

/// Single-wire ultrasonic distance sensor
///
/// The pin is fixed at construction. The driver does not own the line
/// exclusively: the platform may reconfigure it between readings, and the
/// driver sets the direction it needs at the start of every reading.
///
/// Each reading blocks for up to [`ECHO_TIMEOUT_US`] plus a few
/// microseconds of setup. Readings on the same physical line must not
/// overlap; from an async executor, run them in a dedicated task.
pub struct DistanceSensor<IO> {
    io: IO,
    pin: u8,
}

impl<IO> DistanceSensor<IO> {
    /// Create a sensor on `pin`
    ///
    /// The pin is not validated. An invalid pin behaves however the
    /// platform handles it.
    pub fn new(io: IO, pin: u8) -> Self {
        Self { io, pin }
    }

    /// Create a sensor from its configuration
    pub fn from_config(io: IO, config: &SensorConfig) -> Self {
        Self::new(io, config.pin)
    }

    /// Signal pin of this sensor
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Release the platform I/O
    pub fn release(self) -> IO {
        self.io
    }
}

impl<IO: DigitalIo> RangeSensor for DistanceSensor<IO> {
    fn measure_raw_duration(&mut self) -> u32 {
        let pin = self.pin;

        // Ready: pull low so the trigger edge is clean
        self.io.set_direction(pin, PinDirection::Output);
        self.io.set_low(pin);
        self.io.delay_us(SETTLE_US);

        // Trigger
        self.io.set_high(pin);
        self.io.delay_us(TRIGGER_US);
        self.io.set_low(pin);

        // Same line now carries the echo
        self.io.set_direction(pin, PinDirection::Input);
        let duration = self.io.measure_pulse(pin, PinLevel::High, ECHO_TIMEOUT_US);

        log_reading(pin, duration);
        duration
    }
}

#[cfg(feature = "defmt")]
fn log_reading(pin: u8, duration_us: u32) {
    if duration_us == 0 {
        defmt::debug!("ping pin {}: no echo within {} us", pin, ECHO_TIMEOUT_US);
    } else {
        defmt::trace!("ping pin {}: echo {} us", pin, duration_us);
    }
}

#[cfg(not(feature = "defmt"))]
fn log_reading(_pin: u8, _duration_us: u32) {}

#[cfg(test)]
mod tests {
    use super::*;
    use ping_core::traits::RangeError;
    use ping_core::units;
    use ping_hal::sim::{Echo, Event, SimulatedIo};
    use proptest::prelude::*;

    fn trigger_sequence(pin: u8) -> [Event; 8] {
        [
            Event::Direction {
                pin,
                direction: PinDirection::Output,
            },
            Event::Level {
                pin,
                level: PinLevel::Low,
            },
            Event::Delay {
                ns: SETTLE_US * 1_000,
            },
            Event::Level {
                pin,
                level: PinLevel::High,
            },
            Event::Delay {
                ns: TRIGGER_US * 1_000,
            },
            Event::Level {
                pin,
                level: PinLevel::Low,
            },
            Event::Direction {
                pin,
                direction: PinDirection::Input,
            },
            Event::MeasurePulse {
                pin,
                level: PinLevel::High,
                timeout_us: ECHO_TIMEOUT_US,
            },
        ]
    }

    #[test]
    fn test_pulse_sequence_order() {
        let mut io = SimulatedIo::with_echo(1_000);
        let mut sensor = DistanceSensor::new(&mut io, 3);

        assert_eq!(sensor.measure_raw_duration(), 1_000);

        let events: std::vec::Vec<Event> = io.events().copied().collect();
        assert_eq!(events, trigger_sequence(3));
    }

    #[test]
    fn test_one_meter_echo() {
        let mut sensor = DistanceSensor::new(SimulatedIo::with_echo(5920), 7);

        assert_eq!(sensor.measure_raw_duration(), 5920);
        assert_eq!(sensor.to_centimeters(), 102);
        assert_eq!(sensor.to_inches(), 40);
        assert_eq!(sensor.to_feet(), 3);
        assert!((sensor.to_meters() - 5920.0 / 58.0 / 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_echo_returns_zero_after_full_timeout() {
        let mut io = SimulatedIo::new();
        let mut sensor = DistanceSensor::new(&mut io, 7);

        assert_eq!(sensor.measure_raw_duration(), 0);
        assert_eq!(io.now_us(), u64::from(SETTLE_US + TRIGGER_US + ECHO_TIMEOUT_US));
    }

    #[test]
    fn test_no_echo_converts_to_zero() {
        let mut sensor = DistanceSensor::new(SimulatedIo::new(), 7);

        assert_eq!(sensor.to_inches(), 0);
        assert_eq!(sensor.to_centimeters(), 0);
        assert_eq!(sensor.to_feet(), 0);
        assert_eq!(sensor.to_meters(), 0.0);
    }

    #[test]
    fn test_echo_past_timeout_is_dropped() {
        let mut sensor = DistanceSensor::new(SimulatedIo::with_echo(ECHO_TIMEOUT_US + 1), 7);
        assert_eq!(sensor.measure_raw_duration(), 0);
    }

    #[test]
    fn test_try_measure() {
        let mut io = SimulatedIo::new();
        io.push_echo(Echo::Silent).unwrap();
        io.push_echo(Echo::Pulse(2_900)).unwrap();
        let mut sensor = DistanceSensor::new(io, 7);

        assert_eq!(sensor.try_measure(), Err(RangeError::NoEcho));
        assert_eq!(sensor.try_measure(), Ok(2_900));
    }

    #[test]
    fn test_every_conversion_triggers_again() {
        let mut io = SimulatedIo::with_echo(5920);
        let expected = trigger_sequence(7);

        DistanceSensor::new(&mut io, 7).to_centimeters();
        let first: std::vec::Vec<Event> = io.events().copied().collect();
        assert_eq!(first, expected);

        io.clear_events();
        let mut sensor = DistanceSensor::new(&mut io, 7);
        sensor.to_centimeters();
        sensor.to_centimeters();

        let events: std::vec::Vec<Event> = io.events().copied().collect();
        assert_eq!(events.len(), 2 * expected.len());
        assert_eq!(events[..8], expected);
        assert_eq!(events[8..], expected);
    }

    #[test]
    fn test_no_caching_between_readings() {
        let mut io = SimulatedIo::new();
        io.push_echo(Echo::Pulse(580)).unwrap();
        io.push_echo(Echo::Pulse(1_160)).unwrap();
        let mut sensor = DistanceSensor::new(io, 7);

        assert_eq!(sensor.to_centimeters(), 10);
        assert_eq!(sensor.to_centimeters(), 20);
    }

    #[test]
    fn test_only_touches_own_pin() {
        let mut io = SimulatedIo::with_echo(5920);
        let mut sensor = DistanceSensor::new(&mut io, 7);
        assert_eq!(sensor.pin(), 7);

        sensor.to_inches();
        sensor.to_meters();

        assert!(io.events().filter_map(Event::pin).all(|pin| pin == 7));
        assert_eq!(io.direction(7), Some(PinDirection::Input));
        assert_eq!(io.level(7), PinLevel::Low);
    }

    #[test]
    fn test_recovers_from_external_reconfiguration() {
        let mut io = SimulatedIo::with_echo(1_160);
        let mut sensor = DistanceSensor::new(&mut io, 7);
        assert_eq!(sensor.to_centimeters(), 20);

        // Someone else drives the line between readings
        let io = sensor.release();
        io.set_direction(7, PinDirection::Output);
        io.set_high(7);

        let mut sensor = DistanceSensor::new(io, 7);
        assert_eq!(sensor.to_centimeters(), 20);
    }

    #[test]
    fn test_from_config() {
        let config = SensorConfig::named("front", 12).unwrap();
        let sensor = DistanceSensor::from_config(SimulatedIo::new(), &config);
        assert_eq!(sensor.pin(), 12);
    }

    #[test]
    fn test_range_sensor_trait() {
        let mut sensor = DistanceSensor::new(SimulatedIo::with_echo(1_480), 2);

        // Use trait method through generic code
        fn read_inches<S: RangeSensor>(s: &mut S) -> u32 {
            s.to_inches()
        }

        assert_eq!(read_inches(&mut sensor), 10);
    }

    proptest! {
        #[test]
        fn conversions_follow_echo(d in 1u32..=ECHO_TIMEOUT_US) {
            let mut sensor = DistanceSensor::new(SimulatedIo::with_echo(d), 7);

            prop_assert_eq!(sensor.measure_raw_duration(), d);
            prop_assert_eq!(sensor.to_inches(), units::inches_from_us(d));
            prop_assert_eq!(sensor.to_centimeters(), units::centimeters_from_us(d));
            prop_assert_eq!(sensor.to_feet(), units::feet_from_us(d));
            prop_assert_eq!(sensor.to_meters(), units::meters_from_us(d));
        }
    }
}

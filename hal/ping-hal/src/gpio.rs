//! GPIO capability abstraction
//!
//! Pin-addressed digital I/O in the style of a microcontroller runtime:
//! every call names the pin it acts on, and the platform owns the actual
//! pin state. The same line may be switched between output and input at
//! any time.

use embedded_hal::delay::DelayNs;

/// Direction of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    /// Line is driven by the host
    Output,
    /// Line is sampled by the host
    Input,
}

/// Logic level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

/// Digital I/O primitives of the host platform
///
/// The microsecond busy-wait comes from the [`DelayNs`] supertrait, so a
/// single platform object provides everything a pulse protocol needs.
///
/// Pin state is process-wide and owned by the platform. Implementations
/// are not expected to validate pin numbers; what happens on an invalid
/// pin is platform-defined.
pub trait DigitalIo: DelayNs {
    /// Configure the direction of a pin
    fn set_direction(&mut self, pin: u8, direction: PinDirection);

    /// Drive an output pin to a level
    fn set_level(&mut self, pin: u8, level: PinLevel);

    /// Measure the width of the next pulse at `level` on `pin`
    ///
    /// Waits for the pin to reach `level`, then times how long it stays
    /// there. Returns the width in microseconds, or 0 if no complete pulse
    /// was seen within `timeout_us`.
    fn measure_pulse(&mut self, pin: u8, level: PinLevel, timeout_us: u32) -> u32;

    /// Drive a pin high
    fn set_high(&mut self, pin: u8) {
        self.set_level(pin, PinLevel::High);
    }

    /// Drive a pin low
    fn set_low(&mut self, pin: u8) {
        self.set_level(pin, PinLevel::Low);
    }
}

impl<T: DigitalIo + ?Sized> DigitalIo for &mut T {
    fn set_direction(&mut self, pin: u8, direction: PinDirection) {
        T::set_direction(self, pin, direction);
    }

    fn set_level(&mut self, pin: u8, level: PinLevel) {
        T::set_level(self, pin, level);
    }

    fn measure_pulse(&mut self, pin: u8, level: PinLevel, timeout_us: u32) -> u32 {
        T::measure_pulse(self, pin, level, timeout_us)
    }
}

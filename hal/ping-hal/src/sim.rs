//! Simulated digital I/O platform
//!
//! A deterministic stand-in for real hardware. Time is virtual: delays and
//! pulse measurements advance an internal clock instead of blocking. Echo
//! responses are scripted up front and every primitive call is recorded so
//! tests can check the exact order of pin operations.

use embedded_hal::delay::DelayNs;
use heapless::Deque;

use crate::gpio::{DigitalIo, PinDirection, PinLevel};

/// Number of recorded events kept (oldest are dropped first)
pub const LOG_CAPACITY: usize = 64;

/// Maximum number of queued echo responses
pub const SCRIPT_CAPACITY: usize = 16;

/// Number of addressable pins (every `u8` value)
pub const PIN_COUNT: usize = u8::MAX as usize + 1;

/// Scripted response to a pulse measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Echo {
    /// A pulse of the given width in microseconds
    Pulse(u32),
    /// No pulse at all
    Silent,
}

/// One recorded platform call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// `set_direction` was called
    Direction { pin: u8, direction: PinDirection },
    /// `set_level` was called
    Level { pin: u8, level: PinLevel },
    /// A delay of `ns` nanoseconds elapsed
    Delay { ns: u32 },
    /// `measure_pulse` was called
    MeasurePulse {
        pin: u8,
        level: PinLevel,
        timeout_us: u32,
    },
}

impl Event {
    /// Pin the event acted on, if any
    pub fn pin(&self) -> Option<u8> {
        match *self {
            Event::Direction { pin, .. }
            | Event::Level { pin, .. }
            | Event::MeasurePulse { pin, .. } => Some(pin),
            Event::Delay { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PinState {
    direction: Option<PinDirection>,
    level: PinLevel,
}

impl PinState {
    const RESET: Self = Self {
        direction: None,
        level: PinLevel::Low,
    };
}

/// Simulated platform with a virtual clock
///
/// Every pin number is tracked. The sensor only answers on a pin
/// configured as input. Each measurement consumes the next scripted
/// [`Echo`]; once the script is empty the fallback response is used for
/// every further measurement.
pub struct SimulatedIo {
    now_ns: u64,
    pins: [PinState; PIN_COUNT],
    script: Deque<Echo, SCRIPT_CAPACITY>,
    fallback: Echo,
    log: Deque<Event, LOG_CAPACITY>,
}

impl Default for SimulatedIo {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedIo {
    /// Create a platform where no echo ever arrives
    pub fn new() -> Self {
        Self {
            now_ns: 0,
            pins: [PinState::RESET; PIN_COUNT],
            script: Deque::new(),
            fallback: Echo::Silent,
            log: Deque::new(),
        }
    }

    /// Create a platform that answers every measurement with a fixed pulse
    pub fn with_echo(width_us: u32) -> Self {
        let mut io = Self::new();
        io.fallback = Echo::Pulse(width_us);
        io
    }

    /// Queue a response for the next measurement
    ///
    /// Returns the echo back if the script is full.
    pub fn push_echo(&mut self, echo: Echo) -> Result<(), Echo> {
        self.script.push_back(echo)
    }

    /// Virtual time elapsed since creation, in nanoseconds
    pub fn now_ns(&self) -> u64 {
        self.now_ns
    }

    /// Virtual time elapsed since creation, in whole microseconds
    pub fn now_us(&self) -> u64 {
        self.now_ns / 1_000
    }

    /// Current direction of a pin (None if never configured)
    pub fn direction(&self, pin: u8) -> Option<PinDirection> {
        self.pins[usize::from(pin)].direction
    }

    /// Last level written to a pin (Low if never written)
    pub fn level(&self, pin: u8) -> PinLevel {
        self.pins[usize::from(pin)].level
    }

    /// Recorded events, oldest first
    pub fn events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.log.iter()
    }

    /// Forget all recorded events
    pub fn clear_events(&mut self) {
        self.log.clear();
    }

    fn record(&mut self, event: Event) {
        if self.log.is_full() {
            self.log.pop_front();
        }
        // Cannot fail: a slot was freed above
        let _ = self.log.push_back(event);
    }

    fn pin_state(&mut self, pin: u8) -> &mut PinState {
        &mut self.pins[usize::from(pin)]
    }

    fn advance_us(&mut self, us: u32) {
        self.now_ns += u64::from(us) * 1_000;
    }
}

impl DelayNs for SimulatedIo {
    fn delay_ns(&mut self, ns: u32) {
        self.now_ns += u64::from(ns);
        self.record(Event::Delay { ns });
    }
}

impl DigitalIo for SimulatedIo {
    fn set_direction(&mut self, pin: u8, direction: PinDirection) {
        self.pin_state(pin).direction = Some(direction);
        self.record(Event::Direction { pin, direction });
    }

    fn set_level(&mut self, pin: u8, level: PinLevel) {
        self.pin_state(pin).level = level;
        self.record(Event::Level { pin, level });
    }

    fn measure_pulse(&mut self, pin: u8, level: PinLevel, timeout_us: u32) -> u32 {
        self.record(Event::MeasurePulse {
            pin,
            level,
            timeout_us,
        });

        let echo = self.script.pop_front().unwrap_or(self.fallback);
        let listening = self.direction(pin) == Some(PinDirection::Input);

        match echo {
            Echo::Pulse(width) if listening && width > 0 && width <= timeout_us => {
                self.advance_us(width);
                width
            }
            _ => {
                // Nothing seen before the deadline
                self.advance_us(timeout_us);
                0
            }
        }
    }
}

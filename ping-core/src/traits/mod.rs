//! Sensor abstraction traits
//!
//! These traits define the interface between application code and
//! specific ranging hardware.

pub mod ranging;

pub use ranging::{RangeError, RangeSensor};

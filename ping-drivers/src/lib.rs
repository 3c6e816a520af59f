//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in ping-core:
//!
//! - Ultrasonic ranging (PING-style single-wire trigger/echo)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod sensor;

pub use ping_core::traits::{RangeError, RangeSensor};
pub use sensor::DistanceSensor;

//! Board-agnostic core logic for the Ping ultrasonic driver
//!
//! This crate contains everything that does not touch a pin:
//!
//! - Unit conversion from echo duration to distance
//! - The range sensor trait and its error type
//! - Sensor configuration types

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod traits;
pub mod units;

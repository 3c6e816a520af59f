//! Ping Hardware Abstraction Layer
//!
//! This crate defines the digital I/O capability a single-wire ultrasonic
//! sensor needs from its host platform. Drivers are written against these
//! traits so the same ranging logic runs on any board, or against the
//! simulated platform on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  ping-drivers (DistanceSensor)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ping-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ board support │       │  sim (host)   │
//! │ (user code)   │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::DigitalIo`] - Pin direction, level, pulse measurement and delay

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
#[cfg(feature = "sim")]
pub mod sim;

// Re-export key traits at crate root for convenience
pub use gpio::{DigitalIo, PinDirection, PinLevel};

//! Distance sensor drivers

pub mod ping;

pub use ping::DistanceSensor;

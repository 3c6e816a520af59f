//! Echo duration to distance conversion
//!
//! The scale factors come from the speed of sound: sound covers one inch
//! in about 74 µs and one centimetre in about 29 µs, so a round trip takes
//! 148 µs per inch and 58 µs per centimetre of distance.
//!
//! Inches, centimetres and feet are truncated toward zero. Metres are kept
//! as a fraction. Division is done in `f64`, which is exact enough for
//! every `u32` duration.

/// Round-trip microseconds per inch of distance
pub const US_PER_INCH: f64 = 148.0;

/// Round-trip microseconds per centimetre of distance
pub const US_PER_CENTIMETER: f64 = 58.0;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Centimetres per metre
pub const CENTIMETERS_PER_METER: f64 = 100.0;

/// Distance in whole inches for a round-trip echo duration
pub fn inches_from_us(duration_us: u32) -> u32 {
    (f64::from(duration_us) / US_PER_INCH) as u32
}

/// Distance in whole centimetres for a round-trip echo duration
pub fn centimeters_from_us(duration_us: u32) -> u32 {
    (f64::from(duration_us) / US_PER_CENTIMETER) as u32
}

/// Distance in whole feet for a round-trip echo duration
pub fn feet_from_us(duration_us: u32) -> u32 {
    (f64::from(duration_us) / US_PER_INCH / INCHES_PER_FOOT) as u32
}

/// Distance in metres for a round-trip echo duration (not truncated)
pub fn meters_from_us(duration_us: u32) -> f32 {
    (f64::from(duration_us) / US_PER_CENTIMETER / CENTIMETERS_PER_METER) as f32
}

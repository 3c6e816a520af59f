//! Configuration types
//!
//! Board-agnostic sensor configuration, stored as postcard binary data.

pub mod hardware;

pub use hardware::*;

/// Configuration load/store errors
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Could not encode the configuration (buffer too small)
    Serialize,
    /// Stored bytes are not a valid configuration
    Deserialize,
}

/// Decode a sensor configuration from postcard bytes
#[cfg(feature = "serde")]
pub fn load(bytes: &[u8]) -> Result<SensorConfig, ConfigError> {
    postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)
}

/// Encode a sensor configuration into `buf`
///
/// Returns the used part of the buffer.
#[cfg(feature = "serde")]
pub fn store<'a>(config: &SensorConfig, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
    postcard::to_slice(config, buf).map_err(|_| ConfigError::Serialize)
}

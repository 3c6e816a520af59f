//! Sensor hardware configuration

use heapless::String;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum length of a sensor label
pub const MAX_LABEL_LEN: usize = 16;

/// Ultrasonic sensor configuration
///
/// One sensor per signal line. The pin number is passed to the platform
/// unchanged, so it must use the platform's own numbering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorConfig {
    /// Sensor name (e.g., "front", "rear")
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String<MAX_LABEL_LEN>,
    /// Signal pin (trigger and echo share it)
    pub pin: u8,
}

impl SensorConfig {
    /// Create an unnamed sensor config
    pub const fn new(pin: u8) -> Self {
        Self {
            name: String::new(),
            pin,
        }
    }

    /// Create a named sensor config
    ///
    /// Returns `None` if the name is longer than [`MAX_LABEL_LEN`].
    pub fn named(name: &str, pin: u8) -> Option<Self> {
        let mut label = String::new();
        label.push_str(name).ok()?;
        Some(Self { name: label, pin })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "serde")]
    #[derive(Deserialize)]
    struct Document {
        ping: SensorConfig,
    }

    #[test]
    fn test_new_is_unnamed() {
        let config = SensorConfig::new(7);
        assert_eq!(config.pin, 7);
        assert!(config.name.is_empty());
    }

    #[test]
    fn test_named_too_long() {
        assert!(SensorConfig::named("a-very-long-sensor-label", 7).is_none());
        assert!(SensorConfig::named("rear", 4).is_some());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml() {
        let doc: Document = toml::from_str(
            r#"
            # Front bumper sensor
            [ping]
            name = "front"
            pin = 7
            "#,
        )
        .unwrap();

        assert_eq!(doc.ping, SensorConfig::named("front", 7).unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_name_optional() {
        let doc: Document = toml::from_str("[ping]\npin = 12\n").unwrap();
        assert_eq!(doc.ping, SensorConfig::new(12));
    }
}

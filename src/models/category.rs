//! Sensor categories and their storage layout.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A sensor category, one per storage path under `sensors/`.
///
/// Analog categories carry a raw ADC `value` per reading, sound carries an
/// `amplitude`, and motion/vibration are discrete event markers with only a
/// timestamp. Temperature and humidity are already in physical units and are
/// passed through without rescaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Light,
    Gas,
    Flame,
    SoilMoisture,
    Motion,
    Sound,
    Vibration,
    Humidity,
    Temperature,
}

impl Category {
    /// All categories, in the fixed order the cleanup job processes them.
    pub const ALL: [Category; 9] = [
        Category::Light,
        Category::Gas,
        Category::Flame,
        Category::SoilMoisture,
        Category::Motion,
        Category::Sound,
        Category::Vibration,
        Category::Humidity,
        Category::Temperature,
    ];

    /// Storage name of the category, as used in database paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Light => "light",
            Category::Gas => "gas",
            Category::Flame => "flame",
            Category::SoilMoisture => "soil-moisture",
            Category::Motion => "motion",
            Category::Sound => "sound",
            Category::Vibration => "vibration",
            Category::Humidity => "humidity",
            Category::Temperature => "temperature",
        }
    }

    /// Database path holding this category's readings.
    pub fn storage_path(&self) -> String {
        format!("sensors/{}", self.as_str())
    }

    /// Discrete event categories carry only a timestamp per reading.
    pub fn is_event(&self) -> bool {
        matches!(self, Category::Motion | Category::Vibration)
    }

    /// Sound readings store their magnitude in an `amplitude` field.
    pub fn uses_amplitude(&self) -> bool {
        matches!(self, Category::Sound)
    }

    /// Temperature and humidity are stored in physical units (°C, %RH)
    /// and are not mapped through the ADC percentage scale.
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Category::Humidity | Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, thiserror::Error)]
#[error("unknown sensor category: {0}")]
pub struct UnknownCategory(String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_order_is_fixed() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            [
                "light",
                "gas",
                "flame",
                "soil-moisture",
                "motion",
                "sound",
                "vibration",
                "humidity",
                "temperature",
            ]
        );
    }

    #[test]
    fn test_storage_path() {
        assert_eq!(Category::SoilMoisture.storage_path(), "sensors/soil-moisture");
        assert_eq!(Category::Light.storage_path(), "sensors/light");
    }

    #[test]
    fn test_from_str_round_trip() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("lightness".parse::<Category>().is_err());
    }

    #[test]
    fn test_classification() {
        assert!(Category::Motion.is_event());
        assert!(Category::Vibration.is_event());
        assert!(!Category::Light.is_event());

        assert!(Category::Sound.uses_amplitude());
        assert!(!Category::Gas.uses_amplitude());

        assert!(Category::Temperature.is_passthrough());
        assert!(Category::Humidity.is_passthrough());
        assert!(!Category::SoilMoisture.is_passthrough());
    }

    #[test]
    fn test_serde_names_match_storage_names() {
        let json = serde_json::to_string(&Category::SoilMoisture).unwrap();
        assert_eq!(json, "\"soil-moisture\"");
        let parsed: Category = serde_json::from_str("\"soil-moisture\"").unwrap();
        assert_eq!(parsed, Category::SoilMoisture);
    }
}

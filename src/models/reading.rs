//! Sensor readings as stored in the realtime database.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Category;

/// A single reading stored as a child node under a category path.
///
/// `timestamp` is assigned by the sensing device in epoch milliseconds and is
/// required; which magnitude field is present depends on the category (none
/// for motion/vibration event markers). Readings are immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Epoch milliseconds, assigned at write time by the device.
    pub timestamp: i64,

    /// Raw analog value (ADC counts for analog sensors, physical units for
    /// temperature/humidity).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Raw amplitude, used by the sound category instead of `value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<f64>,
}

impl SensorReading {
    /// The raw magnitude of this reading for the given category.
    ///
    /// Sound stores its magnitude in `amplitude`; everything else uses
    /// `value`. Event categories have neither and yield `None`.
    pub fn magnitude(&self, category: Category) -> Option<f64> {
        if category.uses_amplitude() {
            self.amplitude
        } else {
            self.value
        }
    }
}

/// Convert a raw database snapshot into readings sorted by timestamp.
///
/// Insertion order under a category path is not guaranteed to match
/// timestamp order, so consumers always sort explicitly. Children that fail
/// to parse (including those missing a `timestamp`) are skipped.
pub fn parse_snapshot(children: &BTreeMap<String, Value>) -> Vec<SensorReading> {
    let mut readings: Vec<SensorReading> = children
        .iter()
        .filter_map(|(id, raw)| match serde_json::from_value(raw.clone()) {
            Ok(reading) => Some(reading),
            Err(e) => {
                tracing::debug!(record_id = %id, error = %e, "Skipping malformed sensor record");
                None
            }
        })
        .collect();

    readings.sort_by_key(|r| r.timestamp);
    readings
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn snapshot(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_parse_snapshot_sorts_by_timestamp() {
        let children = snapshot(&[
            ("-Nx2", json!({"timestamp": 3000, "value": 10.0})),
            ("-Nx0", json!({"timestamp": 1000, "value": 30.0})),
            ("-Nx1", json!({"timestamp": 2000, "value": 20.0})),
        ]);

        let readings = parse_snapshot(&children);
        let timestamps: Vec<i64> = readings.iter().map(|r| r.timestamp).collect();
        assert_eq!(timestamps, [1000, 2000, 3000]);
    }

    #[test]
    fn test_parse_snapshot_skips_records_without_timestamp() {
        let children = snapshot(&[
            ("a", json!({"value": 42.0})),
            ("b", json!({"timestamp": 1000, "value": 1.0})),
            ("c", json!("not an object")),
        ]);

        let readings = parse_snapshot(&children);
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].timestamp, 1000);
    }

    #[test]
    fn test_magnitude_field_per_category() {
        let sound = SensorReading {
            timestamp: 1,
            value: None,
            amplitude: Some(2048.0),
        };
        assert_eq!(sound.magnitude(Category::Sound), Some(2048.0));
        assert_eq!(sound.magnitude(Category::Light), None);

        let event = SensorReading {
            timestamp: 1,
            value: None,
            amplitude: None,
        };
        assert_eq!(event.magnitude(Category::Motion), None);
    }

    #[test]
    fn test_reading_deserializes_event_marker() {
        let reading: SensorReading = serde_json::from_value(json!({"timestamp": 99})).unwrap();
        assert_eq!(reading.timestamp, 99);
        assert!(reading.value.is_none());
        assert!(reading.amplitude.is_none());
    }
}

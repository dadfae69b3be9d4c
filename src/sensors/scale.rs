//! Linear scaling from raw 12-bit ADC readings to display percentages.
//!
//! Analog sensors report in [0, 4095]. Depending on the sensor's wiring the
//! scale is either direct (0 raw → 0%) or inverted (0 raw → 100%). Values
//! outside the ADC range are not validated here and pass through unclamped.

use crate::models::Category;

/// Upper bound of the 12-bit ADC range.
pub const ADC_MAX: f64 = 4095.0;

/// Raw ADC cutoff below which the flame sensor indicates a fire.
///
/// The alert threshold is defined as a raw-value cutoff, not a fixed
/// percentage; it is converted through the same inverted mapping as the
/// display value.
const FLAME_ALERT_RAW_CUTOFF: f64 = 1000.0;

/// Sound alert fires at or above this display percentage (inclusive).
const SOUND_ALERT_PERCENTAGE: f64 = 75.0;

/// Temperature in °C above which the dashboard shows the heat-warning state.
const HEAT_WARNING_CELSIUS: f64 = 30.0;

/// Round to one decimal place, half away from zero.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Orientation of an analog sensor's scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleDirection {
    /// 0 raw → 0%, 4095 raw → 100%.
    Direct,
    /// 0 raw → 100%, 4095 raw → 0%.
    Inverted,
}

/// Map a raw ADC value to a percentage with one decimal place.
pub fn percentage(raw: f64, direction: ScaleDirection) -> f64 {
    let scaled = match direction {
        ScaleDirection::Direct => raw / ADC_MAX * 100.0,
        ScaleDirection::Inverted => (ADC_MAX - raw) / ADC_MAX * 100.0,
    };
    round1(scaled)
}

/// Scale direction for a category, or `None` for categories that are not
/// ADC-scaled (events and passthrough units).
pub fn scale_direction(category: Category) -> Option<ScaleDirection> {
    match category {
        Category::Light | Category::Flame | Category::SoilMoisture => {
            Some(ScaleDirection::Inverted)
        }
        Category::Gas | Category::Sound => Some(ScaleDirection::Direct),
        Category::Motion | Category::Vibration | Category::Humidity | Category::Temperature => None,
    }
}

/// Display value for a raw reading of the given category.
///
/// ADC categories are scaled to a percentage; temperature and humidity pass
/// through unchanged (already °C / %RH); event categories have no magnitude.
pub fn display_percentage(category: Category, raw: f64) -> Option<f64> {
    if category.is_event() {
        return None;
    }
    match scale_direction(category) {
        Some(direction) => Some(percentage(raw, direction)),
        None => Some(raw),
    }
}

/// Light level: 0 raw is brightest (100%).
pub fn light_percentage(raw: f64) -> f64 {
    percentage(raw, ScaleDirection::Inverted)
}

/// Gas concentration: direct scale.
pub fn gas_percentage(raw: f64) -> f64 {
    percentage(raw, ScaleDirection::Direct)
}

/// Flame detection level: 0 raw is full detection (100%).
pub fn flame_percentage(raw: f64) -> f64 {
    percentage(raw, ScaleDirection::Inverted)
}

/// Soil moisture: 0 raw is saturated (100%).
pub fn moisture_percentage(raw: f64) -> f64 {
    percentage(raw, ScaleDirection::Inverted)
}

/// Sound amplitude: direct scale.
pub fn sound_percentage(raw: f64) -> f64 {
    percentage(raw, ScaleDirection::Direct)
}

/// Flame percentage at which the fire alert fires, derived from the raw
/// cutoff through the inverted mapping.
pub fn flame_alert_threshold() -> f64 {
    flame_percentage(FLAME_ALERT_RAW_CUTOFF)
}

/// Whether a flame display percentage is at or above the alert threshold.
pub fn is_fire_alert(percentage: Option<f64>) -> bool {
    percentage.is_some_and(|p| p >= flame_alert_threshold())
}

/// Whether a sound display percentage is at or above the alert threshold.
pub fn is_sound_alert(percentage: Option<f64>) -> bool {
    percentage.is_some_and(|p| p >= SOUND_ALERT_PERCENTAGE)
}

/// Whether a temperature reading is in the heat-warning display state.
pub fn is_heat_warning(celsius: Option<f64>) -> bool {
    celsius.is_some_and(|c| c > HEAT_WARNING_CELSIUS)
}

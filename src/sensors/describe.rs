//! Qualitative descriptions for display percentages.
//!
//! Buckets are half-open `[lo, hi)` intervals on the 0–100 scale, evaluated
//! in ascending order with the first match winning. A missing value always
//! yields "Unknown" rather than an error.

use super::scale::flame_alert_threshold;

/// An upper bound (exclusive) and the label that applies below it.
struct Bucket {
    upper: f64,
    label: &'static str,
}

fn describe(percentage: Option<f64>, buckets: &[Bucket], top: &'static str) -> &'static str {
    let Some(p) = percentage else {
        return "Unknown";
    };
    for bucket in buckets {
        if p < bucket.upper {
            return bucket.label;
        }
    }
    top
}

/// Light level description.
pub fn describe_light(percentage: Option<f64>) -> &'static str {
    describe(
        percentage,
        &[
            Bucket { upper: 20.0, label: "Very Dark" },
            Bucket { upper: 40.0, label: "Dim" },
            Bucket { upper: 60.0, label: "Moderate" },
            Bucket { upper: 80.0, label: "Bright" },
        ],
        "Very Bright",
    )
}

/// Gas concentration description.
pub fn describe_gas(percentage: Option<f64>) -> &'static str {
    describe(
        percentage,
        &[
            Bucket { upper: 25.0, label: "Safe" },
            Bucket { upper: 60.0, label: "Moderate" },
            Bucket { upper: 75.0, label: "Elevated" },
        ],
        "Warning",
    )
}

/// Flame detection description.
///
/// The top bucket boundary is the fire-alert threshold, which is a raw-value
/// cutoff converted to a percentage rather than a fixed percentage.
pub fn describe_flame(percentage: Option<f64>) -> &'static str {
    describe(
        percentage,
        &[
            Bucket { upper: 20.0, label: "Safe" },
            Bucket { upper: 50.0, label: "Low Detection" },
            Bucket { upper: flame_alert_threshold(), label: "Elevated" },
        ],
        "Fire Alert!",
    )
}

/// Soil moisture description.
pub fn describe_moisture(percentage: Option<f64>) -> &'static str {
    describe(
        percentage,
        &[
            Bucket { upper: 20.0, label: "Dry" },
            Bucket { upper: 40.0, label: "Low" },
            Bucket { upper: 70.0, label: "Optimal" },
            Bucket { upper: 90.0, label: "High" },
        ],
        "Saturated",
    )
}

/// Sound level description.
pub fn describe_sound(percentage: Option<f64>) -> &'static str {
    describe(
        percentage,
        &[
            Bucket { upper: 25.0, label: "Quiet" },
            Bucket { upper: 50.0, label: "Moderate" },
            Bucket { upper: 75.0, label: "Loud" },
        ],
        "Very Loud",
    )
}

/// Temperature description (°C, not a percentage).
pub fn describe_temperature(celsius: Option<f64>) -> &'static str {
    describe(
        celsius,
        &[
            Bucket { upper: 10.0, label: "Cold" },
            Bucket { upper: 20.0, label: "Cool" },
            Bucket { upper: 30.0, label: "Warm" },
        ],
        "Hot",
    )
}

/// Relative humidity description (%RH).
pub fn describe_humidity(percentage: Option<f64>) -> &'static str {
    describe(
        percentage,
        &[
            Bucket { upper: 30.0, label: "Dry" },
            Bucket { upper: 60.0, label: "Comfortable" },
            Bucket { upper: 80.0, label: "Humid" },
        ],
        "Very Humid",
    )
}

/// Display gradient for a light-style percentage card.
pub fn gradient_class(percentage: Option<f64>) -> &'static str {
    let Some(p) = percentage else {
        return "from-gray-400 to-gray-500";
    };
    if p < 30.0 {
        "from-orange-800 to-orange-700"
    } else if p < 60.0 {
        "from-orange-700 to-amber-600"
    } else {
        "from-amber-600 to-orange-500"
    }
}

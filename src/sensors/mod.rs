//! Sensor value interpretation: raw-to-percentage scaling, qualitative
//! descriptions, alert predicates, and liveness/age formatting.
//!
//! Everything in this module is pure and stateless; the dashboard routes and
//! tests are the only consumers.

mod describe;
mod scale;
mod status;

pub use describe::{
    describe_flame, describe_gas, describe_humidity, describe_light, describe_moisture,
    describe_sound, describe_temperature, gradient_class,
};
pub use scale::{
    ADC_MAX, ScaleDirection, display_percentage, flame_alert_threshold, flame_percentage,
    gas_percentage, is_fire_alert, is_heat_warning, is_sound_alert, light_percentage,
    moisture_percentage, round1, scale_direction, sound_percentage,
};
pub use status::{format_relative_time, format_relative_time_now, liveness_status, liveness_status_now};

//! Dashboard sensor endpoints.
//!
//! Handlers never touch the database directly; they read the latest
//! delivered snapshot from the category's live subscription and map it to a
//! display-ready card: scaled values, qualitative description, alert flags,
//! liveness status, chart points, and summary stats.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use http::StatusCode;
use serde::Serialize;

use super::AppState;
use crate::{
    models::Category,
    sensors::{
        describe_flame, describe_gas, describe_humidity, describe_light, describe_moisture,
        describe_sound, describe_temperature, display_percentage, format_relative_time,
        gradient_class, is_fire_alert, is_heat_warning, is_sound_alert, liveness_status, round1,
    },
    streaming::Snapshot,
};

/// A single chart point: timestamp plus display value.
#[derive(Debug, Serialize)]
pub struct ChartPoint {
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Min/avg/max over the charted window.
#[derive(Debug, Serialize)]
pub struct SummaryStats {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

/// Display-ready card for one sensor category.
///
/// `value` is a percentage for ADC-scaled categories and a physical unit for
/// temperature/humidity; event categories have no value and report the last
/// event's relative age as their status instead.
#[derive(Debug, Serialize)]
pub struct CategoryCard {
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<&'static str>,
    pub status: String,
    pub alert: bool,
    pub points: Vec<ChartPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SummaryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
}

/// Abbreviated previews of all categories, in the fixed category order.
pub async fn overview(State(state): State<AppState>) -> Json<Vec<CategoryCard>> {
    let now = Utc::now().timestamp_millis();
    let preview_limit = state.config.server.preview_limit as usize;

    let cards = Category::ALL
        .iter()
        .map(|&category| {
            let snapshot = state
                .subscriptions
                .get(&category)
                .and_then(|s| s.latest());
            build_card(category, snapshot.as_ref(), preview_limit, now)
        })
        .collect();

    Json(cards)
}

/// Full detail payload for one category.
pub async fn category_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CategoryCard>, (StatusCode, String)> {
    let category: Category = name
        .parse()
        .map_err(|e: crate::models::UnknownCategory| (StatusCode::NOT_FOUND, e.to_string()))?;

    let now = Utc::now().timestamp_millis();
    let snapshot = state
        .subscriptions
        .get(&category)
        .and_then(|s| s.latest());
    let history_limit = state.config.server.history_limit as usize;

    Ok(Json(build_card(category, snapshot.as_ref(), history_limit, now)))
}

/// Map the tail of a snapshot to a display card.
fn build_card(
    category: Category,
    snapshot: Option<&Snapshot>,
    max_points: usize,
    now: i64,
) -> CategoryCard {
    let readings: &[_] = snapshot.map(|s| s.readings.as_slice()).unwrap_or(&[]);
    let window = &readings[readings.len().saturating_sub(max_points)..];

    let points: Vec<ChartPoint> = window
        .iter()
        .map(|r| ChartPoint {
            timestamp: r.timestamp,
            value: r
                .magnitude(category)
                .and_then(|raw| display_percentage(category, raw)),
        })
        .collect();

    let last_updated = window.last().map(|r| r.timestamp);
    let value = points.last().and_then(|p| p.value);

    let status = if category.is_event() {
        match last_updated {
            Some(ts) => format_relative_time(ts, now),
            None => "No events recorded".to_string(),
        }
    } else {
        liveness_status(last_updated, now)
    };

    let description = match category {
        Category::Light => Some(describe_light(value)),
        Category::Gas => Some(describe_gas(value)),
        Category::Flame => Some(describe_flame(value)),
        Category::SoilMoisture => Some(describe_moisture(value)),
        Category::Sound => Some(describe_sound(value)),
        Category::Temperature => Some(describe_temperature(value)),
        Category::Humidity => Some(describe_humidity(value)),
        Category::Motion | Category::Vibration => None,
    };

    let alert = match category {
        Category::Flame => is_fire_alert(value),
        Category::Sound => is_sound_alert(value),
        Category::Temperature => is_heat_warning(value),
        _ => false,
    };

    let gradient = matches!(category, Category::Light).then(|| gradient_class(value));

    let charted: Vec<f64> = points.iter().filter_map(|p| p.value).collect();
    let stats = (!charted.is_empty()).then(|| {
        let min = charted.iter().copied().fold(f64::INFINITY, f64::min);
        let max = charted.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg = round1(charted.iter().sum::<f64>() / charted.len() as f64);
        SummaryStats { min, avg, max }
    });

    CategoryCard {
        category,
        value,
        description,
        gradient,
        status,
        alert,
        points,
        stats,
        last_updated,
    }
}

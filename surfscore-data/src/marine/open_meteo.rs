//! Open-Meteo Marine API response types.
//!
//! The forecast endpoint returns parallel hourly arrays keyed by variable
//! name, with `null` where the model has no value. Failures are reported in
//! the body as `{"error": true, "reason": "..."}`.
//!
//! See: <https://open-meteo.com/en/docs/marine-weather-api>

use serde::Deserialize;
use surfscore_core::Observation;

/// Hourly variables requested from the marine endpoint, in request order.
pub const HOURLY_VARIABLES: [&str; 7] = [
    "wave_height",
    "wave_period",
    "wave_direction",
    "sea_surface_temperature",
    "sea_level_height_msl",
    "ocean_current_velocity",
    "ocean_current_direction",
];

/// Marine forecast response.
#[derive(Debug, Default, Deserialize)]
pub struct MarineResponse {
    /// Set when the service rejected the request.
    #[serde(default)]
    pub error: bool,

    /// Explanation accompanying `error`.
    pub reason: Option<String>,

    /// Timezone the hourly timestamps are expressed in.
    pub timezone: Option<String>,

    /// Hourly series; absent on error responses.
    pub hourly: Option<HourlySeries>,
}

/// Parallel hourly arrays. Series the model does not cover are omitted or
/// contain `null` cells.
#[derive(Debug, Default, Deserialize)]
pub struct HourlySeries {
    /// Local ISO-8601 timestamps, one per slot.
    #[serde(default)]
    pub time: Vec<String>,
    /// Significant wave height in metres.
    #[serde(default)]
    pub wave_height: Vec<Option<f64>>,
    /// Wave period in seconds.
    #[serde(default)]
    pub wave_period: Vec<Option<f64>>,
    /// Direction the waves arrive from, in degrees.
    #[serde(default)]
    pub wave_direction: Vec<Option<f64>>,
    /// Sea surface temperature in degrees Celsius.
    #[serde(default)]
    pub sea_surface_temperature: Vec<Option<f64>>,
    /// Sea level height relative to mean sea level, in metres.
    #[serde(default)]
    pub sea_level_height_msl: Vec<Option<f64>>,
    /// Ocean current velocity.
    #[serde(default)]
    pub ocean_current_velocity: Vec<Option<f64>>,
    /// Ocean current direction in degrees.
    #[serde(default)]
    pub ocean_current_direction: Vec<Option<f64>>,
}

impl MarineResponse {
    /// Check if the response reports a service-side failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error
    }
}

impl HourlySeries {
    /// Map the first hourly slot onto an observation, or `None` when the
    /// series holds no timestamps.
    #[must_use]
    pub fn first_observation(&self) -> Option<Observation> {
        let timestamp = self.time.first()?;
        Some(Observation {
            timestamp: timestamp.clone(),
            timezone: None,
            wave_height_m: first(&self.wave_height),
            wave_period_s: first(&self.wave_period),
            wave_direction_deg: first(&self.wave_direction),
            tide_height_m: first(&self.sea_level_height_msl),
            sea_surface_temp_c: first(&self.sea_surface_temperature),
            current_velocity_ms: first(&self.ocean_current_velocity),
            current_direction_deg: first(&self.ocean_current_direction),
        })
    }
}

fn first(series: &[Option<f64>]) -> Option<f64> {
    series.first().copied().flatten()
}

//! A single marine-weather sample for one location and hour.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Marine conditions reported for one hourly slot.
///
/// Every measurement is optional: sources mark missing data as `None`
/// rather than failing the whole sample. Only the swell and tide fields feed
/// the score; the remaining readings are informational.
///
/// # Examples
///
/// ```
/// use surfscore_core::Observation;
///
/// let observation = Observation::new("2025-10-16T00:00")
///     .with_swell(Some(1.5), Some(12.0), Some(300.0))
///     .with_tide_height(Some(0.8));
/// assert_eq!(observation.wave_period_s, Some(12.0));
/// assert!(observation.sea_surface_temp_c.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    /// Local timestamp of the slot as reported by the source.
    pub timestamp: String,
    /// Timezone the timestamp is expressed in.
    #[cfg_attr(feature = "serde", serde(default))]
    pub timezone: Option<String>,
    /// Significant wave height in metres.
    pub wave_height_m: Option<f64>,
    /// Wave period in seconds.
    pub wave_period_s: Option<f64>,
    /// Direction the swell arrives from, in compass degrees.
    pub wave_direction_deg: Option<f64>,
    /// Sea-level height used as a tide proxy, in metres.
    pub tide_height_m: Option<f64>,
    /// Sea surface temperature in degrees Celsius.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sea_surface_temp_c: Option<f64>,
    /// Ocean current velocity in metres per second.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_velocity_ms: Option<f64>,
    /// Ocean current direction in compass degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_direction_deg: Option<f64>,
}

impl Observation {
    /// Create an observation for `timestamp` with every measurement absent.
    #[must_use]
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            ..Self::default()
        }
    }

    /// Set the swell height, period and direction.
    #[must_use]
    pub const fn with_swell(
        mut self,
        height_m: Option<f64>,
        period_s: Option<f64>,
        direction_deg: Option<f64>,
    ) -> Self {
        self.wave_height_m = height_m;
        self.wave_period_s = period_s;
        self.wave_direction_deg = direction_deg;
        self
    }

    /// Set the tide-proxy height.
    #[must_use]
    pub const fn with_tide_height(mut self, tide_height_m: Option<f64>) -> Self {
        self.tide_height_m = tide_height_m;
        self
    }

    /// Set the timezone label of the timestamp.
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

//! Score command implementation for the surfscore CLI.

use std::io::Write;
use std::str::FromStr;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use surfscore_core::{
    ConditionScorer, Coordinates, DEFAULT_SPOT_ID, IdealRange, Observation, ObservationSource,
    ScoreResult, Spot, SpotCatalogue, SpotProfile, TideBounds, TidePreference, Weights,
};
use surfscore_data::marine::{
    DEFAULT_BASE_URL, DEFAULT_TIMEZONE, OpenMeteoMarineConfig, OpenMeteoMarineSource,
};
use surfscore_scorer::{WeightedConditionScorer, render_report};

use crate::catalogue::load_catalogue;
use crate::{
    ARG_FORMAT, ARG_IDEAL_HEIGHT_MAX, ARG_IDEAL_HEIGHT_MIN, ARG_IDEAL_PERIOD_MAX,
    ARG_IDEAL_PERIOD_MIN, ARG_LATITUDE, ARG_LONGITUDE, ARG_MARINE_BASE_URL, ARG_ORIENTATION,
    ARG_SPOT, ARG_SPOTS_FILE, ARG_TIDE_FULL_SPAN, ARG_TIDE_HIGH_MAX, ARG_TIDE_HIGH_MIN,
    ARG_TIDE_LOW_MAX, ARG_TIDE_PREFERENCE, ARG_TIMEZONE, ARG_WEIGHT_ORIENTATION,
    ARG_WEIGHT_RANGE, ARG_WEIGHT_TIDE, CliError, ENV_LATITUDE, ENV_LONGITUDE,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Fetch the first available hourly marine observation for a \
                 catalogue spot and score it out of 100. Any field of the \
                 spot profile and the aggregation weights can be overridden \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Score the current surf conditions at a spot"
)]
#[ortho_config(prefix = "SURFSCORE")]
pub(crate) struct ScoreArgs {
    /// Identifier of the catalogue spot to score.
    #[arg(long = ARG_SPOT, value_name = "id")]
    #[serde(default)]
    pub(crate) spot: Option<String>,
    /// JSON spot catalogue replacing the built-in spots.
    #[arg(long = ARG_SPOTS_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) spots_file: Option<Utf8PathBuf>,
    /// Latitude to query instead of the spot's own.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude to query instead of the spot's own.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Compass bearing the spot faces.
    #[arg(long = ARG_ORIENTATION, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) orientation: Option<f64>,
    /// Preferred tide state (`low`, `mid` or `high`).
    #[arg(long = ARG_TIDE_PREFERENCE, value_name = "state")]
    #[serde(default)]
    pub(crate) tide_preference: Option<String>,
    /// Lower bound of the ideal wave height, in metres.
    #[arg(long = ARG_IDEAL_HEIGHT_MIN, value_name = "metres")]
    #[serde(default)]
    pub(crate) ideal_height_min: Option<f64>,
    /// Upper bound of the ideal wave height, in metres.
    #[arg(long = ARG_IDEAL_HEIGHT_MAX, value_name = "metres")]
    #[serde(default)]
    pub(crate) ideal_height_max: Option<f64>,
    /// Lower bound of the ideal wave period, in seconds.
    #[arg(long = ARG_IDEAL_PERIOD_MIN, value_name = "seconds")]
    #[serde(default)]
    pub(crate) ideal_period_min: Option<f64>,
    /// Upper bound of the ideal wave period, in seconds.
    #[arg(long = ARG_IDEAL_PERIOD_MAX, value_name = "seconds")]
    #[serde(default)]
    pub(crate) ideal_period_max: Option<f64>,
    /// Weight of the swell range sub-score.
    #[arg(long = ARG_WEIGHT_RANGE, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_range: Option<f64>,
    /// Weight of the orientation sub-score.
    #[arg(long = ARG_WEIGHT_ORIENTATION, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_orientation: Option<f64>,
    /// Weight of the tide sub-score.
    #[arg(long = ARG_WEIGHT_TIDE, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_tide: Option<f64>,
    /// Tide-proxy height at or below which the tide counts as low.
    #[arg(long = ARG_TIDE_LOW_MAX, value_name = "metres", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) tide_low_max: Option<f64>,
    /// Tide-proxy height at which the high band starts.
    #[arg(long = ARG_TIDE_HIGH_MIN, value_name = "metres", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) tide_high_min: Option<f64>,
    /// Tide-proxy height at which the high-tide score saturates.
    #[arg(long = ARG_TIDE_HIGH_MAX, value_name = "metres", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) tide_high_max: Option<f64>,
    /// Full tidal span used by the mid-tide preference.
    #[arg(long = ARG_TIDE_FULL_SPAN, value_name = "metres")]
    #[serde(default)]
    pub(crate) tide_full_span: Option<f64>,
    /// Timezone requested from the marine service (e.g. "Europe/Paris").
    #[arg(long = ARG_TIMEZONE, value_name = "tz")]
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    /// Base URL of the marine forecast service.
    #[arg(long = ARG_MARINE_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) marine_base_url: Option<String>,
    /// Output format (`text` or `json`).
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<String>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// How the score is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// Pretty-printed `ScoreResult`.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CliError::UnknownFormat {
                value: s.to_owned(),
            }),
        }
    }
}

/// Explicit spot profile settings layered over the catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct ProfileOverrides {
    pub(crate) orientation_deg: Option<f64>,
    pub(crate) tide_preference: Option<TidePreference>,
    pub(crate) ideal_height_min: Option<f64>,
    pub(crate) ideal_height_max: Option<f64>,
    pub(crate) ideal_period_min: Option<f64>,
    pub(crate) ideal_period_max: Option<f64>,
    pub(crate) tide_low_max: Option<f64>,
    pub(crate) tide_high_min: Option<f64>,
    pub(crate) tide_high_max: Option<f64>,
    pub(crate) tide_full_span: Option<f64>,
}

impl ProfileOverrides {
    /// Return `base` with every configured override applied.
    pub(crate) fn apply(self, base: SpotProfile) -> SpotProfile {
        SpotProfile {
            orientation_deg: self.orientation_deg.unwrap_or(base.orientation_deg),
            tide_preference: self.tide_preference.unwrap_or(base.tide_preference),
            ideal_height: IdealRange::new(
                self.ideal_height_min.unwrap_or(base.ideal_height.min),
                self.ideal_height_max.unwrap_or(base.ideal_height.max),
            ),
            ideal_period: IdealRange::new(
                self.ideal_period_min.unwrap_or(base.ideal_period.min),
                self.ideal_period_max.unwrap_or(base.ideal_period.max),
            ),
            tide: TideBounds {
                low_max: self.tide_low_max.unwrap_or(base.tide.low_max),
                high_min: self.tide_high_min.unwrap_or(base.tide.high_min),
                high_max: self.tide_high_max.unwrap_or(base.tide.high_max),
                full_span: self.tide_full_span.unwrap_or(base.tide.full_span),
            },
        }
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    /// Catalogue identifier of the spot to score.
    pub(crate) spot_id: String,
    /// Optional replacement catalogue.
    pub(crate) spots_file: Option<Utf8PathBuf>,
    /// Query position overriding the spot's coordinates.
    pub(crate) location: Option<Coordinates>,
    pub(crate) profile: ProfileOverrides,
    pub(crate) weights: Weights,
    pub(crate) timezone: String,
    pub(crate) marine_base_url: String,
    pub(crate) format: OutputFormat,
}

impl ScoreConfig {
    /// Look up the configured spot and apply the profile and location
    /// overrides.
    pub(crate) fn resolve_spot(&self, catalogue: &SpotCatalogue) -> Result<Spot, CliError> {
        let base = catalogue
            .get(&self.spot_id)
            .ok_or_else(|| CliError::UnknownSpot {
                id: self.spot_id.clone(),
            })?;
        let profile = self.profile.apply(base.profile);
        profile
            .validate()
            .map_err(|source| CliError::InvalidProfile {
                spot: base.id.clone(),
                source,
            })?;
        Ok(Spot {
            coordinates: self.location.unwrap_or(base.coordinates),
            profile,
            ..base.clone()
        })
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let location = resolve_location(args.latitude, args.longitude)?;
        let tide_preference = args
            .tide_preference
            .as_deref()
            .map(str::parse::<TidePreference>)
            .transpose()
            .map_err(CliError::TidePreference)?;
        let defaults = Weights::default();
        let weights = Weights::new(
            args.weight_range.unwrap_or(defaults.range),
            args.weight_orientation.unwrap_or(defaults.orientation),
            args.weight_tide.unwrap_or(defaults.tide),
        )
        .validate()
        .map_err(CliError::InvalidWeights)?;
        let format = args
            .format
            .as_deref()
            .map(str::parse::<OutputFormat>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            spot_id: args.spot.unwrap_or_else(|| DEFAULT_SPOT_ID.to_owned()),
            spots_file: args.spots_file,
            location,
            profile: ProfileOverrides {
                orientation_deg: args.orientation,
                tide_preference,
                ideal_height_min: args.ideal_height_min,
                ideal_height_max: args.ideal_height_max,
                ideal_period_min: args.ideal_period_min,
                ideal_period_max: args.ideal_period_max,
                tide_low_max: args.tide_low_max,
                tide_high_min: args.tide_high_min,
                tide_high_max: args.tide_high_max,
                tide_full_span: args.tide_full_span,
            },
            weights,
            timezone: args
                .timezone
                .unwrap_or_else(|| DEFAULT_TIMEZONE.to_owned()),
            marine_base_url: args
                .marine_base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            format,
        })
    }
}

fn resolve_location(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Option<Coordinates>, CliError> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => Coordinates::new(lat, lon)
            .map(Some)
            .map_err(CliError::InvalidLocation),
        (None, None) => Ok(None),
        (Some(_), None) => Err(CliError::MissingArgument {
            field: ARG_LONGITUDE,
            env: ENV_LONGITUDE,
        }),
        (None, Some(_)) => Err(CliError::MissingArgument {
            field: ARG_LATITUDE,
            env: ENV_LATITUDE,
        }),
    }
}

/// Builds the observation source for the current score invocation.
pub(super) trait ObservationSourceBuilder {
    fn build(&self, config: &ScoreConfig) -> Result<Box<dyn ObservationSource>, CliError>;
}

pub(super) struct DefaultObservationSourceBuilder;

impl ObservationSourceBuilder for DefaultObservationSourceBuilder {
    fn build(&self, config: &ScoreConfig) -> Result<Box<dyn ObservationSource>, CliError> {
        let marine = OpenMeteoMarineConfig::new(config.marine_base_url.clone())
            .with_timezone(config.timezone.clone());
        let source = OpenMeteoMarineSource::with_config(marine).map_err(|source| {
            CliError::BuildObservationSource {
                base_url: config.marine_base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(source))
    }
}

/// A spot together with the observation fetched for it and its score.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ScoredSpot {
    pub(super) spot: Spot,
    pub(super) observation: Observation,
    pub(super) result: ScoreResult,
}

pub(super) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultObservationSourceBuilder;
    run_score_with(args, &builder, &mut stdout)
}

pub(super) fn run_score_with(
    args: ScoreArgs,
    builder: &dyn ObservationSourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let scored = execute_score(&config, builder)?;
    write_scored(writer, &config, &scored)
}

pub(super) fn execute_score(
    config: &ScoreConfig,
    builder: &dyn ObservationSourceBuilder,
) -> Result<ScoredSpot, CliError> {
    let catalogue = load_catalogue(config.spots_file.as_deref())?;
    let spot = config.resolve_spot(&catalogue)?;
    let scorer = WeightedConditionScorer::new(config.weights).map_err(CliError::InvalidWeights)?;
    let source = builder.build(config)?;
    debug!(
        "fetching observation for {} at ({}, {})",
        spot.id, spot.coordinates.latitude, spot.coordinates.longitude
    );
    let observation = source
        .fetch_observation(spot.coordinates)
        .map_err(|source| CliError::FetchObservation {
            spot: spot.id.clone(),
            source,
        })?;
    let result = scorer.score(&observation, &spot.profile);
    Ok(ScoredSpot {
        spot,
        observation,
        result,
    })
}

pub(super) fn write_scored(
    writer: &mut dyn Write,
    config: &ScoreConfig,
    scored: &ScoredSpot,
) -> Result<(), CliError> {
    let payload = match config.format {
        OutputFormat::Text => render_report(
            &scored.observation,
            &scored.spot.profile,
            &config.weights,
            &scored.result,
        ),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&scored.result).map_err(CliError::SerialiseScore)?;
            json.push('\n');
            json
        }
    };
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}

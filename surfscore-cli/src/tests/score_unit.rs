//! Focused unit tests covering score CLI configuration and output.

use super::helpers::{
    REEF_CATALOGUE, StubSourceBuilder, reference_observation, temp_root, write_utf8,
};
use crate::score::{
    OutputFormat, ProfileOverrides, ScoreArgs, ScoreConfig, config_from_layers_for_test,
    execute_score, write_scored,
};
use crate::{ARG_LATITUDE, ARG_LONGITUDE, CliError, ENV_LATITUDE, ENV_LONGITUDE};
use rstest::{fixture, rstest};
use surfscore_core::{
    Coordinates, DEFAULT_SPOT_ID, ObservationError, ScoreResult, SpotCatalogue, SpotProfile,
    SpotProfileError, TidePreference, Weights, WeightsError,
};
use surfscore_data::marine::{DEFAULT_BASE_URL, DEFAULT_TIMEZONE};

#[fixture]
fn default_config() -> ScoreConfig {
    ScoreConfig::try_from(ScoreArgs::default()).expect("defaults should convert")
}

#[rstest]
fn converting_defaults_selects_reference_spot(default_config: ScoreConfig) {
    assert_eq!(default_config.spot_id, DEFAULT_SPOT_ID);
    assert_eq!(default_config.spots_file, None);
    assert_eq!(default_config.location, None);
    assert_eq!(default_config.profile, ProfileOverrides::default());
    assert_eq!(default_config.weights, Weights::default());
    assert_eq!(default_config.timezone, DEFAULT_TIMEZONE);
    assert_eq!(default_config.marine_base_url, DEFAULT_BASE_URL);
    assert_eq!(default_config.format, OutputFormat::Text);
}

#[rstest]
#[case(Some(43.5), None, ARG_LONGITUDE, ENV_LONGITUDE)]
#[case(None, Some(-1.5), ARG_LATITUDE, ENV_LATITUDE)]
fn converting_half_a_location_errors(
    #[case] latitude: Option<f64>,
    #[case] longitude: Option<f64>,
    #[case] expected_field: &'static str,
    #[case] expected_env: &'static str,
) {
    let args = ScoreArgs {
        latitude,
        longitude,
        ..ScoreArgs::default()
    };

    let err = ScoreConfig::try_from(args).expect_err("half a location should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_out_of_range_location_errors() {
    let args = ScoreArgs {
        latitude: Some(91.0),
        longitude: Some(0.0),
        ..ScoreArgs::default()
    };

    let err = ScoreConfig::try_from(args).expect_err("latitude beyond the pole should error");
    match err {
        CliError::InvalidLocation(ObservationError::InvalidCoordinates { .. }) => {}
        other => panic!("expected InvalidLocation, found {other:?}"),
    }
}

#[rstest]
fn converting_unknown_tide_preference_errors() {
    let args = ScoreArgs {
        tide_preference: Some("slack".to_owned()),
        ..ScoreArgs::default()
    };

    let err = ScoreConfig::try_from(args).expect_err("unknown preference should error");
    match err {
        CliError::TidePreference(SpotProfileError::UnknownTidePreference { value }) => {
            assert_eq!(value, "slack");
        }
        other => panic!("expected TidePreference, found {other:?}"),
    }
}

#[rstest]
fn converting_negative_weight_errors() {
    let args = ScoreArgs {
        weight_tide: Some(-0.1),
        ..ScoreArgs::default()
    };

    let err = ScoreConfig::try_from(args).expect_err("negative weight should error");
    match err {
        CliError::InvalidWeights(source) => assert_eq!(source, WeightsError::Negative),
        other => panic!("expected InvalidWeights, found {other:?}"),
    }
}

#[rstest]
#[case("json", OutputFormat::Json)]
#[case("JSON", OutputFormat::Json)]
#[case("text", OutputFormat::Text)]
fn converting_format_is_case_insensitive(#[case] format: &str, #[case] expected: OutputFormat) {
    let args = ScoreArgs {
        format: Some(format.to_owned()),
        ..ScoreArgs::default()
    };

    let config = ScoreConfig::try_from(args).expect("format should parse");
    assert_eq!(config.format, expected);
}

#[rstest]
fn converting_unknown_format_errors() {
    let args = ScoreArgs {
        format: Some("yaml".to_owned()),
        ..ScoreArgs::default()
    };

    let err = ScoreConfig::try_from(args).expect_err("unknown format should error");
    match err {
        CliError::UnknownFormat { value } => assert_eq!(value, "yaml"),
        other => panic!("expected UnknownFormat, found {other:?}"),
    }
}

#[rstest]
fn resolving_spot_applies_overrides(mut default_config: ScoreConfig) {
    default_config.location = Some(Coordinates {
        latitude: 43.5,
        longitude: -1.5,
    });
    default_config.profile = ProfileOverrides {
        orientation_deg: Some(250.0),
        tide_preference: Some(TidePreference::High),
        ideal_height_max: Some(3.0),
        ..ProfileOverrides::default()
    };

    let spot = default_config
        .resolve_spot(&SpotCatalogue::builtin())
        .expect("spot should resolve");

    let reference = SpotProfile::default();
    assert_eq!(spot.id, DEFAULT_SPOT_ID);
    assert_eq!(spot.coordinates.latitude, 43.5);
    assert_eq!(spot.coordinates.longitude, -1.5);
    assert_eq!(spot.profile.orientation_deg, 250.0);
    assert_eq!(spot.profile.tide_preference, TidePreference::High);
    assert_eq!(spot.profile.ideal_height.min, reference.ideal_height.min);
    assert_eq!(spot.profile.ideal_height.max, 3.0);
    assert_eq!(spot.profile.ideal_period, reference.ideal_period);
    assert_eq!(spot.profile.tide, reference.tide);
}

#[rstest]
fn resolving_unknown_spot_errors(mut default_config: ScoreConfig) {
    default_config.spot_id = "atlantis".to_owned();

    let err = default_config
        .resolve_spot(&SpotCatalogue::builtin())
        .expect_err("unknown spot should error");
    match err {
        CliError::UnknownSpot { id } => assert_eq!(id, "atlantis"),
        other => panic!("expected UnknownSpot, found {other:?}"),
    }
}

#[rstest]
fn resolving_inverted_range_errors(mut default_config: ScoreConfig) {
    default_config.profile.ideal_height_min = Some(3.0);

    let err = default_config
        .resolve_spot(&SpotCatalogue::builtin())
        .expect_err("inverted range should error");
    match err {
        CliError::InvalidProfile { spot, source } => {
            assert_eq!(spot, DEFAULT_SPOT_ID);
            assert!(matches!(source, SpotProfileError::InvalidRange { .. }));
        }
        other => panic!("expected InvalidProfile, found {other:?}"),
    }
}

#[rstest]
fn executing_score_uses_fetched_observation(default_config: ScoreConfig) {
    let builder = StubSourceBuilder::returning(reference_observation());

    let scored = execute_score(&default_config, &builder).expect("score should succeed");

    assert_eq!(scored.spot.id, DEFAULT_SPOT_ID);
    assert_eq!(scored.observation, reference_observation());
    assert_eq!(scored.result.overall, Some(90));
}

#[rstest]
fn executing_score_with_custom_catalogue(mut default_config: ScoreConfig) {
    let (_tmp, root) = temp_root();
    let path = root.join("spots.json");
    write_utf8(&path, REEF_CATALOGUE.as_bytes());
    default_config.spots_file = Some(path);
    default_config.spot_id = "test-reef".to_owned();
    let builder = StubSourceBuilder::returning(reference_observation());

    let scored = execute_score(&default_config, &builder).expect("score should succeed");

    assert_eq!(scored.spot.name, "Test Reef");
    assert_eq!(scored.spot.profile.tide_preference, TidePreference::Low);
    // 0.8 m is the low-tide ceiling, so a low-tide spot scores zero for tide.
    assert_eq!(scored.result.sub_scores.tide, Some(0.0));
}

#[rstest]
fn executing_score_reports_fetch_failures(default_config: ScoreConfig) {
    let builder = StubSourceBuilder::failing(ObservationError::NetworkError {
        url: "https://marine-api.open-meteo.com/v1/marine".to_owned(),
        message: "connection refused".to_owned(),
    });

    let err = execute_score(&default_config, &builder).expect_err("fetch should fail");
    match err {
        CliError::FetchObservation { spot, source } => {
            assert_eq!(spot, DEFAULT_SPOT_ID);
            assert!(matches!(source, ObservationError::NetworkError { .. }));
        }
        other => panic!("expected FetchObservation, found {other:?}"),
    }
}

#[rstest]
fn writing_text_prints_report(default_config: ScoreConfig) {
    let builder = StubSourceBuilder::returning(reference_observation());
    let scored = execute_score(&default_config, &builder).expect("score should succeed");
    let mut buffer = Vec::new();

    write_scored(&mut buffer, &default_config, &scored).expect("write should succeed");

    let stdout = String::from_utf8(buffer).expect("stdout utf-8");
    assert!(stdout.starts_with("=== Ideal conditions (spot profile) ===\n"));
    assert!(stdout.contains("• Local time           : 2025-10-16T00:00 (Europe/Paris)\n"));
    assert!(
        stdout.ends_with("SCORE = 90/100  (weights: range=0.6, orientation=0.25, tide=0.15)\n")
    );
}

#[rstest]
fn writing_json_prints_score_result(mut default_config: ScoreConfig) {
    default_config.format = OutputFormat::Json;
    let builder = StubSourceBuilder::returning(reference_observation());
    let scored = execute_score(&default_config, &builder).expect("score should succeed");
    let mut buffer = Vec::new();

    write_scored(&mut buffer, &default_config, &scored).expect("write should succeed");

    let stdout = String::from_utf8(buffer).expect("stdout utf-8");
    assert!(stdout.ends_with("}\n"));
    let decoded: ScoreResult = serde_json::from_str(&stdout).expect("output should be JSON");
    assert_eq!(decoded, scored.result);
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "weight_range": "heavy" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "spot": "hossegor-plage-nord",
            "timezone": "UTC",
            "weight_range": 0.2,
        }),
        None,
    );
    composer.push_environment(json!({
        "spot": "hossegor-la-graviere",
        "weight_range": 0.5,
        "tide_preference": "high",
    }));
    composer.push_cli(json!({
        "spot": "test-reef",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.spot_id, "test-reef");
    assert_eq!(config.timezone, "UTC");
    assert_eq!(config.weights, Weights::new(0.5, 0.25, 0.15));
    assert_eq!(config.profile.tide_preference, Some(TidePreference::High));
    assert_eq!(config.marine_base_url, DEFAULT_BASE_URL);
}

//! Focused unit tests covering trip CLI configuration and request handling.

use super::helpers::{EAST_COAST_REQUEST, OUT_OF_RANGE_REQUEST, Workspace, trip_args};
use super::*;
use crate::plan::{TripArgs, TripConfig, config_from_layers_for_test, load_trip_request};
use chrono::{NaiveDate, NaiveTime};
use haulage_core::{HosRules, HosRulesError, LogStart, TripInputError, default_start_time};
use rstest::rstest;
use serde_json::{Value, json};

fn march_11() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 11).expect("valid date")
}

#[rstest]
fn converting_without_request_errors() {
    let args = TripArgs {
        request_path: None,
        ..TripArgs::default()
    };

    let err = TripConfig::try_from(args).expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(env, ENV_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn trip_config_applies_start_and_speed() {
    let args = TripArgs {
        start_time: Some("21:30".to_owned()),
        average_speed_mph: Some(55.0),
        output: Some("out/plan.json".into()),
        ..trip_args("request.json".into())
    };

    let config = TripConfig::try_from(args).expect("config should build");
    assert_eq!(config.request_path, "request.json");
    assert_eq!(
        config.start,
        LogStart::new(march_11(), NaiveTime::from_hms_opt(21, 30, 0).expect("valid time"))
    );
    assert_eq!(config.rules, HosRules::default().with_average_speed(55.0));
    assert_eq!(config.output.as_deref().map(|path| path.as_str()), Some("out/plan.json"));
}

#[rstest]
fn trip_config_defaults_time_and_rules() {
    let config = TripConfig::try_from(TripArgs {
        request_path: Some("request.json".into()),
        ..TripArgs::default()
    })
    .expect("config should build");

    assert_eq!(config.start.time, default_start_time());
    assert_eq!(config.rules, HosRules::default());
    assert_eq!(config.output, None);
}

#[rstest]
#[case::month_out_of_range("2024-13-01")]
#[case::day_first("11/03/2024")]
#[case::blank("")]
fn trip_config_rejects_bad_dates(#[case] value: &str) {
    let args = TripArgs {
        start_date: Some(value.to_owned()),
        ..trip_args("request.json".into())
    };

    match TripConfig::try_from(args).expect_err("bad date should error") {
        CliError::InvalidStartDate { value: rejected, .. } => assert_eq!(rejected, value),
        other => panic!("expected InvalidStartDate, found {other:?}"),
    }
}

#[rstest]
#[case::hour_out_of_range("25:00")]
#[case::twelve_hour_clock("8am")]
fn trip_config_rejects_bad_times(#[case] value: &str) {
    let args = TripArgs {
        start_time: Some(value.to_owned()),
        ..trip_args("request.json".into())
    };

    match TripConfig::try_from(args).expect_err("bad time should error") {
        CliError::InvalidStartTime { value: rejected, .. } => assert_eq!(rejected, value),
        other => panic!("expected InvalidStartTime, found {other:?}"),
    }
}

#[rstest]
#[case::zero(0.0)]
#[case::negative(-20.0)]
#[case::not_a_number(f64::NAN)]
fn trip_config_rejects_non_positive_speed(#[case] speed: f64) {
    let args = TripArgs {
        average_speed_mph: Some(speed),
        ..trip_args("request.json".into())
    };

    match TripConfig::try_from(args).expect_err("bad speed should error") {
        CliError::InvalidRules(HosRulesError::NonPositive { field, .. }) => {
            assert_eq!(field, "average_speed_mph");
        }
        other => panic!("expected InvalidRules, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_request() {
    let workspace = Workspace::new();
    let config = TripConfig::try_from(trip_args(workspace.path("missing.json")))
        .expect("config should build");

    match config.validate_sources().expect_err("expected failure") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_REQUEST),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    std::fs::create_dir(&request_path).expect("request directory");
    let config =
        TripConfig::try_from(trip_args(request_path.clone())).expect("config should build");

    match config
        .validate_sources()
        .expect_err("expected directory path to fail validation")
    {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_trip_request_decodes_json() {
    let workspace = Workspace::new();
    let request_path = workspace.request(EAST_COAST_REQUEST);

    let trip = load_trip_request(&request_path).expect("request should decode");
    assert_eq!(trip.pickup.name, "Philadelphia, PA");
    assert_eq!(trip.driver_name.as_deref(), Some("John Doe"));
    assert_eq!(trip.validate(), Ok(()));
}

#[rstest]
fn load_trip_request_rejects_invalid_json() {
    let workspace = Workspace::new();
    let request_path = workspace.request("{ not valid json");

    match load_trip_request(&request_path).expect_err("invalid json should error") {
        CliError::ParseTripRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected ParseTripRequest, found {other:?}"),
    }
}

#[rstest]
fn load_trip_request_io_error_returns_read_error() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");

    match load_trip_request(&request_path).expect_err("missing request should error") {
        CliError::ReadTripRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected ReadTripRequest, found {other:?}"),
    }
}

#[rstest]
fn run_plan_prints_the_trip_plan() {
    let workspace = Workspace::new();
    let args = trip_args(workspace.request(EAST_COAST_REQUEST));
    let mut stdout = Vec::new();

    run_plan_with(args, &mut stdout).expect("plan should succeed");

    let plan: Value = serde_json::from_slice(&stdout).expect("output should be JSON");
    let stops = plan["route"]["stops"].as_array().expect("stops array");
    assert_eq!(stops.len(), 2, "a short trip needs no extra stops");
    assert_eq!(stops.last().map(|stop| &stop["stop_type"]), Some(&json!("dropoff")));
    assert_eq!(plan["summary"]["rest_breaks_needed"], json!(0));
    assert_eq!(plan["daily_logs"][0]["date"], json!("2024-03-11"));
    assert_eq!(plan["daily_logs"][0]["home_terminal"], json!("Newark, NJ"));
}

#[rstest]
fn run_logs_prints_only_daily_logs() {
    let workspace = Workspace::new();
    let args = trip_args(workspace.request(EAST_COAST_REQUEST));
    let mut stdout = Vec::new();

    run_logs_with(args, &mut stdout).expect("logs should succeed");

    let logs: Value = serde_json::from_slice(&stdout).expect("output should be JSON");
    let sheets = logs.as_array().expect("daily logs array");
    assert_eq!(sheets.len(), 1);
    let [sheet] = sheets.as_slice() else {
        panic!("expected one daily log");
    };
    assert_eq!(sheet["driver_name"], json!("John Doe"));
    let statuses: Vec<&str> = sheet["entries"]
        .as_array()
        .expect("entries array")
        .iter()
        .filter_map(|entry| entry["status"].as_str())
        .collect();
    assert_eq!(statuses, ["driving", "on_duty", "driving", "on_duty"]);
}

#[rstest]
fn run_plan_writes_output_file() {
    let workspace = Workspace::new();
    let output = workspace.path("plans/east/plan.json");
    let args = TripArgs {
        output: Some(output.clone()),
        ..trip_args(workspace.request(EAST_COAST_REQUEST))
    };
    let mut stdout = Vec::new();

    run_plan_with(args, &mut stdout).expect("plan should succeed");

    assert!(stdout.is_empty(), "output file replaces stdout");
    let written = std::fs::read_to_string(&output).expect("output file");
    let plan: Value = serde_json::from_str(&written).expect("output should be JSON");
    assert!(plan["summary"]["total_distance"].as_f64() > Some(0.0));
}

#[rstest]
fn run_plan_rejects_invalid_trip() {
    let workspace = Workspace::new();
    let request_path = workspace.request(OUT_OF_RANGE_REQUEST);
    let mut stdout = Vec::new();

    match run_plan_with(trip_args(request_path.clone()), &mut stdout)
        .expect_err("out-of-range pickup should error")
    {
        CliError::InvalidTripRequest { path, source } => {
            assert_eq!(path, request_path);
            assert_eq!(
                source,
                TripInputError::InvalidLatitude {
                    role: "pickup",
                    value: 95.0,
                }
            );
        }
        other => panic!("expected InvalidTripRequest, found {other:?}"),
    }
    assert!(stdout.is_empty());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

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

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "start_time": "06:30",
            "average_speed_mph": 50.0,
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": "from-env.json",
        "start_time": "07:15",
    }));
    composer.push_cli(json!({
        "start_date": "2024-03-11",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, "from-env.json");
    assert_eq!(
        config.start,
        LogStart::new(march_11(), NaiveTime::from_hms_opt(7, 15, 0).expect("valid time"))
    );
    assert_eq!(config.rules, HosRules::default().with_average_speed(50.0));
}

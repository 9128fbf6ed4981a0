//! `plan` and `logs` command implementation for the Haulage CLI.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Parser;
use haulage_core::{HosRules, LogStart, TripInput, TripPlan, TripPlanner, default_start_time};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_AVERAGE_SPEED, ARG_OUTPUT, ARG_REQUEST, ARG_START_DATE, ARG_START_TIME, CliError,
    ENV_REQUEST,
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// CLI arguments shared by the `plan` and `logs` subcommands.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "trip",
    long_about = "Plan a trip from a JSON-encoded request holding the \
                 current, pickup and dropoff locations and the cycle hours \
                 already used. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Plan a trip request"
)]
#[ortho_config(prefix = "HAULAGE")]
pub(crate) struct TripArgs {
    /// Path to a JSON file containing the trip request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Departure date as YYYY-MM-DD (defaults to today).
    #[arg(long = ARG_START_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) start_date: Option<String>,
    /// Departure time as HH:MM (defaults to 08:00).
    #[arg(long = ARG_START_TIME, value_name = "time")]
    #[serde(default)]
    pub(crate) start_time: Option<String>,
    /// Average driving speed used to convert miles to hours.
    #[arg(long = ARG_AVERAGE_SPEED, value_name = "mph")]
    #[serde(default)]
    pub(crate) average_speed_mph: Option<f64>,
    /// Write the JSON output to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TripArgs {
    pub(crate) fn into_config(self) -> Result<TripConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TripConfig::try_from(merged)
    }
}

/// Resolved configuration for a single planning run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TripConfig {
    /// Path to the JSON trip request.
    pub(crate) request_path: Utf8PathBuf,
    /// Where the first daily log begins.
    pub(crate) start: LogStart,
    /// Validated planning rules.
    pub(crate) rules: HosRules,
    /// Optional output file; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TripConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match haulage_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<TripArgs> for TripConfig {
    type Error = CliError;

    fn try_from(args: TripArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;

        let date = match args.start_date {
            Some(value) => parse_start_date(value)?,
            None => Local::now().date_naive(),
        };
        let time = match args.start_time {
            Some(value) => parse_start_time(value)?,
            None => default_start_time(),
        };

        let defaults = HosRules::default();
        let rules = defaults.with_average_speed(
            args.average_speed_mph
                .unwrap_or(defaults.average_speed_mph),
        );
        rules.validate().map_err(CliError::InvalidRules)?;

        Ok(Self {
            request_path,
            start: LogStart::new(date, time),
            rules,
            output: args.output,
        })
    }
}

fn parse_start_date(value: String) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(&value, DATE_FORMAT)
        .map_err(|source| CliError::InvalidStartDate { value, source })
}

fn parse_start_time(value: String) -> Result<NaiveTime, CliError> {
    NaiveTime::parse_from_str(&value, TIME_FORMAT)
        .map_err(|source| CliError::InvalidStartTime { value, source })
}

pub(crate) fn run_plan_with(args: TripArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let (config, plan) = execute_plan(args)?;
    write_output(config.output.as_deref(), writer, &plan)
}

pub(crate) fn run_logs_with(args: TripArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let (config, plan) = execute_plan(args)?;
    write_output(config.output.as_deref(), writer, &plan.daily_logs)
}

fn execute_plan(args: TripArgs) -> Result<(TripConfig, TripPlan), CliError> {
    let config = resolve_trip_config(args)?;
    let trip = load_trip_request(&config.request_path)?;
    trip.validate()
        .map_err(|source| CliError::InvalidTripRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let planner = TripPlanner::new(config.rules).map_err(CliError::InvalidRules)?;
    let plan = planner.plan(&trip, config.start);
    Ok((config, plan))
}

fn resolve_trip_config(args: TripArgs) -> Result<TripConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`TripInput`] from disk.
pub(crate) fn load_trip_request(path: &Utf8Path) -> Result<TripInput, CliError> {
    let payload =
        haulage_fs::read_to_string(path).map_err(|source| CliError::ReadTripRequest {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&payload).map_err(|source| CliError::ParseTripRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_output<T: Serialize + ?Sized>(
    output: Option<&Utf8Path>,
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    let Some(path) = output else {
        return write_payload(writer, &payload).map_err(CliError::WriteOutput);
    };
    let to_file_error = |source: std::io::Error| CliError::WriteOutputFile {
        path: path.to_path_buf(),
        source,
    };
    let mut file = haulage_fs::create_file(path).map_err(to_file_error)?;
    write_payload(&mut file, &payload).map_err(to_file_error)
}

fn write_payload(writer: &mut dyn Write, payload: &str) -> std::io::Result<()> {
    writer.write_all(payload.as_bytes())?;
    writer.write_all(b"\n")
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<TripConfig, CliError> {
    let merged = TripArgs::merge_from_layers(layers).map_err(CliError::from)?;
    TripConfig::try_from(merged)
}

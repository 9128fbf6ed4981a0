//! Error types emitted by the Haulage CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use haulage_core::{HosRulesError, TripInputError};
use thiserror::Error;

/// Errors emitted by the Haulage CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set <{field}> or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading the trip request file failed.
    #[error("failed to read trip request at {path:?}: {source}")]
    ReadTripRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Trip request JSON could not be decoded.
    #[error("failed to parse trip request JSON at {path:?}: {source}")]
    ParseTripRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The trip request payload failed validation.
    #[error("trip request in {path:?} failed validation: {source}")]
    InvalidTripRequest {
        path: Utf8PathBuf,
        #[source]
        source: TripInputError,
    },
    /// The merged planning rules were rejected.
    #[error("invalid planning rules: {0}")]
    InvalidRules(#[source] HosRulesError),
    /// The start date was not a `YYYY-MM-DD` calendar date.
    #[error("invalid --start-date {value:?}: {source}")]
    InvalidStartDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// The start time was not an `HH:MM` clock time.
    #[error("invalid --start-time {value:?}: {source}")]
    InvalidStartTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Creating or writing the `--output` file failed.
    #[error("failed to write output file {path:?}: {source}")]
    WriteOutputFile {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

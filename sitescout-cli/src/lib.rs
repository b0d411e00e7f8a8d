//! Command-line interface for the sitescout evaluation engine.
//!
//! Each subcommand reads a JSON request file, runs the corresponding pure
//! pipeline, and writes a JSON response to stdout. Request paths and
//! options can come from CLI flags, configuration files, or `SITESCOUT_*`
//! environment variables.
#![forbid(unsafe_code)]

use std::io::{BufReader, Write};
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

mod batch;
mod cluster;
mod evaluate;

pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_FEATURES: &str = "features";
pub(crate) const ARG_CLUSTERS: &str = "clusters";
pub(crate) const ENV_EVALUATE_REQUEST: &str = "SITESCOUT_CMDS_EVALUATE_REQUEST_PATH";
pub(crate) const ENV_BATCH_REQUEST: &str = "SITESCOUT_CMDS_BATCH_REQUEST_PATH";
pub(crate) const ENV_CLUSTER_REQUEST: &str = "SITESCOUT_CMDS_CLUSTER_REQUEST_PATH";
pub(crate) const ENV_CLUSTER_FEATURES: &str = "SITESCOUT_CMDS_CLUSTER_FEATURES";
pub(crate) const ENV_CLUSTER_CLUSTERS: &str = "SITESCOUT_CMDS_CLUSTER_CLUSTERS";

/// Run the sitescout CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Evaluate(args) => evaluate::run_evaluate(args, &mut stdout),
        Command::Batch(args) => batch::run_batch(args, &mut stdout),
        Command::Cluster(args) => cluster::run_cluster(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sitescout",
    about = "Score and cluster candidate retail locations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a single location profile across six weighted dimensions.
    Evaluate(evaluate::EvaluateArgs),
    /// Score and rank a table of locations with the reduced column set.
    Batch(batch::BatchArgs),
    /// Partition a feature table into clusters and describe each group.
    Cluster(cluster::ClusterArgs),
}

/// Errors emitted by the sitescout CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path} does not exist")]
    MissingSourceFile {
        /// Option the path came from.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a regular file.
    #[error("{field} path {path} is not a file")]
    SourcePathNotFile {
        /// Option the path came from.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// Opening a request file failed.
    #[error("failed to open request file {path}")]
    OpenRequest {
        /// Path of the request file.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Parsing a request file as JSON failed.
    #[error("failed to parse request file {path}")]
    ParseRequest {
        /// Path of the request file.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Single evaluation failed.
    #[error("evaluation failed")]
    Evaluate {
        /// Source error from the scorer.
        #[source]
        source: sitescout_scorer::EvaluateError,
    },
    /// Batch evaluation failed.
    #[error("batch evaluation failed")]
    Batch {
        /// Source error from the scorer.
        #[source]
        source: sitescout_scorer::BatchError,
    },
    /// Clustering failed.
    #[error("clustering failed")]
    Cluster {
        /// Source error from the cluster pipeline.
        #[source]
        source: sitescout_cluster::ClusterError,
    },
    /// Serialising the response failed.
    #[error("failed to serialise response")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Writing the response failed.
    #[error("failed to write response")]
    WriteOutput(#[source] std::io::Error),
}

/// Check that a resolved source path points at a regular file.
pub(crate) fn require_existing_file(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match path.as_std_path().metadata() {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(_) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
    }
}

/// Load and deserialise a JSON request file.
pub(crate) fn load_request<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let file = std::fs::File::open(path.as_std_path()).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialise a response as pretty JSON followed by a newline.
pub(crate) fn write_response<T: Serialize>(
    writer: &mut dyn Write,
    response: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(response).map_err(CliError::SerialiseResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;

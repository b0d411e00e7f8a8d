//! Batch command implementation.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sitescout_core::{Table, WeightVector};
use sitescout_scorer::evaluate_batch;

use crate::{ARG_REQUEST, CliError, ENV_BATCH_REQUEST, load_request, write_response};

/// CLI arguments for the `batch` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score and rank a table of locations. The request file \
                 holds a JSON object with \"rows\" (an array of objects \
                 with the required batch columns) and optional \
                 \"weights\".",
    about = "Score and rank a table of locations"
)]
#[ortho_config(prefix = "SITESCOUT")]
pub(crate) struct BatchArgs {
    /// Path to a JSON file containing a batch request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
}

impl BatchArgs {
    fn into_config(self) -> Result<BatchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        BatchConfig::try_from(merged)
    }
}

/// Resolved `batch` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BatchConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
}

impl TryFrom<BatchArgs> for BatchConfig {
    type Error = CliError;

    fn try_from(args: BatchArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_BATCH_REQUEST,
        })?;
        Ok(Self { request_path })
    }
}

/// A batch evaluation request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub(crate) struct BatchRequest {
    /// Rows with the required batch columns.
    pub(crate) rows: Table,
    /// Optional dimension weights; defaults apply when omitted.
    #[serde(default)]
    pub(crate) weights: Option<WeightVector>,
}

pub(crate) fn run_batch(args: BatchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    crate::require_existing_file(&config.request_path, ARG_REQUEST)?;
    execute_batch(&config.request_path, writer)
}

pub(crate) fn execute_batch(path: &Utf8Path, writer: &mut dyn Write) -> Result<(), CliError> {
    let request: BatchRequest = load_request(path)?;
    let weights = request.weights.unwrap_or_default();
    let ranked = evaluate_batch(&request.rows, &weights)
        .map_err(|source| CliError::Batch { source })?;
    write_response(writer, &ranked)
}

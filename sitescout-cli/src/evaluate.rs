//! Evaluate command implementation.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sitescout_core::{EvaluationResult, LocationProfile, WeightVector};
use sitescout_scorer::evaluate;

use crate::{ARG_REQUEST, CliError, ENV_EVALUATE_REQUEST, load_request, write_response};

/// CLI arguments for the `evaluate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score one location profile. The request file holds a \
                 JSON object with a \"profile\" and optional \"weights\"; \
                 omitted weights use the default weighting.",
    about = "Score a single location profile"
)]
#[ortho_config(prefix = "SITESCOUT")]
pub(crate) struct EvaluateArgs {
    /// Path to a JSON file containing an evaluation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
}

impl EvaluateArgs {
    fn into_config(self) -> Result<EvaluateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        EvaluateConfig::try_from(merged)
    }
}

/// Resolved `evaluate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EvaluateConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
}

impl TryFrom<EvaluateArgs> for EvaluateConfig {
    type Error = CliError;

    fn try_from(args: EvaluateArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_EVALUATE_REQUEST,
        })?;
        Ok(Self { request_path })
    }
}

/// A single-location evaluation request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub(crate) struct EvaluateRequest {
    /// The location to score.
    pub(crate) profile: LocationProfile,
    /// Optional dimension weights; defaults apply when omitted.
    #[serde(default)]
    pub(crate) weights: Option<WeightVector>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    crate::require_existing_file(&config.request_path, ARG_REQUEST)?;
    execute_evaluate(&config.request_path, writer)
}

pub(crate) fn execute_evaluate(path: &Utf8Path, writer: &mut dyn Write) -> Result<(), CliError> {
    let request: EvaluateRequest = load_request(path)?;
    let weights = request.weights.unwrap_or_default();
    let result: EvaluationResult =
        evaluate(&request.profile, &weights).map_err(|source| CliError::Evaluate { source })?;
    write_response(writer, &result)
}

//! Cluster command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sitescout_cluster::{KMeansConfig, cluster};
use sitescout_core::Table;

use crate::{
    ARG_CLUSTERS, ARG_FEATURES, ARG_REQUEST, CliError, ENV_CLUSTER_CLUSTERS,
    ENV_CLUSTER_FEATURES, ENV_CLUSTER_REQUEST, load_request, write_response,
};

/// CLI arguments for the `cluster` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Partition a feature table into clusters. The request \
                 file holds a JSON array of row objects; every row needs \
                 a location_name plus the selected numeric feature \
                 columns.",
    about = "Discover location archetypes via clustering"
)]
#[ortho_config(prefix = "SITESCOUT")]
pub(crate) struct ClusterArgs {
    /// Path to a JSON file containing the feature table.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Comma-separated feature columns to cluster on.
    #[arg(long = ARG_FEATURES, value_name = "names")]
    #[serde(default)]
    pub(crate) features: Option<String>,
    /// Number of clusters (between 2 and the record count).
    #[arg(long = ARG_CLUSTERS, value_name = "k")]
    #[serde(default)]
    pub(crate) clusters: Option<usize>,
    /// Seed for reproducible centroid initialisation.
    #[arg(long, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Upper bound on assign/update iterations.
    #[arg(long, value_name = "n")]
    #[serde(default)]
    pub(crate) max_iterations: Option<usize>,
}

impl ClusterArgs {
    fn into_config(self) -> Result<ClusterCommandConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ClusterCommandConfig::try_from(merged)
    }
}

/// Resolved `cluster` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClusterCommandConfig {
    /// Path to the JSON feature table.
    pub(crate) request_path: Utf8PathBuf,
    /// Selected feature columns, in order.
    pub(crate) features: Vec<String>,
    /// k-means settings assembled from the flags.
    pub(crate) kmeans: KMeansConfig,
}

impl TryFrom<ClusterArgs> for ClusterCommandConfig {
    type Error = CliError;

    fn try_from(args: ClusterArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_CLUSTER_REQUEST,
        })?;
        let features = args
            .features
            .as_deref()
            .map(parse_features)
            .filter(|features| !features.is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_FEATURES,
                env: ENV_CLUSTER_FEATURES,
            })?;
        let k = args.clusters.ok_or(CliError::MissingArgument {
            field: ARG_CLUSTERS,
            env: ENV_CLUSTER_CLUSTERS,
        })?;

        let mut kmeans = KMeansConfig::with_k(k);
        if let Some(seed) = args.seed {
            kmeans.seed = seed;
        }
        if let Some(max_iterations) = args.max_iterations {
            kmeans.max_iterations = max_iterations;
        }
        Ok(Self {
            request_path,
            features,
            kmeans,
        })
    }
}

fn parse_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

pub(crate) fn run_cluster(args: ClusterArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    crate::require_existing_file(&config.request_path, ARG_REQUEST)?;
    execute_cluster(&config, writer)
}

pub(crate) fn execute_cluster(
    config: &ClusterCommandConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let table: Table = load_request(&config.request_path)?;
    let report = cluster(&table, &config.features, &config.kmeans)
        .map_err(|source| CliError::Cluster { source })?;
    write_response(writer, &report)
}

//! Seeded, bounded k-means over a normalised feature matrix.
//!
//! The loop is deterministic for a given seed: initial centroids are
//! distinct records chosen by a `ChaCha8` generator, assignment ties go
//! to the lowest centroid index, and iteration stops on stabilisation or
//! at the configured cap. Cluster indices carry no inherent meaning.

use rand::SeedableRng;
use rand::seq::index::sample;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::ClusterError;

const DEFAULT_MAX_ITERATIONS: usize = 100;
const DEFAULT_SEED: u64 = 42;

/// Configuration for the k-means partitioning step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KMeansConfig {
    /// Number of clusters; must be within `2..=record count`.
    pub k: usize,
    /// Upper bound on assign/update iterations.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Seed for centroid initialisation; same seed, same partition.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

const fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

const fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self::with_k(3)
    }
}

impl KMeansConfig {
    /// Configuration for `k` clusters with the default cap and seed.
    #[must_use]
    pub const fn with_k(k: usize) -> Self {
        Self {
            k,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: DEFAULT_SEED,
        }
    }
}

/// Partition `matrix` into `config.k` clusters.
///
/// Returns one cluster index per record, in record order.
pub(crate) fn run(matrix: &[Vec<f64>], config: &KMeansConfig) -> Result<Vec<usize>, ClusterError> {
    let records = matrix.len();
    if config.k < 2 || config.k > records {
        return Err(ClusterError::InvalidClusterCount {
            k: config.k,
            records,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut centroids: Vec<Vec<f64>> = sample(&mut rng, records, config.k)
        .iter()
        .filter_map(|index| matrix.get(index).cloned())
        .collect();

    let mut assignments = assign(matrix, &centroids);
    for iteration in 1..=config.max_iterations {
        update_centroids(matrix, &assignments, &mut centroids);
        let next = assign(matrix, &centroids);
        if next == assignments {
            log::debug!("k-means stabilised after {iteration} iterations");
            return Ok(next);
        }
        assignments = next;
    }
    log::debug!(
        "k-means reached the iteration cap of {}",
        config.max_iterations
    );
    Ok(assignments)
}

fn assign(matrix: &[Vec<f64>], centroids: &[Vec<f64>]) -> Vec<usize> {
    matrix
        .iter()
        .map(|row| nearest_centroid(row, centroids))
        .collect()
}

/// Index of the closest centroid; ties keep the lowest index.
fn nearest_centroid(row: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0_usize;
    let mut best_distance = f64::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = squared_distance(row, centroid);
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }
    best
}

#[expect(
    clippy::float_arithmetic,
    reason = "Euclidean distance is inherently floating-point"
)]
fn squared_distance(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter()
        .zip(rhs)
        .map(|(left, right)| (left - right).powi(2))
        .sum()
}

/// Move each centroid to the mean of its members.
///
/// A centroid that lost every member keeps its previous position so the
/// partition keeps exactly `k` groups.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "centroid means divide bounded sums by small member counts"
)]
fn update_centroids(matrix: &[Vec<f64>], assignments: &[usize], centroids: &mut [Vec<f64>]) {
    let dims = matrix.first().map_or(0, Vec::len);
    let mut sums = vec![vec![0.0_f64; dims]; centroids.len()];
    let mut counts = vec![0_usize; centroids.len()];

    for (row, &cluster) in matrix.iter().zip(assignments) {
        if let (Some(sum), Some(count)) = (sums.get_mut(cluster), counts.get_mut(cluster)) {
            for (acc, value) in sum.iter_mut().zip(row) {
                *acc += *value;
            }
            *count += 1;
        }
    }

    for ((centroid, sum), &count) in centroids.iter_mut().zip(sums).zip(counts.iter()) {
        if count == 0 {
            log::warn!("a cluster lost all members; keeping its previous centroid");
            continue;
        }
        let divisor = count as f64;
        for (slot, total) in centroid.iter_mut().zip(sum) {
            *slot = total / divisor;
        }
    }
}

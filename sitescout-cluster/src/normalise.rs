//! Min-max scaling of feature columns.

/// Scale each column of a row-major matrix into `0.0..=1.0`.
///
/// Every column is scaled independently via `(x - min) / (max - min)`.
/// A constant column (max equal to min) maps to all zeros rather than
/// raising a division error; the column then contributes nothing to the
/// distance metric, which is the desired degenerate behaviour.
///
/// # Examples
/// ```
/// use sitescout_cluster::min_max_normalise;
///
/// let scaled = min_max_normalise(&[vec![0.0, 7.0], vec![50.0, 7.0], vec![100.0, 7.0]]);
/// assert_eq!(scaled, vec![vec![0.0, 0.0], vec![0.5, 0.0], vec![1.0, 0.0]]);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "min-max scaling is inherently floating-point"
)]
pub fn min_max_normalise(matrix: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let Some(first) = matrix.first() else {
        return Vec::new();
    };
    let column_count = first.len();
    let mut mins = vec![f64::INFINITY; column_count];
    let mut maxs = vec![f64::NEG_INFINITY; column_count];
    for row in matrix {
        for ((value, min), max) in row.iter().zip(mins.iter_mut()).zip(maxs.iter_mut()) {
            *min = min.min(*value);
            *max = max.max(*value);
        }
    }
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .zip(mins.iter().zip(maxs.iter()))
                .map(|(value, (min, max))| {
                    let range = max - min;
                    if range == 0.0 { 0.0 } else { (value - min) / range }
                })
                .collect()
        })
        .collect()
}

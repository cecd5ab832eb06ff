//! Binned and enumerated summaries for an external plotting collaborator.
//!
//! This crate never renders anything: each function here discretizes a
//! measure into an ordered sequence of pairs and leaves presentation to
//! whoever consumes them. Order is deterministic (sorted values, or
//! ascending bin index), so the output is directly diffable.

use crate::error::MeasureError;
use crate::measure::Measure;
use crate::stats::{cdf, normalize, probability_of};

/// Exact point mass of each distinct value, in ascending order.
///
/// Meant for measures with genuinely discrete known support; querying a
/// continuous measure at a point returns (near) zero for every value.
/// Duplicates in `values` are collapsed before querying.
///
/// # Example
///
/// ```rust
/// use compositional_measure::{bernoulli, enumerate_over};
///
/// let coin = bernoulli(0.5).unwrap();
/// let masses = enumerate_over(&[true, false], &coin);
/// assert_eq!(masses.len(), 2);
/// assert_eq!(masses[0].0, false); // canonical (sorted) order
/// assert!((masses[0].1 - 0.5).abs() < 1e-12);
/// ```
pub fn enumerate_over<A: Ord + Clone + 'static>(values: &[A], m: &Measure<A>) -> Vec<(A, f64)> {
    let mut distinct = values.to_vec();
    distinct.sort();
    distinct.dedup();
    distinct
        .into_iter()
        .map(|v| {
            let mass = m.observe(|x| if *x == v { 1.0 } else { 0.0 });
            (v, mass)
        })
        .collect()
}

/// Bin edge `k` of a zero-centered grid: `(k - n_bins/2) · bin_size`,
/// computed in real arithmetic so odd bin counts center a bin on zero.
fn edge(k: u32, n_bins: u32, bin_size: f64) -> f64 {
    (k as f64 - n_bins as f64 / 2.0) * bin_size
}

/// Histogram of a weighted measure: normalize once, then report the
/// probability of each of `n_bins` contiguous half-open bins centered
/// around zero, as `((lower_edge, upper_edge), probability)` pairs in
/// ascending bin order.
///
/// Mass falling outside the binned window is simply not reported, so the
/// bin probabilities need not sum to 1; that is a coverage limitation of
/// the window, not an error.
///
/// # Errors
///
/// Returns [`MeasureError::DegenerateNormalization`] when the weighted
/// measure has zero or non-finite total weight mass.
pub fn histogram(
    n_bins: u32,
    bin_size: f64,
    weighted: &Measure<(f64, f64)>,
) -> Result<Vec<((f64, f64), f64)>, MeasureError> {
    let m = normalize(weighted)?;
    Ok((1..=n_bins)
        .map(|k| {
            let lo = edge(k, n_bins, bin_size);
            let hi = edge(k + 1, n_bins, bin_size);
            ((lo, hi), probability_of(&m, lo, hi))
        })
        .collect())
}

/// Sample the CDF of a measure on the same zero-centered grid as
/// [`histogram`], offset by `midpoint`: each pair is `(x, cdf(m, x))` in
/// ascending `x` order.
pub fn plot_cdf(n_bins: u32, bin_size: f64, midpoint: f64, m: &Measure<f64>) -> Vec<(f64, f64)> {
    (1..=n_bins)
        .map(|k| {
            let x = midpoint + edge(k, n_bins, bin_size);
            (x, cdf(m, x))
        })
        .collect()
}

//! Statistics derived from the expectation query.
//!
//! Every function here is `observe` with a particular observable; none of
//! them inspect the measure's structure, so they work identically for
//! discrete, continuous, empirical, and composed measures.
//!
//! Key fact: conditioning on evidence is NOT plain composition. A
//! weighted measure carries unnormalized log-weights alongside its
//! outcomes, and [`normalize`] divides the total weight mass back out so
//! the constant observable `1` integrates to exactly 1 again.

use crate::error::MeasureError;
use crate::measure::Measure;

/// Expectation: `observe(identity)`.
pub fn expectation(m: &Measure<f64>) -> f64 {
    m.observe(|&x| x)
}

/// Raw moment of order `k`: `E[Xᵏ]`.
pub fn raw_moment(m: &Measure<f64>, k: i32) -> f64 {
    m.observe(move |&x| x.powi(k))
}

/// Central moment of order `k`: `E[(X - E[X])ᵏ]`.
pub fn central_moment(m: &Measure<f64>, k: i32) -> f64 {
    let mu = expectation(m);
    m.observe(move |&x| (x - mu).powi(k))
}

/// Variance: `E[X²] - E[X]²`.
///
/// # Example
///
/// ```rust
/// use compositional_measure::{from_empirical, variance};
///
/// let m = from_empirical(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert!((variance(&m) - 1.25).abs() < 1e-12);
/// ```
pub fn variance(m: &Measure<f64>) -> f64 {
    raw_moment(m, 2) - expectation(m).powi(2)
}

/// Moment generating function at `t`: `E[exp(t·X)]`.
pub fn mgf(m: &Measure<f64>, t: f64) -> f64 {
    m.observe(move |&x| (t * x).exp())
}

/// Cumulant generating function at `t`: `ln(mgf(t))`.
pub fn cgf(m: &Measure<f64>, t: f64) -> f64 {
    mgf(m, t).ln()
}

/// Probability of the half-open interval `[lower, upper)`; the indicator
/// observable. Infinite bounds are permitted.
pub fn probability_of(m: &Measure<f64>, lower: f64, upper: f64) -> f64 {
    m.observe(move |&x| if lower <= x && x < upper { 1.0 } else { 0.0 })
}

/// Cumulative distribution function: probability of `(-∞, x]`. Unlike
/// [`probability_of`], the upper bound is closed.
pub fn cdf(m: &Measure<f64>, x: f64) -> f64 {
    m.observe(move |&y| if y <= x { 1.0 } else { 0.0 })
}

/// Total mass: `observe(const 1)`. Equals 1 for a normalized probability
/// measure; anything else marks an unnormalized (weighted) measure.
pub fn volume<A: 'static>(m: &Measure<A>) -> f64 {
    m.observe(|_| 1.0)
}

/// Normalize a weighted measure.
///
/// The input pairs each outcome with a log-weight (`exp(lw)` is the
/// unnormalized density weight; logs are kept for underflow resistance).
/// With `z = E[exp(lw)]` the total weight mass, the result satisfies
///
/// `observe(result, f) = observe(weighted, |(a, lw)| f(a) · exp(lw)) / z`
///
/// for every observable `f`, so the reweighting flows through arbitrary
/// downstream queries and further `bind` composition, and the constant
/// observable integrates to exactly 1.
///
/// # Errors
///
/// Returns [`MeasureError::DegenerateNormalization`] when `z` is zero or
/// non-finite; there is no measure to recover from zero total mass.
///
/// # Example
///
/// ```rust
/// use compositional_measure::{discrete_uniform, normalize};
///
/// // Uniform over {0, 1, 2} reweighted by exp(k): a soft-max posterior.
/// let weighted = discrete_uniform(vec![0.0, 1.0, 2.0])
///     .unwrap()
///     .map(|&k| (k, k));
/// let posterior = normalize(&weighted).unwrap();
/// assert!((posterior.observe(|_| 1.0) - 1.0).abs() < 1e-12);
/// ```
pub fn normalize<A: 'static>(weighted: &Measure<(A, f64)>) -> Result<Measure<A>, MeasureError> {
    let z = weighted.observe(|pair| pair.1.exp());
    if !z.is_finite() || z <= 0.0 {
        return Err(MeasureError::DegenerateNormalization { z });
    }
    let w = weighted.clone();
    Ok(Measure::new(move |f| {
        w.observe(|pair| f(&pair.0) * pair.1.exp()) / z
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{bernoulli, discrete_uniform, from_empirical};

    #[test]
    fn test_expectation_and_variance_empirical() {
        let m = from_empirical(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((expectation(&m) - 2.5).abs() < 1e-12);
        assert!((variance(&m) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_central_moment_matches_variance() {
        let m = from_empirical(vec![2.0, 4.0, 9.0]).unwrap();
        assert!((central_moment(&m, 2) - variance(&m)).abs() < 1e-9);
    }

    #[test]
    fn test_mgf_at_zero_is_volume() {
        let m = discrete_uniform(vec![1.0, 2.0, 3.0]).unwrap();
        assert!((mgf(&m, 0.0) - 1.0).abs() < 1e-12);
        assert!((cgf(&m, 0.0)).abs() < 1e-12);
    }

    #[test]
    fn test_mgf_bernoulli_closed_form() {
        // E[exp(tX)] = 1 - p + p·exp(t) for X = indicator of heads.
        let p = 0.3;
        let t = 0.7;
        let m = bernoulli(p).unwrap().map(|&h| if h { 1.0 } else { 0.0 });
        assert!((mgf(&m, t) - (1.0 - p + p * t.exp())).abs() < 1e-12);
    }

    #[test]
    fn test_interval_is_half_open() {
        let m = discrete_uniform(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        // [1, 3) catches 1 and 2 but not 3.
        assert!((probability_of(&m, 1.0, 3.0) - 0.5).abs() < 1e-12);
        // Infinite bounds cover everything.
        assert!((probability_of(&m, f64::NEG_INFINITY, f64::INFINITY) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cdf_upper_bound_is_closed() {
        let m = discrete_uniform(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((cdf(&m, 2.0) - 0.5).abs() < 1e-12);
        assert!((cdf(&m, f64::NEG_INFINITY) - 0.0).abs() < 1e-12);
        assert!((cdf(&m, f64::INFINITY) - volume(&m)).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_restores_unit_volume() {
        let weighted = discrete_uniform(vec![0.0, 1.0, 2.0])
            .unwrap()
            .map(|&k| (k, k));
        let m = normalize(&weighted).unwrap();
        assert!((volume(&m) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_softmax_masses() {
        // Weights exp(0), exp(1), exp(2): posterior mass of outcome k is
        // exp(k) / (1 + e + e²).
        let weighted = discrete_uniform(vec![0.0, 1.0, 2.0])
            .unwrap()
            .map(|&k| (k, k));
        let m = normalize(&weighted).unwrap();
        let z = 1.0 + 1.0_f64.exp() + 2.0_f64.exp();
        let mass_two = m.observe(|&x| if x == 2.0 { 1.0 } else { 0.0 });
        assert!((mass_two - 2.0_f64.exp() / z).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_idempotent_on_unit_mass() {
        // Log-weight 0 everywhere: already normalized, comes back
        // observationally unchanged.
        let weighted = discrete_uniform(vec![1.0, 2.0, 3.0])
            .unwrap()
            .map(|&k| (k, 0.0));
        let m = normalize(&weighted).unwrap();
        let original = discrete_uniform(vec![1.0, 2.0, 3.0]).unwrap();
        let observables: [fn(&f64) -> f64; 2] = [|&x| x, |&x| x * x];
        for f in observables {
            assert!((m.observe(f) - original.observe(f)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_normalize_zero_mass_fails() {
        let weighted = discrete_uniform(vec![1.0, 2.0])
            .unwrap()
            .map(|&k| (k, f64::NEG_INFINITY));
        assert!(matches!(
            normalize(&weighted),
            Err(MeasureError::DegenerateNormalization { .. })
        ));
    }

    #[test]
    fn test_normalize_composes_under_bind() {
        // The reweighting must survive further composition: shift the
        // softmax posterior by 10 and check its mean moved by exactly 10.
        let weighted = discrete_uniform(vec![0.0, 1.0, 2.0])
            .unwrap()
            .map(|&k| (k, k));
        let m = normalize(&weighted).unwrap();
        let shifted = m.bind(|&x| Measure::pure(x + 10.0));
        assert!((expectation(&shifted) - (expectation(&m) + 10.0)).abs() < 1e-12);
        assert!((volume(&shifted) - 1.0).abs() < 1e-12);
    }
}

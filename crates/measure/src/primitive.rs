//! Primitive measure constructors.
//!
//! Three ways into the representation:
//!
//! - **From a density** on the unit interval, integrated by quadrature.
//!   The quadrature interval is fixed to `[0, 1]`; other supports are
//!   reached by transforming the observable (via `map`), never by moving
//!   the interval.
//! - **From a mass function** over an explicit finite support, an exact
//!   weighted sum with no quadrature error.
//! - **From raw samples**, the empirical-average operator.
//!
//! On top of these sit the named distributions: `bernoulli` and
//! `discrete_uniform` are direct weighted sums over their outcomes,
//! `uniform01` is the constant density on the unit interval, `beta` runs
//! an unnormalized density kernel through [`normalize`], and `binomial`
//! is built compositionally from coin flips.

use crate::error::MeasureError;
use crate::measure::Measure;
use crate::quadrature;
use crate::stats::normalize;

/// Measure with density `density` on `[0, 1]`:
/// `observe(f) = ∫₀¹ f(x) · density(x) dx`, by quadrature at the default
/// refinement depth.
///
/// Quadrature accuracy caveats apply (see [`crate::quadrature`]): sharp
/// peaks or discontinuities in the density degrade answers silently.
///
/// # Example
///
/// ```rust
/// use compositional_measure::from_density;
///
/// // Triangle density 2x on [0, 1]; mean 2/3.
/// let m = from_density(|x| 2.0 * x);
/// assert!((m.observe(|&x| x) - 2.0 / 3.0).abs() < 1e-6);
/// ```
pub fn from_density(density: impl Fn(f64) -> f64 + 'static) -> Measure<f64> {
    from_density_with_depth(density, quadrature::DEFAULT_DEPTH)
}

/// Same as [`from_density`] with an explicit quadrature refinement depth.
pub fn from_density_with_depth(
    density: impl Fn(f64) -> f64 + 'static,
    depth: u32,
) -> Measure<f64> {
    Measure::new(move |f| quadrature::integrate_with_depth(|x| f(&x) * density(x), 0.0, 1.0, depth))
}

/// Measure from a probability mass function over an explicit support:
/// `observe(f) = Σ pmf(x) · f(x)` over the support, an exact finite sum.
///
/// Duplicate support entries are summed, not deduplicated; the sum is
/// order-independent and the support is traversed once per `observe`.
///
/// # Example
///
/// ```rust
/// use compositional_measure::from_mass_function;
///
/// let coin = from_mass_function(|_: &bool| 0.5, vec![true, false]);
/// let p_true = coin.observe(|&b| if b { 1.0 } else { 0.0 });
/// assert!((p_true - 0.5).abs() < 1e-12);
/// ```
pub fn from_mass_function<A: 'static>(
    pmf: impl Fn(&A) -> f64 + 'static,
    support: Vec<A>,
) -> Measure<A> {
    Measure::new(move |f| support.iter().map(|x| pmf(x) * f(x)).sum())
}

/// Empirical measure: the average of the observable over the samples,
/// `observe(f) = (1/n) · Σ f(xᵢ)`.
///
/// # Errors
///
/// Returns [`MeasureError::EmptySamples`] for an empty collection; the
/// empirical average divides by the sample count, and failing fast here
/// beats propagating NaN through later composition.
///
/// # Example
///
/// ```rust
/// use compositional_measure::from_empirical;
///
/// let m = from_empirical(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert!((m.observe(|&x| x) - 2.5).abs() < 1e-12);
/// ```
pub fn from_empirical<A: 'static>(samples: Vec<A>) -> Result<Measure<A>, MeasureError> {
    if samples.is_empty() {
        return Err(MeasureError::EmptySamples);
    }
    let n = samples.len() as f64;
    Ok(Measure::new(move |f| {
        samples.iter().map(|x| f(x)).sum::<f64>() / n
    }))
}

/// Bernoulli measure: mass `p` on `true`, `1 - p` on `false`.
///
/// Implemented as a direct two-point weighted sum rather than through
/// [`from_mass_function`]; observationally identical.
///
/// # Errors
///
/// Returns [`MeasureError::InvalidParameter`] unless `p` is in `[0, 1]`.
pub fn bernoulli(p: f64) -> Result<Measure<bool>, MeasureError> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(MeasureError::InvalidParameter {
            name: "p".to_string(),
            reason: format!("success probability must lie in [0, 1], got {p}"),
        });
    }
    Ok(Measure::new(move |f| p * f(&true) + (1.0 - p) * f(&false)))
}

/// Uniform measure over an explicit finite collection of outcomes, each
/// with mass `1/n`. Duplicates count twice, as in [`from_mass_function`].
///
/// # Errors
///
/// Returns [`MeasureError::EmptySupport`] for an empty collection.
///
/// # Example
///
/// ```rust
/// use compositional_measure::discrete_uniform;
///
/// let die = discrete_uniform(vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert!((die.observe(|&k| k as f64) - 3.5).abs() < 1e-12);
/// ```
pub fn discrete_uniform<A: 'static>(values: Vec<A>) -> Result<Measure<A>, MeasureError> {
    if values.is_empty() {
        return Err(MeasureError::EmptySupport);
    }
    let w = 1.0 / values.len() as f64;
    Ok(Measure::new(move |f| {
        values.iter().map(|x| w * f(x)).sum()
    }))
}

/// The standard continuous uniform measure on `[0, 1]`: the constant
/// density `1` under [`from_density`].
pub fn uniform01() -> Measure<f64> {
    from_density(|_| 1.0)
}

/// Beta(a, b) measure on `[0, 1]`, built by running the unnormalized
/// kernel `x^(a-1) · (1-x)^(b-1)` through [`normalize`] as a log-weighted
/// uniform measure.
///
/// The endpoints carry zero weight, so shapes with `a < 1` or `b < 1`
/// (density unbounded at an endpoint) lose their endpoint spike to the
/// quadrature grid; for `a, b >= 1` the kernel is bounded and the usual
/// smooth-integrand accuracy applies.
///
/// # Errors
///
/// Returns [`MeasureError::InvalidParameter`] unless both shape
/// parameters are positive and finite.
pub fn beta(a: f64, b: f64) -> Result<Measure<f64>, MeasureError> {
    for (name, value) in [("a", a), ("b", b)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(MeasureError::InvalidParameter {
                name: name.to_string(),
                reason: format!("shape parameter must be positive, got {value}"),
            });
        }
    }
    let weighted = uniform01().map(move |&x| {
        let lw = if x <= 0.0 || x >= 1.0 {
            f64::NEG_INFINITY
        } else {
            (a - 1.0) * x.ln() + (b - 1.0) * (1.0 - x).ln()
        };
        (x, lw)
    });
    normalize(&weighted)
}

/// Binomial(n, p) measure over the number of successes, built
/// compositionally as the sum of `n` independent coin flips via the
/// arithmetic lifting on `Measure<f64>`.
///
/// Evaluation enumerates all `2^n` outcomes per `observe` (composition is
/// by substitution), so this is only meant for small `n`.
///
/// # Errors
///
/// Returns [`MeasureError::InvalidParameter`] unless `p` is in `[0, 1]`.
pub fn binomial(n: u32, p: f64) -> Result<Measure<f64>, MeasureError> {
    let flip = bernoulli(p)?.map(|&heads| if heads { 1.0 } else { 0.0 });
    let mut total = Measure::pure(0.0);
    for _ in 0..n {
        total = total + flip.clone();
    }
    Ok(total)
}

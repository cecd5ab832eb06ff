//! End-to-end checks against distributions with known closed forms.
//!
//! Documented tolerances: exact-sum measures (mass functions, empirical)
//! are checked to 1e-12; quadrature-backed measures to 1e-6 for smooth
//! observables and 1e-3 for indicator observables, which converge only
//! linearly in the refinement depth.

use approx::assert_abs_diff_eq;
use compositional_measure::{
    bernoulli, beta, binomial, cdf, cgf, discrete_uniform, enumerate_over, expectation,
    from_empirical, from_mass_function, histogram, mgf, plot_cdf, probability_of, uniform01,
    variance, volume,
};

// =============================================================================
// Discrete
// =============================================================================

#[test]
fn fair_coin_exact() {
    let coin = from_mass_function(|_: &bool| 0.5, vec![true, false]);
    let p_true = coin.observe(|&b| if b { 1.0 } else { 0.0 });
    assert_abs_diff_eq!(p_true, 0.5, epsilon = 1e-12);

    let masses = enumerate_over(&[true, false], &coin);
    assert_eq!(masses.len(), 2);
    assert_eq!(masses[0].0, false);
    assert_abs_diff_eq!(masses[0].1, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(masses[1].1, 0.5, epsilon = 1e-12);
}

#[test]
fn bernoulli_moments() {
    let p = 0.3;
    let m = bernoulli(p).unwrap().map(|&h| if h { 1.0 } else { 0.0 });
    assert_abs_diff_eq!(expectation(&m), p, epsilon = 1e-12);
    assert_abs_diff_eq!(variance(&m), p * (1.0 - p), epsilon = 1e-12);
    // MGF and CGF against the closed forms.
    let t = 0.4;
    assert_abs_diff_eq!(mgf(&m, t), 1.0 - p + p * t.exp(), epsilon = 1e-12);
    assert_abs_diff_eq!(cgf(&m, t), (1.0 - p + p * t.exp()).ln(), epsilon = 1e-12);
}

#[test]
fn binomial_matches_closed_form() {
    let (n, p) = (6, 0.4);
    let m = binomial(n, p).unwrap();
    assert_abs_diff_eq!(expectation(&m), n as f64 * p, epsilon = 1e-9);
    assert_abs_diff_eq!(variance(&m), n as f64 * p * (1.0 - p), epsilon = 1e-9);
    assert_abs_diff_eq!(volume(&m), 1.0, epsilon = 1e-9);
}

#[test]
fn empirical_mean_and_variance() {
    let m = from_empirical(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_abs_diff_eq!(expectation(&m), 2.5, epsilon = 1e-12);
    assert_abs_diff_eq!(variance(&m), 1.25, epsilon = 1e-12);
}

// =============================================================================
// Continuous
// =============================================================================

#[test]
fn standard_uniform_moments() {
    let m = uniform01();
    assert_abs_diff_eq!(expectation(&m), 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(variance(&m), 1.0 / 12.0, epsilon = 1e-6);
    assert_abs_diff_eq!(volume(&m), 1.0, epsilon = 1e-6);
}

#[test]
fn standard_uniform_cdf_and_intervals() {
    let m = uniform01();
    // Indicator observables: linear quadrature convergence, 1e-3 bound.
    assert_abs_diff_eq!(cdf(&m, 0.5), 0.5, epsilon = 1e-3);
    assert_abs_diff_eq!(probability_of(&m, 0.25, 0.75), 0.5, epsilon = 1e-3);
    // Additivity across an interior split point.
    let split = probability_of(&m, 0.0, 0.3) + probability_of(&m, 0.3, 1.0);
    let whole = probability_of(&m, 0.0, 1.0);
    assert_abs_diff_eq!(split, whole, epsilon = 1e-3);
}

#[test]
fn uniform_mgf_closed_form() {
    // E[exp(tU)] = (exp(t) - 1) / t.
    let m = uniform01();
    let t = 1.3;
    assert_abs_diff_eq!(mgf(&m, t), (t.exp() - 1.0) / t, epsilon = 1e-6);
}

#[test]
fn beta_moments() {
    // Beta(2, 3): mean 2/5, variance 6 / (25 * 6) = 0.04.
    let m = beta(2.0, 3.0).unwrap();
    assert_abs_diff_eq!(expectation(&m), 0.4, epsilon = 1e-6);
    assert_abs_diff_eq!(variance(&m), 0.04, epsilon = 1e-6);
    assert_abs_diff_eq!(volume(&m), 1.0, epsilon = 1e-9);
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn histogram_reproduces_discrete_support() {
    // Uniform on {1, 2, 3, 4} binned with unit bins spanning the
    // support: each occupied bin holds exactly 0.25.
    let weighted = discrete_uniform(vec![1.0, 2.0, 3.0, 4.0])
        .unwrap()
        .map(|&k| (k, 0.0));
    let bins = histogram(12, 1.0, &weighted).unwrap();
    let occupied: Vec<_> = bins.iter().filter(|(_, p)| *p > 0.0).collect();
    assert_eq!(occupied.len(), 4);
    for ((lo, hi), p) in &occupied {
        assert_abs_diff_eq!(*p, 0.25, epsilon = 1e-12);
        assert!(*lo >= 1.0 && *hi <= 5.0);
    }
    let total: f64 = bins.iter().map(|(_, p)| p).sum();
    assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
}

#[test]
fn plot_cdf_brackets_the_mass() {
    let m = discrete_uniform(vec![-1.0, 0.0, 1.0]).unwrap();
    let points = plot_cdf(6, 1.0, 0.0, &m);
    assert_eq!(points.len(), 6);
    // Grid runs from -2 to 3: starts before all mass, ends after it.
    assert_abs_diff_eq!(points[0].1, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[5].1, 1.0, epsilon = 1e-12);
    for pair in points.windows(2) {
        assert!(pair[0].1 <= pair[1].1 + 1e-12);
    }
}

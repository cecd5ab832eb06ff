//! Weighted Measures: Normalization, Histograms, and CDF Grids
//!
//! Run with: cargo run -p compositional-measure --example weighted_posterior
//!
//! This example demonstrates:
//! - Pairing outcomes with log-space importance weights
//! - Normalizing the weighted measure back to unit volume
//! - Emitting histogram bins and CDF grids for an external plotter
//!
//! Key insight: conditioning is not plain composition. Evidence enters as
//! unnormalized weights, and dividing out the total mass restores a
//! probability measure that composes correctly afterwards.

use compositional_measure::{
    beta, discrete_uniform, enumerate_over, expectation, histogram, normalize, plot_cdf,
    uniform01, volume, MeasureError,
};

fn main() -> Result<(), MeasureError> {
    println!("=== Weighted Measures and Reports ===\n");

    // -------------------------------------------------------------------------
    // 1. A discrete posterior by reweighting
    // -------------------------------------------------------------------------
    println!("1. Reweighting a discrete prior");
    println!("-------------------------------");
    println!();
    println!("Prior: uniform over bias candidates {{0.2, 0.5, 0.8}}.");
    println!("Evidence: 3 heads in a row, scored in log-space.");
    println!();

    let prior = discrete_uniform(vec![0.2, 0.5, 0.8])?;
    let weighted = prior.map(|&p: &f64| (p, 3.0 * p.ln()));
    let posterior = normalize(&weighted)?;

    println!("Posterior volume: {:.6}", volume(&posterior));
    println!("Posterior mean bias: {:.4}", expectation(&posterior));
    // Integer supports keep the enumeration exact.
    let scaled = posterior.map(|&p| (p * 10.0) as i64);
    for (v, mass) in enumerate_over(&[2, 5, 8], &scaled) {
        println!("  P(bias = 0.{v}) = {mass:.4}");
    }
    println!();

    // -------------------------------------------------------------------------
    // 2. A continuous posterior: Beta from a uniform prior
    // -------------------------------------------------------------------------
    println!("2. Continuous reweighting");
    println!("-------------------------");
    println!();
    let b = beta(3.0, 2.0)?;
    println!("Beta(3, 2) via normalize over Uniform(0,1):");
    println!("  mean: {:.6}  (exact: 0.6)", expectation(&b));
    println!();

    // -------------------------------------------------------------------------
    // 3. Reports for the plotting collaborator
    // -------------------------------------------------------------------------
    println!("3. Binned reports");
    println!("-----------------");
    println!();

    let weighted_unit = uniform01().map(|&x| (x, 0.0));
    println!("Histogram of Uniform(0,1), 8 bins of width 0.25:");
    for ((lo, hi), p) in histogram(8, 0.25, &weighted_unit)? {
        let bar = "#".repeat((p * 40.0).round() as usize);
        println!("  [{lo:5.2}, {hi:5.2})  {p:.4}  {bar}");
    }
    println!();

    println!("CDF grid of Uniform(0,1), midpoint 0.5:");
    for (x, c) in plot_cdf(8, 0.25, 0.5, &uniform01()) {
        println!("  F({x:5.2}) = {c:.4}");
    }

    Ok(())
}

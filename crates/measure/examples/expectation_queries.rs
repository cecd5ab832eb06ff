//! Expectation Queries: Measures as Functions of Observables
//!
//! Run with: cargo run -p compositional-measure --example expectation_queries
//!
//! This example demonstrates:
//! - Building measures from densities, mass functions, and samples
//! - Querying them with observables instead of drawing samples
//! - Sequential composition of discrete and continuous measures
//! - Moment and cumulant generating functions
//!
//! Key insight: a measure is not a table of probabilities, it is the
//! machine that turns observables into expectations.

use compositional_measure::{
    bernoulli, cdf, cgf, expectation, from_empirical, from_mass_function, mgf, uniform01,
    variance, volume, Measure, MeasureError,
};

fn main() -> Result<(), MeasureError> {
    println!("=== Expectation Queries ===\n");

    // -------------------------------------------------------------------------
    // 1. Three ways into the representation
    // -------------------------------------------------------------------------
    println!("1. Primitive constructors");
    println!("-------------------------");
    println!();

    let u = uniform01();
    println!("Uniform(0,1) by quadrature:");
    println!("  expectation: {:.6}", expectation(&u));
    println!("  variance:    {:.6}  (exact: {:.6})", variance(&u), 1.0 / 12.0);
    println!("  volume:      {:.6}", volume(&u));
    println!();

    let coin = from_mass_function(|_: &bool| 0.5, vec![true, false]);
    let p_heads = coin.observe(|&b| if b { 1.0 } else { 0.0 });
    println!("Fair coin by mass function: P(heads) = {p_heads:.3}");
    println!();

    let obs = from_empirical(vec![2.1, 2.9, 3.4, 3.6])?;
    println!("Empirical measure over 4 observations:");
    println!("  expectation: {:.4}", expectation(&obs));
    println!("  variance:    {:.4}", variance(&obs));
    println!();

    // -------------------------------------------------------------------------
    // 2. Sequential composition mixes discrete and continuous
    // -------------------------------------------------------------------------
    println!("2. Sequential composition");
    println!("-------------------------");
    println!();
    println!("Flip a biased coin; heads draws from Uniform(0,1), tails");
    println!("scores a flat 2. One bind, one interchangeable query:");
    println!();

    let mixed = bernoulli(0.25)?.bind(|&heads| {
        if heads {
            uniform01()
        } else {
            Measure::pure(2.0)
        }
    });
    println!("  E[X]    = {:.4}  (exact: 0.25*0.5 + 0.75*2 = 1.625)", expectation(&mixed));
    println!("  P(X<=1) = {:.4}", cdf(&mixed, 1.0));
    println!();

    // -------------------------------------------------------------------------
    // 3. Generating functions
    // -------------------------------------------------------------------------
    println!("3. Generating functions");
    println!("-----------------------");
    println!();
    let m = bernoulli(0.3)?.map(|&h| if h { 1.0 } else { 0.0 });
    for t in [0.0, 0.5, 1.0] {
        println!("  t = {t:.1}: mgf = {:.4}, cgf = {:.4}", mgf(&m, t), cgf(&m, t));
    }
    println!();

    // -------------------------------------------------------------------------
    // 4. Arithmetic on measures
    // -------------------------------------------------------------------------
    println!("4. Arithmetic lifting");
    println!("---------------------");
    println!();
    let die = from_mass_function(|_: &f64| 1.0 / 6.0, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let two_dice = die.clone() + die;
    println!("Sum of two dice:");
    println!("  E[X]   = {:.4}  (exact: 7)", expectation(&two_dice));
    println!("  Var[X] = {:.4}  (exact: 35/6 = {:.4})", variance(&two_dice), 35.0 / 6.0);

    Ok(())
}

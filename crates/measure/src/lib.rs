//! # Compositional Measure - Probability as Expectation Transformers
//!
//! This crate represents a probability distribution neither as samples
//! nor as a closed-form density, but as a computation: give a measure any
//! real-valued observable and it returns that observable's expectation.
//! This is the continuation-passing encoding of the Giry monad, and it
//! makes discrete, continuous, empirical, and composed measures
//! interchangeable behind one query operation.
//!
//! ## Core Concepts
//!
//! - **Measures are queries, not tables**: `Measure<A> ≅ (A -> R) -> R`;
//!   `observe` is the single primitive and every statistic is a choice of
//!   observable.
//! - **Composition is monadic**: `pure` is the Dirac measure, `bind`
//!   builds dependent distributions by substitution, and the monad laws
//!   hold exactly because nothing is ever sampled or cached.
//! - **Primitives cover the three entry points**: a density on `[0, 1]`
//!   (integrated by trapezoidal quadrature), a mass function over a
//!   finite support (an exact sum), or raw empirical samples.
//! - **Weighted measures carry log-weights**: unnormalized posteriors
//!   pair outcomes with log-space weights; `normalize` divides the total
//!   mass back out so `volume` returns exactly 1.
//! - **Reports are ordered pairs**: enumeration, histograms, and CDF
//!   grids are emitted as deterministic sequences for an external
//!   plotting collaborator; nothing is rendered here.
//!
//! There is no way to draw a sample anywhere in this crate: that is the
//! price of the representation, and sampling backends live elsewhere.
//! Quadrature keeps the density path honest only for low-dimensional,
//! well-behaved programs; this core exists for verification and teaching,
//! not production inference.
//!
//! ## Example
//!
//! ```rust
//! use compositional_measure::{bernoulli, expectation, variance, Measure};
//!
//! // A dependent model: flip a fair coin, then score 10 or 1.
//! let score = bernoulli(0.5)
//!     .unwrap()
//!     .bind(|&heads| Measure::pure(if heads { 10.0 } else { 1.0 }));
//!
//! assert!((expectation(&score) - 5.5).abs() < 1e-12);
//! assert!((variance(&score) - 20.25).abs() < 1e-12);
//! ```

mod error;
mod measure;
mod primitive;
pub mod quadrature;
mod report;
mod stats;

pub use error::MeasureError;
pub use measure::Measure;
pub use primitive::{
    bernoulli, beta, binomial, discrete_uniform, from_density, from_density_with_depth,
    from_empirical, from_mass_function, uniform01,
};
pub use report::{enumerate_over, histogram, plot_cdf};
pub use stats::{
    cdf, central_moment, cgf, expectation, mgf, normalize, probability_of, raw_moment, variance,
    volume,
};

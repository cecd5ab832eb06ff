//! Measures as expectation transformers.
//!
//! A measure over a set `A` is represented not as a table of outcomes and
//! probabilities but as a *query answerer*: give it any observable
//! `f: A -> R` and it returns the expectation of `f` under the
//! distribution it stands for. Formally `Measure<A> ≅ (A -> R) -> R`, the
//! continuation-passing encoding of the Giry monad.
//!
//! # Core Concepts
//!
//! - **A measure is a function of an observable**: `observe` is the one
//!   primitive; every statistic in this crate is a choice of observable.
//! - **`pure` is the Dirac measure**: all mass at one point, so
//!   `pure(v).observe(f) = f(v)`.
//! - **`bind` is sequential composition**: draw (conceptually) from one
//!   measure, feed the outcome to a continuation that picks the next
//!   measure. Composition is by substitution, never by sampling.
//! - **Discrete and continuous are interchangeable**: both answer the same
//!   query, so compositions can mix them freely without ever materializing
//!   a probability table.
//!
//! # Example
//!
//! ```rust
//! use compositional_measure::Measure;
//!
//! // A point mass at 3.
//! let m = Measure::pure(3.0);
//! assert_eq!(m.observe(|&x| x * x), 9.0);
//!
//! // Sequential composition: shift the outcome by one.
//! let shifted = m.bind(|&x| Measure::pure(x + 1.0));
//! assert_eq!(shifted.observe(|&x| x), 4.0);
//! ```

use std::ops::{Add, Mul, Sub};
use std::rc::Rc;

/// The stored integrator: takes an observable, returns its expectation.
type Integrator<A> = dyn Fn(&dyn Fn(&A) -> f64) -> f64;

/// A (possibly unnormalized) measure over outcomes of type `A`.
///
/// A `Measure` is an immutable closure behind an `Rc`: cloning is cheap,
/// evaluation is pure, and the same measure can be queried with different
/// observables independently. There is no way to draw a sample from it;
/// the representation only answers expectation queries.
///
/// # Example
///
/// ```rust
/// use compositional_measure::{uniform01, Measure};
///
/// let u = uniform01();
/// let mean = u.observe(|&x| x);
/// assert!((mean - 0.5).abs() < 1e-6);
/// ```
pub struct Measure<A: 'static> {
    run: Rc<Integrator<A>>,
}

impl<A: 'static> Clone for Measure<A> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<A: 'static> Measure<A> {
    /// Wrap a raw integrator closure.
    ///
    /// The closure receives an observable and must return its expectation
    /// under the measure being defined. All primitive constructors in this
    /// crate bottom out here.
    pub fn new(run: impl Fn(&dyn Fn(&A) -> f64) -> f64 + 'static) -> Self {
        Self { run: Rc::new(run) }
    }

    /// Apply an observable to this measure, returning its expectation.
    ///
    /// This is the only primitive operation on a measure; every statistic
    /// and report in the crate is `observe` with a particular observable.
    pub fn observe<F: Fn(&A) -> f64>(&self, f: F) -> f64 {
        (self.run)(&f)
    }

    /// The Dirac (point) measure: all mass at `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use compositional_measure::Measure;
    ///
    /// let m = Measure::pure(7);
    /// assert_eq!(m.observe(|&x| x as f64), 7.0);
    /// ```
    pub fn pure(value: A) -> Self {
        Measure::new(move |f| f(&value))
    }

    /// Sequential composition: build a dependent measure.
    ///
    /// `k` maps each outcome of `self` to a follow-up measure over `B`;
    /// the result integrates over both stages:
    /// `bind(m, k).observe(f) = m.observe(|a| k(a).observe(f))`.
    ///
    /// Intermediate outcomes are never cached: composition is by
    /// substitution, so the monad laws hold exactly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use compositional_measure::{bernoulli, Measure};
    ///
    /// // A coin whose bias depends on an earlier coin.
    /// let doubly_random = bernoulli(0.5)
    ///     .unwrap()
    ///     .bind(|&heads| {
    ///         let p = if heads { 0.9 } else { 0.1 };
    ///         bernoulli(p).unwrap()
    ///     });
    /// let p_heads = doubly_random.observe(|&h| if h { 1.0 } else { 0.0 });
    /// assert!((p_heads - 0.5).abs() < 1e-12);
    /// ```
    pub fn bind<B: 'static>(&self, k: impl Fn(&A) -> Measure<B> + 'static) -> Measure<B> {
        let m = self.clone();
        Measure::new(move |f| m.observe(|a| k(a).observe(f)))
    }

    /// Pushforward along a function: `map(g) = bind(|a| pure(g(a)))`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use compositional_measure::Measure;
    ///
    /// let m = Measure::pure(2.0).map(|&x| x * 10.0);
    /// assert_eq!(m.observe(|&x| x), 20.0);
    /// ```
    pub fn map<B: 'static>(&self, g: impl Fn(&A) -> B + 'static) -> Measure<B> {
        self.bind(move |a| Measure::pure(g(a)))
    }
}

/// Pointwise (applicative) combination of two scalar measures: the result
/// observes `op` applied to independently drawn values.
fn lift2(
    a: Measure<f64>,
    b: Measure<f64>,
    op: impl Fn(f64, f64) -> f64 + 'static,
) -> Measure<f64> {
    Measure::new(move |f| a.observe(|&x| b.observe(|&y| f(&op(x, y)))))
}

impl Add for Measure<f64> {
    type Output = Measure<f64>;

    /// Sum of independently drawn values, not convolution of densities
    /// (observationally they coincide; no density is ever formed).
    fn add(self, rhs: Measure<f64>) -> Measure<f64> {
        lift2(self, rhs, |x, y| x + y)
    }
}

impl Sub for Measure<f64> {
    type Output = Measure<f64>;

    fn sub(self, rhs: Measure<f64>) -> Measure<f64> {
        lift2(self, rhs, |x, y| x - y)
    }
}

impl Mul for Measure<f64> {
    type Output = Measure<f64>;

    fn mul(self, rhs: Measure<f64>) -> Measure<f64> {
        lift2(self, rhs, |x, y| x * y)
    }
}

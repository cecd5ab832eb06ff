//! Error types for measure construction and queries.

use thiserror::Error;

/// Errors that can occur when building or querying measures.
#[derive(Debug, Clone, Error)]
pub enum MeasureError {
    /// Empirical measure built from zero samples (the empirical average
    /// divides by the sample count).
    #[error("Cannot build an empirical measure from zero samples")]
    EmptySamples,

    /// Discrete measure built over an empty support.
    #[error("Cannot build a measure over an empty support")]
    EmptySupport,

    /// Total weight mass of a weighted measure is zero or non-finite, so
    /// there is nothing to normalize by.
    #[error("Cannot normalize: total weight mass is {z}")]
    DegenerateNormalization { z: f64 },

    /// A distribution parameter is outside its valid range.
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

//! Error type shared by the whole crate.
//!
//! Configuration and shape errors are reported at construction
//! or at the first offending call.
//! Numerical degeneracies (zero-norm gradients, constant features)
//! are handled where they occur and never show up here.
use polars::prelude::PolarsError;


/// Errors returned by `boostr`.
#[derive(Debug, thiserror::Error)]
pub enum LearnerError {
    /// A parameter or a training set is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),


    /// An input vector does not have the expected number of raw features.
    #[error("input length mismatch: expected {expected} features, got {got}")]
    InputLengthMismatch {
        /// Number of raw features fixed by the training set.
        expected: usize,
        /// Number of features actually given.
        got: usize,
    },


    /// A relative weight is negative or not finite.
    #[error("invalid weight {weight} at example {index}")]
    InvalidWeight {
        /// Position of the offending example.
        index: usize,
        /// The offending weight.
        weight: f64,
    },


    /// The iteration budget ran out before the convergence criterion held.
    /// Only produced when the caller asks for it via
    /// [`TrainingReport::ensure_converged`](crate::TrainingReport::ensure_converged).
    #[error("gradient descent did not converge within {iterations} iterations")]
    NonConvergence {
        /// Number of iterations performed.
        iterations: usize,
    },


    /// Failed to read a `DataFrame`.
    #[error(transparent)]
    Polars(#[from] PolarsError),


    /// Failed to parse a parameter set.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}


/// Shorthand for results carrying a [`LearnerError`].
pub type Result<T> = std::result::Result<T, LearnerError>;

//! Preprocessing utilities applied to a training set before boosting.

/// Affine normalization of features and targets.
pub mod normalizer;

/// Single-variable least-squares estimates between features and target.
pub mod correlation;


pub use normalizer::{Normalizer, LOWER_BOUND, UPPER_BOUND};
pub use correlation::{Correlation, estimate_correlations};

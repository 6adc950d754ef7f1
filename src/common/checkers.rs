//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data, range of parameters.

use crate::error::{LearnerError, Result};
use crate::sample::{Example, TrainingExample};


/// Check whether the training examples form a valid set.
/// Returns the number of raw features.
#[inline(always)]
pub(crate) fn examples(examples: &[TrainingExample]) -> Result<usize> {
    let first = examples.first()
        .ok_or_else(|| invalid("the training set is empty"))?;

    let n_feature = first.input_vector().len();
    if n_feature == 0 {
        return Err(invalid("the training examples have no feature"));
    }

    for (i, example) in examples.iter().enumerate() {
        input_length(n_feature, example.input_vector().len())?;
        weight(i, example.relative_weight())?;
    }
    Ok(n_feature)
}


/// Check whether the given input has the expected length.
#[inline(always)]
pub(crate) fn input_length(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(LearnerError::InputLengthMismatch { expected, got });
    }
    Ok(())
}


/// Relative weights must be finite and non-negative.
#[inline(always)]
pub(crate) fn weight(index: usize, weight: f64) -> Result<()> {
    if !weight.is_finite() || weight < 0f64 {
        return Err(LearnerError::InvalidWeight { index, weight });
    }
    Ok(())
}


/// Check `value > 0`.
#[inline(always)]
pub(crate) fn positive(name: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value > 0f64) {
        return Err(invalid(format!("`{name}` must be positive. got {value}")));
    }
    Ok(())
}


/// Check `value >= 0`.
#[inline(always)]
pub(crate) fn non_negative(name: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value >= 0f64) {
        return Err(
            invalid(format!("`{name}` must be non-negative. got {value}"))
        );
    }
    Ok(())
}


/// Check `count > 0`.
#[inline(always)]
pub(crate) fn nonzero(name: &str, count: usize) -> Result<()> {
    if count == 0 {
        return Err(invalid(format!("`{name}` must be at least 1")));
    }
    Ok(())
}


/// The step-size growth factor must be greater than `1`.
#[inline(always)]
pub(crate) fn growth_factor(factor: f64) -> Result<()> {
    if !(factor.is_finite() && factor > 1f64) {
        return Err(
            invalid(format!("growth factor must be > 1. got {factor}"))
        );
    }
    Ok(())
}


/// The step-size shrink factor must be in `(0, 1)`.
#[inline(always)]
pub(crate) fn shrink_factor(factor: f64) -> Result<()> {
    if !(factor > 0f64 && factor < 1f64) {
        return Err(
            invalid(format!("shrink factor must be in (0, 1). got {factor}"))
        );
    }
    Ok(())
}


#[inline(always)]
pub(crate) fn invalid<S: Into<String>>(message: S) -> LearnerError {
    LearnerError::InvalidConfiguration(message.into())
}

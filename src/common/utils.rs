//! This file provides small helpers on `f64` slices.


/// Returns the inner product of `x` and `y`.
#[inline(always)]
pub(crate) fn inner_product(x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y)
        .map(|(a, b)| a * b)
        .sum::<f64>()
}


/// Returns the Euclidean norm of `x`.
#[inline(always)]
pub(crate) fn l2_norm(x: &[f64]) -> f64 {
    x.iter()
        .map(|a| a * a)
        .sum::<f64>()
        .sqrt()
}

//! Basis construction.
//!
//! A raw feature vector `x` is mapped to
//! ```text
//! [1, x[s_1], ..., x[s_k]]
//! ```
//! for the subset `s_1, ..., s_k`, followed by
//! `x[s_i] * x[s_j]` for all `i <= j` when quadratic terms are enabled.
use crate::common::checkers;
use crate::error::Result;


/// Returns the basis length for a subset of size `k`.
#[inline(always)]
pub fn basis_len(k: usize, quadratic: bool) -> usize {
    let linear = 1 + k;
    if quadratic { linear + k * (k + 1) / 2 } else { linear }
}


/// Maps raw feature vectors to basis vectors.
/// The basis length is fixed once the subset and the quadratic flag are.
#[derive(Clone, Debug, PartialEq)]
pub struct Basis {
    subset: Vec<usize>,
    quadratic: bool,
    n_feature: usize,
    len: usize,
}


impl Basis {
    /// Construct a new basis over `subset` of `n_feature` raw features.
    pub(crate) fn new(subset: Vec<usize>, quadratic: bool, n_feature: usize)
        -> Self
    {
        debug_assert!(subset.iter().all(|&i| i < n_feature));
        let len = basis_len(subset.len(), quadratic);
        Self { subset, quadratic, n_feature, len, }
    }


    /// Length of the basis vectors.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }


    /// A basis always carries the bias term.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        false
    }


    /// The selected raw feature indices.
    #[inline(always)]
    pub fn subset(&self) -> &[usize] {
        &self.subset[..]
    }


    /// `true` if pairwise products are part of the basis.
    #[inline(always)]
    pub fn is_quadratic(&self) -> bool {
        self.quadratic
    }


    /// Number of raw features the basis expects.
    #[inline(always)]
    pub fn n_feature(&self) -> usize {
        self.n_feature
    }


    /// Write the basis vector of the raw vector `x` into `buf`.
    /// `x` must have `self.n_feature()` entries
    /// and `buf.len()` must equal `self.len()`.
    #[inline]
    pub(crate) fn fill(&self, x: &[f64], buf: &mut [f64]) {
        debug_assert_eq!(x.len(), self.n_feature);
        debug_assert_eq!(buf.len(), self.len);

        let k = self.subset.len();
        buf[0] = 1f64;
        for (b, &i) in buf[1..=k].iter_mut().zip(&self.subset) {
            *b = x[i];
        }

        if self.quadratic {
            let mut pos = k + 1;
            for i in 1..=k {
                for j in i..=k {
                    buf[pos] = buf[i] * buf[j];
                    pos += 1;
                }
            }
        }
    }


    /// Returns the basis vector of the raw vector `x`.
    pub fn vector(&self, x: &[f64]) -> Result<Vec<f64>> {
        checkers::input_length(self.n_feature, x.len())?;
        let mut buf = vec![0f64; self.len];
        self.fill(x, &mut buf[..]);
        Ok(buf)
    }


    /// Returns `basis(x) · theta` without materializing `basis(x)`.
    /// `x` must have `self.n_feature()` entries.
    #[inline]
    pub(crate) fn evaluate(&self, x: &[f64], theta: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.n_feature);
        debug_assert_eq!(theta.len(), self.len);

        let k = self.subset.len();
        let (linear, quadratic) = theta[1..].split_at(k);

        let mut value = theta[0];
        value += self.subset.iter()
            .zip(linear)
            .map(|(&i, t)| x[i] * t)
            .sum::<f64>();

        if self.quadratic {
            let products = self.subset.iter()
                .enumerate()
                .flat_map(|(a, &i)|
                    self.subset[a..].iter().map(move |&j| x[i] * x[j])
                );
            value += products.zip(quadratic)
                .map(|(p, t)| p * t)
                .sum::<f64>();
        }
        value
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::LearnerError;

    #[test]
    fn linear_basis() {
        let basis = Basis::new(vec![2, 0], false, 3);
        assert_eq!(basis.len(), 3);
        assert_eq!(basis.vector(&[5.0, 6.0, 7.0]).unwrap(), vec![1.0, 7.0, 5.0]);
    }

    #[test]
    fn quadratic_basis() {
        let basis = Basis::new(vec![0, 1], true, 2);
        assert_eq!(basis.len(), 1 + 2 + 3);
        assert_eq!(
            basis.vector(&[2.0, 3.0]).unwrap(),
            vec![1.0, 2.0, 3.0, 4.0, 6.0, 9.0]
        );
    }

    #[test]
    fn basis_length_formula() {
        for k in 1..8 {
            let subset = (0..k).collect::<Vec<_>>();
            let linear = Basis::new(subset.clone(), false, k);
            let quadratic = Basis::new(subset, true, k);
            assert_eq!(linear.len(), 1 + k);
            assert_eq!(quadratic.len(), 1 + k + k * (k + 1) / 2);
            assert_eq!(linear.vector(&vec![1.0; k]).unwrap().len(), linear.len());
            assert_eq!(quadratic.vector(&vec![1.0; k]).unwrap().len(), quadratic.len());
        }
    }

    #[test]
    fn evaluate_is_the_dot_product() {
        let basis = Basis::new(vec![1], true, 2);
        let theta = [0.5, -2.0, 0.25];
        let x = [100.0, 4.0];
        // 0.5 - 2 * 4 + 0.25 * 16
        assert_eq!(basis.evaluate(&x, &theta), -3.5);
    }

    #[test]
    fn vector_checks_the_input_length() {
        let basis = Basis::new(vec![0, 2], true, 3);
        assert!(matches!(
            basis.vector(&[1.0, 2.0]),
            Err(LearnerError::InputLengthMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn evaluate_matches_the_materialized_basis() {
        let basis = Basis::new(vec![3, 0, 2], true, 4);
        let theta = (0..basis.len())
            .map(|j| 0.5 - 0.1 * j as f64)
            .collect::<Vec<_>>();
        let x = [1.5, -7.0, 0.25, -2.0];

        let expected = basis.vector(&x).unwrap()
            .iter()
            .zip(&theta)
            .map(|(b, t)| b * t)
            .sum::<f64>();
        assert!((basis.evaluate(&x, &theta) - expected).abs() < 1e-12);
    }
}

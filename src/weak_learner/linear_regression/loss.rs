//! Weighted squared-error loss and its normalized gradient.
//!
//! For a parameter vector `theta`, the loss over the training set is
//! ```text
//! E(theta) = sum_i 0.5 * w_i * (phi_i · theta - y_i)^2
//! ```
//! and its (regularized) gradient is
//! ```text
//! g_j = sum_i w_i * (phi_i · theta - y_i) * phi_ij + lambda * theta_j,
//! ```
//! where the penalty is skipped for the bias `j = 0`.
use crate::{Example, TrainingSet};
use crate::common::utils;
use super::basis::Basis;


/// The basis vectors of a training set, laid out row by row,
/// together with the targets and weights of the same snapshot.
pub(crate) struct DesignMatrix {
    rows: Vec<f64>,
    targets: Vec<f64>,
    weights: Vec<f64>,
    dim: usize,
}


impl DesignMatrix {
    pub(crate) fn new(sample: &TrainingSet, basis: &Basis) -> Self {
        let dim = basis.len();
        let examples = sample.examples();

        let mut rows = vec![0f64; examples.len() * dim];
        rows.chunks_mut(dim)
            .zip(examples)
            .for_each(|(row, example)| {
                basis.fill(example.input_vector(), row);
            });

        let targets = sample.targets();
        let weights = sample.weights();

        Self { rows, targets, weights, dim, }
    }


    #[inline(always)]
    pub(crate) fn dim(&self) -> usize {
        self.dim
    }


    /// Rows in sample order.
    #[inline(always)]
    fn rows(&self) -> impl Iterator<Item = ((&[f64], &f64), &f64)> {
        self.rows.chunks(self.dim)
            .zip(&self.targets)
            .zip(&self.weights)
    }
}


/// Weighted squared error with L2 penalty on the non-bias coefficients.
pub(crate) struct WeightedSquaredLoss {
    design: DesignMatrix,
    lambda: f64,
}


impl WeightedSquaredLoss {
    pub(crate) fn new(design: DesignMatrix, lambda: f64) -> Self {
        Self { design, lambda, }
    }


    #[inline(always)]
    pub(crate) fn dim(&self) -> usize {
        self.design.dim()
    }


    /// Returns the weighted squared error at `theta`.
    /// `theta` may be any candidate vector of the right length;
    /// nothing is stored.
    pub(crate) fn error(&self, theta: &[f64]) -> f64 {
        debug_assert_eq!(theta.len(), self.dim());
        self.design.rows()
            .map(|((phi, y), w)| {
                let diff = utils::inner_product(phi, theta) - y;
                0.5 * diff * diff * w
            })
            .sum::<f64>()
    }


    /// Returns the gradient at `theta` scaled to unit Euclidean norm.
    /// A zero gradient is returned as is.
    pub(crate) fn gradient(&self, theta: &[f64]) -> Vec<f64> {
        let mut gradient = self.raw_gradient(theta);
        normalize(&mut gradient[..]);
        gradient
    }


    fn raw_gradient(&self, theta: &[f64]) -> Vec<f64> {
        debug_assert_eq!(theta.len(), self.dim());
        let dim = self.dim();

        let mut gradient = vec![0f64; dim];
        for ((phi, y), w) in self.design.rows() {
            let diff = (utils::inner_product(phi, theta) - y) * w;
            gradient.iter_mut()
                .zip(phi)
                .for_each(|(g, p)| { *g += diff * p; });
        }

        // Regularize all terms but the bias.
        gradient.iter_mut()
            .zip(theta)
            .skip(1)
            .for_each(|(g, t)| { *g += self.lambda * t; });

        gradient
    }
}


/// Scale `v` to unit norm. Zero vectors are left untouched.
#[inline(always)]
pub(crate) fn normalize(v: &mut [f64]) {
    let norm = utils::l2_norm(v);
    if norm > 0f64 {
        v.iter_mut().for_each(|x| { *x /= norm; });
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn line_loss(lambda: f64) -> WeightedSquaredLoss {
        // y = 2x + 1
        let sample = TrainingSet::from_rows(
            vec![vec![0.0], vec![1.0], vec![2.0]],
            vec![1.0, 3.0, 5.0],
        ).unwrap();
        let basis = Basis::new(vec![0], false, 1);
        WeightedSquaredLoss::new(DesignMatrix::new(&sample, &basis), lambda)
    }

    #[test]
    fn error_vanishes_at_the_exact_fit() {
        let loss = line_loss(0.0);
        assert!(loss.error(&[1.0, 2.0]).abs() < 1e-12);
    }

    #[test]
    fn error_is_weighted_half_squared_residual() {
        let loss = line_loss(0.0);
        // Residuals at theta = 0 are -1, -3, -5 with weights 1/3.
        let expected = 0.5 * (1.0 + 9.0 + 25.0) / 3.0;
        assert!((loss.error(&[0.0, 0.0]) - expected).abs() < 1e-12);
    }

    #[test]
    fn gradient_has_unit_norm() {
        let loss = line_loss(0.3);
        for theta in [[0.0, 0.0], [5.0, -1.0], [1.0, 2.5]] {
            let g = loss.gradient(&theta);
            assert!((utils::l2_norm(&g) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn gradient_points_uphill() {
        let loss = line_loss(0.0);
        let raw = loss.raw_gradient(&[0.0, 0.0]);
        // sum_i w_i * r_i * phi_i with r = (-1, -3, -5).
        assert!((raw[0] - (-9.0 / 3.0)).abs() < 1e-12);
        assert!((raw[1] - (-13.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn regularization_skips_the_bias() {
        let plain = line_loss(0.0).raw_gradient(&[4.0, 3.0]);
        let ridge = line_loss(0.5).raw_gradient(&[4.0, 3.0]);
        assert!((ridge[0] - plain[0]).abs() < 1e-12);
        assert!((ridge[1] - plain[1] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn zero_gradient_stays_zero() {
        let loss = line_loss(0.0);
        let g = loss.gradient(&[1.0, 2.0]);
        assert!(g.iter().all(|x| x.abs() < 1e-12));

        let mut zero = vec![0.0; 3];
        normalize(&mut zero[..]);
        assert_eq!(zero, vec![0.0; 3]);
    }

    #[test]
    fn repeated_evaluation_is_bitwise_identical() {
        let inputs = (0..500)
            .map(|i| vec![(i as f64 * 0.37).sin(), (i as f64 * 1.3).cos()])
            .collect::<Vec<_>>();
        let targets = inputs.iter()
            .map(|x| 0.1 + 3.0 * x[0] - 2.0 * x[1])
            .collect();
        let sample = TrainingSet::from_rows(inputs, targets).unwrap();
        let basis = Basis::new(vec![0, 1], true, 2);
        let loss = WeightedSquaredLoss::new(
            DesignMatrix::new(&sample, &basis), 0.2,
        );

        let theta = [0.3, -1.1, 0.7, 0.05, -0.2, 0.4];
        let error = loss.error(&theta);
        let gradient = loss.gradient(&theta);
        for _ in 0..8 {
            assert_eq!(loss.error(&theta).to_bits(), error.to_bits());
            assert_eq!(loss.gradient(&theta), gradient);
        }
    }
}

//! Batch gradient descent with an adaptive step size.
//!
//! Each iteration tries `theta - alpha * g` for the unit gradient `g`.
//! If the weighted error strictly decreases, the step is committed and
//! `alpha` grows; otherwise `theta` is kept and `alpha` shrinks.
//! A committed step is *small* if `alpha * |g| < tolerance * |theta|`
//! after the update. The run converges after `patience` consecutive
//! small committed steps; rejected steps do not touch that count.
use tracing::{debug, info, trace, warn};

use crate::common::utils;
use super::{
    loss::WeightedSquaredLoss,
    params::LearnerParams,
    report::{Convergence, TrainingReport},
};


/// Adaptive step-size gradient descent.
#[derive(Clone, Debug)]
pub(crate) struct AdaptiveStepOptimizer {
    step_size: f64,
    tolerance: f64,
    max_iter: usize,
    growth: f64,
    shrink: f64,
    patience: usize,
}


impl AdaptiveStepOptimizer {
    pub(crate) fn new(params: &LearnerParams) -> Self {
        Self {
            step_size: params.step_size,
            tolerance: params.tolerance,
            max_iter: params.max_iter,
            growth: params.growth,
            shrink: params.shrink,
            patience: params.patience,
        }
    }


    /// Minimize `loss` starting from `theta`, updating it in place.
    /// Only strictly improving steps are committed,
    /// so `theta` always holds the best parameters seen.
    pub(crate) fn minimize(
        &self,
        loss: &WeightedSquaredLoss,
        theta: &mut [f64],
    ) -> TrainingReport
    {
        let mut alpha = self.step_size;
        let mut error = loss.error(theta);
        let mut gradient = loss.gradient(theta);
        let mut candidate = vec![0f64; theta.len()];

        let mut n_small = 0_usize;
        let mut committed = 0_usize;
        let mut iteration = 0_usize;

        let status = loop {
            if n_small >= self.patience {
                break Convergence::Converged;
            }
            if gradient.iter().all(|&g| g == 0f64) {
                break Convergence::Stationary;
            }
            if iteration >= self.max_iter {
                break Convergence::BudgetExhausted;
            }
            iteration += 1;

            candidate.iter_mut()
                .zip(theta.iter())
                .zip(&gradient)
                .for_each(|((c, t), g)| { *c = t - alpha * g; });

            // `alpha` underflowed relative to `theta`.
            if candidate[..] == theta[..] {
                break Convergence::Stationary;
            }

            let candidate_error = loss.error(&candidate);
            if candidate_error < error {
                theta.copy_from_slice(&candidate);

                let change = alpha * utils::l2_norm(&gradient);
                let size = utils::l2_norm(theta);
                if change < self.tolerance * size {
                    n_small += 1;
                } else {
                    n_small = 0;
                }

                error = candidate_error;
                gradient = loss.gradient(theta);
                committed += 1;
                debug!(
                    iteration, error, change, alpha, n_small,
                    "committed gradient step"
                );
                alpha *= self.growth;
            } else {
                alpha *= self.shrink;
                trace!(iteration, candidate_error, alpha, "rejected step");
            }
        };

        match status {
            Convergence::BudgetExhausted => warn!(
                iterations = iteration, error,
                "gradient descent stopped by the iteration budget"
            ),
            _ => info!(
                iterations = iteration, committed, error, %status,
                "gradient descent finished"
            ),
        }

        TrainingReport {
            status,
            iterations: iteration,
            committed_steps: committed,
            error,
            step_size: alpha,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrainingSet;
    use super::super::{
        basis::Basis,
        loss::DesignMatrix,
        params::{DEFAULT_GROWTH, DEFAULT_SHRINK},
    };

    fn loss_of(inputs: Vec<Vec<f64>>, targets: Vec<f64>, lambda: f64)
        -> WeightedSquaredLoss
    {
        let n_feature = inputs[0].len();
        let sample = TrainingSet::from_rows(inputs, targets).unwrap();
        let basis = Basis::new((0..n_feature).collect(), false, n_feature);
        WeightedSquaredLoss::new(DesignMatrix::new(&sample, &basis), lambda)
    }

    #[test]
    fn fits_a_noiseless_line() {
        let loss = loss_of(vec![vec![0.0], vec![1.0]], vec![1.0, 3.0], 0.0);
        let params = LearnerParams { tolerance: 1e-3, ..Default::default() };

        let mut theta = vec![0.0; 2];
        let report = AdaptiveStepOptimizer::new(&params)
            .minimize(&loss, &mut theta);

        assert_eq!(report.status, Convergence::Converged);
        assert!((theta[0] - 1.0).abs() < 1e-2, "theta = {theta:?}");
        assert!((theta[1] - 2.0).abs() < 1e-2, "theta = {theta:?}");
        assert!((loss.error(&theta) - report.error).abs() < 1e-12);
    }

    #[test]
    fn budget_exhaustion_keeps_the_best_theta() {
        let loss = loss_of(vec![vec![0.0], vec![1.0]], vec![1.0, 3.0], 0.0);
        let params = LearnerParams { max_iter: 5, ..Default::default() };

        let start = loss.error(&[0.0, 0.0]);
        let mut theta = vec![0.0; 2];
        let report = AdaptiveStepOptimizer::new(&params)
            .minimize(&loss, &mut theta);

        assert_eq!(report.status, Convergence::BudgetExhausted);
        assert_eq!(report.iterations, 5);
        assert!(!report.is_converged());
        assert!(report.error < start);
        assert!((loss.error(&theta) - report.error).abs() < 1e-12);
    }

    #[test]
    fn stops_immediately_at_a_stationary_point() {
        let loss = loss_of(vec![vec![0.0], vec![1.0]], vec![1.0, 3.0], 0.0);
        let params = LearnerParams::default();

        let mut theta = vec![1.0, 2.0];
        let report = AdaptiveStepOptimizer::new(&params)
            .minimize(&loss, &mut theta);

        assert_eq!(report.status, Convergence::Stationary);
        assert_eq!(report.iterations, 0);
        assert_eq!(theta, vec![1.0, 2.0]);
    }

    #[test]
    fn committed_steps_never_increase_the_error() {
        let loss = loss_of(
            vec![vec![0.0, 1.0], vec![1.0, 0.5], vec![2.0, -1.0], vec![3.0, 2.0]],
            vec![0.3, 1.9, 2.2, 5.1],
            0.1,
        );
        let mut theta = vec![0.0; 3];
        let mut previous = loss.error(&theta);

        // Run one iteration at a time, carrying `theta` over.
        let params = LearnerParams { max_iter: 1, ..Default::default() };
        let optimizer = AdaptiveStepOptimizer::new(&params);
        for _ in 0..200 {
            let report = optimizer.minimize(&loss, &mut theta);
            assert!(report.error <= previous);
            previous = report.error;
        }
    }

    #[test]
    fn rejected_step_only_shrinks_the_step_size() {
        let loss = loss_of(vec![vec![0.0], vec![1.0]], vec![1.0, 3.0], 0.0);
        let params = LearnerParams {
            step_size: 100.0,
            max_iter: 1,
            ..Default::default()
        };

        let start = loss.error(&[0.0, 0.0]);
        let mut theta = vec![0.0; 2];
        let report = AdaptiveStepOptimizer::new(&params)
            .minimize(&loss, &mut theta);

        assert_eq!(report.status, Convergence::BudgetExhausted);
        assert_eq!(report.iterations, 1);
        assert_eq!(report.committed_steps, 0);
        assert_eq!(report.error, start);
        assert_eq!(report.step_size, 50.0);
        assert_eq!(theta, vec![0.0, 0.0]);
    }

    #[test]
    fn step_size_follows_the_commit_history() {
        let loss = loss_of(vec![vec![0.0], vec![1.0]], vec![1.0, 3.0], 0.0);
        let params = LearnerParams {
            step_size: 100.0,
            max_iter: 30,
            ..Default::default()
        };

        let start = loss.error(&[0.0, 0.0]);
        let mut theta = vec![0.0; 2];
        let report = AdaptiveStepOptimizer::new(&params)
            .minimize(&loss, &mut theta);

        assert!(report.committed_steps >= 1);
        assert!(report.committed_steps < report.iterations);
        assert!(report.error < start);

        let rejected = report.iterations - report.committed_steps;
        let expected = 100.0
            * DEFAULT_GROWTH.powi(report.committed_steps as i32)
            * DEFAULT_SHRINK.powi(rejected as i32);
        assert!(
            ((report.step_size - expected) / expected).abs() < 1e-12,
            "step size {} != {expected}", report.step_size,
        );
    }

    #[test]
    fn rejected_steps_do_not_count_as_small() {
        // Every committed step is small, so the run converges at the
        // first commit: five overshooting rejects (100 down to 6.25),
        // then a commit at 3.125.
        let loss = loss_of(vec![vec![0.0], vec![1.0]], vec![1.0, 3.0], 0.0);
        let params = LearnerParams {
            step_size: 100.0,
            tolerance: 1e9,
            patience: 1,
            ..Default::default()
        };

        let mut theta = vec![0.0; 2];
        let report = AdaptiveStepOptimizer::new(&params)
            .minimize(&loss, &mut theta);

        assert_eq!(report.status, Convergence::Converged);
        assert_eq!(report.iterations, 6);
        assert_eq!(report.committed_steps, 1);
        assert!((report.step_size - 3.125 * DEFAULT_GROWTH).abs() < 1e-12);
        assert!((theta[0] - 2.5).abs() < 1e-12, "theta = {theta:?}");
        assert!((theta[1] - 1.875).abs() < 1e-12, "theta = {theta:?}");
    }
}

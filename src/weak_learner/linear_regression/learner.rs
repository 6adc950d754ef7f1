use rand::Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::{TrainingSet, Regressor};
use crate::common::checkers;
use crate::error::Result;
use super::{
    basis::Basis,
    loss::{DesignMatrix, WeightedSquaredLoss},
    optimizer::AdaptiveStepOptimizer,
    params::LearnerParams,
    regressor::LinearRegressor,
    report::TrainingReport,
};


/// A linear (optionally quadratic) regressor on a subset of the raw
/// features, fitted by adaptive gradient descent against the weighted
/// squared error of the training set it is bound to.
///
/// The learner borrows its training set, so the relative weights
/// cannot change while it exists. Call
/// [`LinearWeakLearner::into_regressor`] to release the borrow
/// once training is done.
///
/// # Example
/// ```
/// use boostr::prelude::*;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// // y = 2 * x0 + 1
/// let sample = TrainingSet::from_rows(
///     vec![vec![0.0, 7.0], vec![1.0, -3.0]],
///     vec![1.0, 3.0],
/// ).unwrap();
///
/// let params = LearnerParams { subset_size: 1, ..Default::default() };
/// let mut rng = StdRng::seed_from_u64(0);
/// let mut learner = LinearWeakLearner::new(&sample, params, &mut rng)
///     .unwrap();
///
/// let report = learner.train();
/// assert!(report.is_converged());
/// learner.set_combination_coefficient(0.7);
///
/// let prediction = learner.predict(&[0.5, 0.0]).unwrap();
/// println!("{prediction}");
/// ```
#[derive(Clone, Debug)]
pub struct LinearWeakLearner<'a> {
    sample: &'a TrainingSet,
    params: LearnerParams,
    basis: Basis,
    theta: Vec<f64>,
    combination_coefficient: f64,
    report: Option<TrainingReport>,
}


impl<'a> LinearWeakLearner<'a> {
    /// Bind a new learner to `sample`.
    /// The feature subset is drawn from `rng` here and never changes;
    /// `theta` starts at zero.
    pub fn new<R>(sample: &'a TrainingSet, params: LearnerParams, rng: &mut R)
        -> Result<Self>
        where R: Rng + ?Sized,
    {
        params.validate()?;

        let n_feature = sample.shape().1;
        checkers::nonzero("raw feature count", n_feature)?;

        let subset = params.subset_strategy
            .select(sample, params.subset_size, rng)?;
        let basis = Basis::new(subset, params.quadratic, n_feature);
        let theta = vec![0f64; basis.len()];

        debug!(
            subset = ?basis.subset(),
            basis_len = basis.len(),
            "constructed a linear weak learner"
        );

        Ok(Self {
            sample,
            params,
            basis,
            theta,
            combination_coefficient: 0f64,
            report: None,
        })
    }


    /// Run gradient descent from the current `theta` until it converges
    /// or the iteration budget is exhausted.
    /// Calling it again restarts from the current `theta`
    /// with the initial step size.
    pub fn train(&mut self) -> TrainingReport {
        let loss = self.loss();
        let report = AdaptiveStepOptimizer::new(&self.params)
            .minimize(&loss, &mut self.theta[..]);

        debug!(theta = ?self.theta, "trained a linear weak learner");
        self.report = Some(report.clone());
        report
    }


    /// Weighted squared error of the current `theta`
    /// on the bound training set.
    pub fn training_error(&self) -> f64 {
        self.loss().error(&self.theta[..])
    }


    /// The selected raw feature indices.
    #[inline(always)]
    pub fn subset(&self) -> &[usize] {
        self.basis.subset()
    }


    /// The current parameter vector.
    #[inline(always)]
    pub fn theta(&self) -> &[f64] {
        &self.theta[..]
    }


    /// Length of the basis vectors, equal to `self.theta().len()`.
    #[inline(always)]
    pub fn basis_len(&self) -> usize {
        self.basis.len()
    }


    /// The parameters this learner was built with.
    #[inline(always)]
    pub fn params(&self) -> &LearnerParams {
        &self.params
    }


    /// The report of the last call to [`LinearWeakLearner::train`].
    #[inline(always)]
    pub fn report(&self) -> Option<&TrainingReport> {
        self.report.as_ref()
    }


    /// The weight of this learner in the ensemble.
    #[inline(always)]
    pub fn combination_coefficient(&self) -> f64 {
        self.combination_coefficient
    }


    /// Set the weight of this learner in the ensemble.
    #[inline(always)]
    pub fn set_combination_coefficient(&mut self, value: f64) {
        self.combination_coefficient = value;
    }


    /// Release the training set and keep the fitted hypothesis.
    pub fn into_regressor(self) -> LinearRegressor {
        LinearRegressor::from_components(
            self.basis,
            self.theta,
            self.combination_coefficient,
            self.report,
        )
    }


    fn loss(&self) -> WeightedSquaredLoss {
        let design = DesignMatrix::new(self.sample, &self.basis);
        WeightedSquaredLoss::new(design, self.params.lambda)
    }
}


impl Regressor for LinearWeakLearner<'_> {
    fn predict(&self, x: &[f64]) -> Result<f64> {
        checkers::input_length(self.basis.n_feature(), x.len())?;
        Ok(self.basis.evaluate(x, &self.theta[..]))
    }
}


/// Train independent learners concurrently.
/// Returns the reports in the order of `learners`.
pub fn train_all(learners: &mut [LinearWeakLearner<'_>])
    -> Vec<TrainingReport>
{
    learners.par_iter_mut()
        .map(|learner| learner.train())
        .collect()
}

use rand::Rng;

use std::fmt;

use crate::{TrainingSet, WeakLearner};
use crate::error::Result;
use super::{
    learner::LinearWeakLearner,
    params::LearnerParams,
    regressor::LinearRegressor,
};


/// The linear-regression weak learner for AdaBoost.R.
///
/// Given a weighted training set, [`LinearRegression`] selects a subset
/// of the raw features, fits a linear (optionally quadratic) model to
/// them by adaptive gradient descent, and returns the fitted
/// [`LinearRegressor`].
///
/// [`LinearRegression`] is constructed by
/// [`LinearRegressionBuilder`](crate::LinearRegressionBuilder).
///
/// # Example
/// ```
/// use boostr::prelude::*;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let sample = TrainingSet::from_rows(
///     vec![vec![0.0, 1.0], vec![1.0, 0.0], vec![2.0, 2.0]],
///     vec![1.0, 2.0, 5.0],
/// ).unwrap();
///
/// let weak_learner = LinearRegressionBuilder::new()
///     .subset_size(2)
///     .build()
///     .unwrap();
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let h = weak_learner.produce(&sample, &mut rng).unwrap();
/// let predictions = h.predict_all(&sample).unwrap();
/// assert_eq!(predictions.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct LinearRegression {
    params: LearnerParams,
}


impl LinearRegression {
    /// Initialize [`LinearRegression`].
    /// The parameters must be validated beforehand.
    #[inline]
    pub(super) fn from_params(params: LearnerParams) -> Self {
        Self { params }
    }


    /// The parameters of the learners this factory produces.
    #[inline(always)]
    pub fn params(&self) -> &LearnerParams {
        &self.params
    }


    /// Bind a new, untrained learner to `sample`.
    pub fn learner<'a, R>(&self, sample: &'a TrainingSet, rng: &mut R)
        -> Result<LinearWeakLearner<'a>>
        where R: Rng + ?Sized,
    {
        LinearWeakLearner::new(sample, self.params.clone(), rng)
    }
}


impl WeakLearner for LinearRegression {
    type Hypothesis = LinearRegressor;


    fn name(&self) -> &str {
        "Linear Regression"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let params = &self.params;
        let info = Vec::from([
            ("Subset size", format!("{}", params.subset_size)),
            ("Subset strategy", format!("{}", params.subset_strategy)),
            ("Quadratic terms", format!("{}", params.quadratic)),
            ("L2 penalty", format!("{}", params.lambda)),
            ("Initial step size", format!("{}", params.step_size)),
            ("Tolerance", format!("{}", params.tolerance)),
            ("Max. iterations", format!("{}", params.max_iter)),
        ]);
        Some(info)
    }


    fn produce<R>(&self, sample: &TrainingSet, rng: &mut R)
        -> Result<Self::Hypothesis>
        where R: Rng + ?Sized,
    {
        let mut learner = self.learner(sample, rng)?;
        learner.train();
        Ok(learner.into_regressor())
    }
}


impl fmt::Display for LinearRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------\n# {} Weak Learner\n", self.name())?;
        if let Some(info) = self.info() {
            for (key, value) in info {
                writeln!(f, "- {key}: {value}")?;
            }
        }
        write!(f, "----------")
    }
}

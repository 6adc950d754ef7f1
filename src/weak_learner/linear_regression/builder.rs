use crate::error::Result;
use super::{
    params::LearnerParams,
    subset::SubsetStrategy,
    algorithm::LinearRegression,
};


/// A struct that builds [`LinearRegression`].
/// `LinearRegressionBuilder` keeps parameters for constructing
/// the weak learners.
///
/// # Example
///
/// ```
/// use boostr::prelude::*;
///
/// let weak_learner = LinearRegressionBuilder::new()
///     .subset_size(3)
///     .quadratic(true)
///     .lambda(0.01)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, Default)]
pub struct LinearRegressionBuilder {
    params: LearnerParams,
}


impl LinearRegressionBuilder {
    /// Construct a new instance of `LinearRegressionBuilder`
    /// with the default parameters. See [`LearnerParams`].
    pub fn new() -> Self {
        Self::default()
    }


    /// Start from an existing parameter set.
    pub fn from_params(params: LearnerParams) -> Self {
        Self { params }
    }


    /// Set the number of features per learner.
    /// Default is `5`.
    pub fn subset_size(mut self, size: usize) -> Self {
        self.params.subset_size = size;
        self
    }


    /// Specify how the features are chosen.
    /// Default is [`SubsetStrategy::Random`].
    pub fn subset_strategy(mut self, strategy: SubsetStrategy) -> Self {
        self.params.subset_strategy = strategy;
        self
    }


    /// Include pairwise products of the selected features.
    pub fn quadratic(mut self, quadratic: bool) -> Self {
        self.params.quadratic = quadratic;
        self
    }


    /// Set the L2-regularization parameter.
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.params.lambda = lambda;
        self
    }


    /// Set the initial step size.
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.params.step_size = step_size;
        self
    }


    /// Set the relative-change threshold.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.params.tolerance = tolerance;
        self
    }


    /// Set the iteration budget.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.params.max_iter = max_iter;
        self
    }


    /// Set the step-size multipliers after committed and rejected steps.
    pub fn step_factors(mut self, growth: f64, shrink: f64) -> Self {
        self.params.growth = growth;
        self.params.shrink = shrink;
        self
    }


    /// Set the number of consecutive small steps needed to converge.
    pub fn patience(mut self, patience: usize) -> Self {
        self.params.patience = patience;
        self
    }


    /// Build a `LinearRegression`.
    /// This method consumes `self`.
    pub fn build(self) -> Result<LinearRegression> {
        self.params.validate()?;
        Ok(LinearRegression::from_params(self.params))
    }
}

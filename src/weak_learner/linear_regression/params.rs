//! Parameters of the linear-regression weak learner.
use serde::{Serialize, Deserialize};

use crate::common::checkers;
use crate::error::Result;
use super::subset::SubsetStrategy;


/// Default number of features per learner.
pub const DEFAULT_SUBSET_SIZE: usize = 5;
/// Default L2-regularization parameter.
pub const DEFAULT_LAMBDA: f64 = 0.0;
/// Default initial step size.
pub const DEFAULT_STEP_SIZE: f64 = 0.1;
/// Default relative-change threshold.
pub const DEFAULT_TOLERANCE: f64 = 0.01;
/// Default iteration budget.
pub const DEFAULT_MAX_ITER: usize = 100_000;
/// Default step-size multiplier after a committed step.
pub const DEFAULT_GROWTH: f64 = 1.2;
/// Default step-size multiplier after a rejected step.
pub const DEFAULT_SHRINK: f64 = 0.5;
/// Default number of consecutive small steps needed to converge.
pub const DEFAULT_PATIENCE: usize = 10;


/// Every option recognized by
/// [`LinearWeakLearner`](crate::LinearWeakLearner).
///
/// Missing fields take their defaults when deserialized:
/// ```
/// use boostr::LearnerParams;
///
/// let params = LearnerParams::from_json(r#"{ "subset_size": 3 }"#).unwrap();
/// assert_eq!(params.subset_size, 3);
/// assert_eq!(params.patience, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerParams {
    /// Number of raw features sampled per learner.
    pub subset_size: usize,
    /// How the features are chosen.
    pub subset_strategy: SubsetStrategy,
    /// Include the pairwise products of the selected features.
    pub quadratic: bool,
    /// L2 penalty on the non-bias coefficients.
    pub lambda: f64,
    /// Initial gradient-descent step size.
    pub step_size: f64,
    /// Relative-change threshold for a step to count as small.
    pub tolerance: f64,
    /// Maximal number of descent iterations, committed or not.
    pub max_iter: usize,
    /// Step-size multiplier after a committed step.
    pub growth: f64,
    /// Step-size multiplier after a rejected step.
    pub shrink: f64,
    /// Consecutive small committed steps needed to converge.
    pub patience: usize,
}


impl Default for LearnerParams {
    fn default() -> Self {
        Self {
            subset_size: DEFAULT_SUBSET_SIZE,
            subset_strategy: SubsetStrategy::default(),
            quadratic: false,
            lambda: DEFAULT_LAMBDA,
            step_size: DEFAULT_STEP_SIZE,
            tolerance: DEFAULT_TOLERANCE,
            max_iter: DEFAULT_MAX_ITER,
            growth: DEFAULT_GROWTH,
            shrink: DEFAULT_SHRINK,
            patience: DEFAULT_PATIENCE,
        }
    }
}


impl LearnerParams {
    /// Parse a JSON object, then validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let params = serde_json::from_str::<Self>(json)?;
        params.validate()?;
        Ok(params)
    }


    /// Check every option.
    pub fn validate(&self) -> Result<()> {
        checkers::nonzero("subset_size", self.subset_size)?;
        checkers::non_negative("lambda", self.lambda)?;
        checkers::positive("step_size", self.step_size)?;
        checkers::non_negative("tolerance", self.tolerance)?;
        checkers::nonzero("max_iter", self.max_iter)?;
        checkers::growth_factor(self.growth)?;
        checkers::shrink_factor(self.shrink)?;
        checkers::nonzero("patience", self.patience)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LearnerError;

    #[test]
    fn defaults_are_valid() {
        assert!(LearnerParams::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{
            "quadratic": true,
            "lambda": 0.5,
            "subset_strategy": "TopCorrelated"
        }"#;
        let params = LearnerParams::from_json(json).unwrap();
        assert!(params.quadratic);
        assert_eq!(params.lambda, 0.5);
        assert_eq!(params.subset_strategy, SubsetStrategy::TopCorrelated);
        assert_eq!(params.subset_size, DEFAULT_SUBSET_SIZE);
        assert_eq!(params.growth, DEFAULT_GROWTH);
    }

    #[test]
    fn invalid_json_values_are_rejected() {
        assert!(matches!(
            LearnerParams::from_json(r#"{ "subset_size": 0 }"#),
            Err(LearnerError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            LearnerParams::from_json(r#"{ "shrink": 1.5 }"#),
            Err(LearnerError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            LearnerParams::from_json("{ not json"),
            Err(LearnerError::Json(_))
        ));
    }

    #[test]
    fn each_bound_is_checked() {
        let cases = [
            LearnerParams { lambda: -1.0, ..Default::default() },
            LearnerParams { step_size: 0.0, ..Default::default() },
            LearnerParams { tolerance: f64::NAN, ..Default::default() },
            LearnerParams { max_iter: 0, ..Default::default() },
            LearnerParams { growth: 0.9, ..Default::default() },
            LearnerParams { patience: 0, ..Default::default() },
        ];
        for params in cases {
            assert!(params.validate().is_err(), "{params:?}");
        }
    }
}

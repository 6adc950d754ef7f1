use std::fmt;

use crate::Regressor;
use crate::common::checkers;
use crate::error::Result;
use super::{
    basis::Basis,
    report::TrainingReport,
};


/// A trained linear weak hypothesis.
/// Unlike [`LinearWeakLearner`](crate::LinearWeakLearner),
/// it does not borrow the training set.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRegressor {
    basis: Basis,
    theta: Vec<f64>,
    combination_coefficient: f64,
    report: Option<TrainingReport>,
}


impl LinearRegressor {
    pub(super) fn from_components(
        basis: Basis,
        theta: Vec<f64>,
        combination_coefficient: f64,
        report: Option<TrainingReport>,
    ) -> Self
    {
        debug_assert_eq!(basis.len(), theta.len());
        Self { basis, theta, combination_coefficient, report, }
    }


    /// The selected raw feature indices.
    #[inline(always)]
    pub fn subset(&self) -> &[usize] {
        self.basis.subset()
    }


    /// The fitted parameter vector.
    #[inline(always)]
    pub fn theta(&self) -> &[f64] {
        &self.theta[..]
    }


    /// The basis used by this hypothesis.
    #[inline(always)]
    pub fn basis(&self) -> &Basis {
        &self.basis
    }


    /// The report of the training run, if it was trained.
    #[inline(always)]
    pub fn report(&self) -> Option<&TrainingReport> {
        self.report.as_ref()
    }


    /// The weight of this hypothesis in the ensemble.
    #[inline(always)]
    pub fn combination_coefficient(&self) -> f64 {
        self.combination_coefficient
    }


    /// Set the weight of this hypothesis in the ensemble.
    #[inline(always)]
    pub fn set_combination_coefficient(&mut self, value: f64) {
        self.combination_coefficient = value;
    }
}


impl Regressor for LinearRegressor {
    fn predict(&self, x: &[f64]) -> Result<f64> {
        checkers::input_length(self.basis.n_feature(), x.len())?;
        Ok(self.basis.evaluate(x, &self.theta[..]))
    }
}


impl fmt::Display for LinearRegressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # Linear Regressor\n\n\
            - Features: {:?}\n\
            - Quadratic terms: {}\n\
            - Combination coefficient: {}\
            ",
            self.basis.subset(),
            self.basis.is_quadratic(),
            self.combination_coefficient,
        )?;

        let theta = self.theta.iter()
            .map(|t| format!("{t:.6}"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "- Theta: [{theta}]")?;

        if let Some(report) = &self.report {
            writeln!(f, "- Training: {}", report.status)?;
        }
        write!(f, "----------")
    }
}

//! Linear-regression weak learner fitted by adaptive gradient descent.

/// Feature subset selection.
pub mod subset;
/// Basis construction.
pub mod basis;
/// Parameters.
pub mod params;
/// Builder for [`LinearRegression`].
pub mod builder;
/// The weak-learner factory.
pub mod algorithm;
/// The weak learner bound to a training set.
pub mod learner;
/// The trained hypothesis.
pub mod regressor;
/// Training reports.
pub mod report;

pub(crate) mod loss;
pub(crate) mod optimizer;


pub use subset::{
    SubsetStrategy,
    random_subset,
    top_correlated_subset,
};
pub use basis::{Basis, basis_len};
pub use params::LearnerParams;
pub use builder::LinearRegressionBuilder;
pub use algorithm::LinearRegression;
pub use learner::{LinearWeakLearner, train_all};
pub use regressor::LinearRegressor;
pub use report::{Convergence, TrainingReport};

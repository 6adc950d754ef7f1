//! The files in `weak_learner/` directory defines
//! `WeakLearner` trait and weak learners.

/// Provides WeakLearner trait.
pub mod core;

/// Defines the linear-regression weak learner.
pub mod linear_regression;

pub use self::core::WeakLearner;

pub use self::linear_regression::{
    Basis,
    Convergence,
    LearnerParams,
    LinearRegression,
    LinearRegressionBuilder,
    LinearRegressor,
    LinearWeakLearner,
    SubsetStrategy,
    TrainingReport,
    train_all,
};

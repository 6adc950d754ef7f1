//! Exports the standard weak learners, preprocessors, and traits.
//!
pub use crate::sample::{
    Example,
    TrainingExample,
    TrainingSet,
};


pub use crate::weak_learner::{
    // Weak learner trait
    WeakLearner,


    // Linear regression ------------------------
    LearnerParams,
    LinearRegression,
    LinearRegressionBuilder,
    LinearRegressor,
    LinearWeakLearner,
    SubsetStrategy,
    TrainingReport,
    Convergence,
    train_all,
};


pub use crate::hypothesis::Regressor;


pub use crate::preprocess::{
    Normalizer,
    Correlation,
    estimate_correlations,
};


pub use crate::error::LearnerError;

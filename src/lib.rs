#![warn(missing_docs)]

//!
//! A crate that provides the weak learner of AdaBoost.R,
//! the boosting algorithm for regression.
//!
//! Each weak learner picks a subset of the raw features,
//! expands them into a basis (bias, linear terms, and optionally all
//! pairwise products), and fits the coefficients by batch gradient
//! descent with an adaptive step size against the weighted squared
//! error of the training examples.
//!
//! The outer boosting loop is not part of this crate.
//! It is expected to
//! 1. build a [`TrainingSet`] (optionally normalized by [`Normalizer`]),
//! 2. produce weak hypotheses with [`LinearRegression`] or
//!    [`LinearWeakLearner`],
//! 3. assign their combination coefficients, and
//! 4. reweight the examples with [`TrainingSet::set_weights`]
//!    before the next round.
//!
//! # Example
//! ```
//! use boostr::prelude::*;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut sample = TrainingSet::from_rows(
//!     vec![vec![0.0, 2.0], vec![1.0, 1.0], vec![2.0, 0.5], vec![3.0, 0.0]],
//!     vec![1.0, 3.0, 5.0, 7.0],
//! ).unwrap();
//! let normalizer = Normalizer::new(&sample);
//! normalizer.transform(&mut sample).unwrap();
//!
//! let weak_learner = LinearRegressionBuilder::new()
//!     .subset_size(1)
//!     .build()
//!     .unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(1234);
//! let mut h = weak_learner.produce(&sample, &mut rng).unwrap();
//! h.set_combination_coefficient(0.5);
//!
//! sample.set_weights(&[0.1, 0.2, 0.3, 0.4]).unwrap();
//! ```

pub mod error;
pub mod sample;
pub mod hypothesis;
pub mod weak_learner;
pub mod preprocess;
pub mod prelude;

pub(crate) mod common;


pub use error::{LearnerError, Result};

pub use sample::{
    Example,
    TrainingExample,
    TrainingSet,
};

pub use hypothesis::Regressor;

pub use weak_learner::{
    WeakLearner,

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

pub use preprocess::{
    Correlation,
    Normalizer,
    estimate_correlations,
};

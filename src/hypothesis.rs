//! The core library for the hypotheses returned by weak learners.
use crate::{Example, TrainingSet};
use crate::error::Result;


/// A trait that defines the behavor of regressor.
/// You only need to implement `predict` method.
pub trait Regressor {
    /// Predicts the target value of the raw feature vector `x`.
    fn predict(&self, x: &[f64]) -> Result<f64>;


    /// Predicts the target values of all examples in `sample`.
    fn predict_all(&self, sample: &TrainingSet) -> Result<Vec<f64>> {
        sample.iter()
            .map(|example| self.predict(example.input_vector()))
            .collect()
    }
}

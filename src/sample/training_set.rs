use polars::prelude::*;

use std::slice::Iter;

use crate::common::checkers;
use crate::error::{LearnerError, Result};
use super::example::*;


/// Struct `TrainingSet` holds a batch of weighted training examples.
///
/// Weak learners borrow a `&TrainingSet` for as long as they are bound
/// to it, so the relative weights cannot change under a learner.
/// The boosting driver reweights through [`TrainingSet::set_weights`]
/// once every learner of the round has been released.
#[derive(Debug, Clone)]
pub struct TrainingSet {
    examples: Vec<TrainingExample>,
    n_feature: usize,
}


impl TrainingSet {
    /// Construct a new training set from the given examples.
    /// All input vectors must have the same, non-zero length
    /// and all weights must be non-negative.
    pub fn new(examples: Vec<TrainingExample>) -> Result<Self> {
        let n_feature = checkers::examples(&examples[..])?;
        Ok(Self { examples, n_feature, })
    }


    /// Construct a training set from rows of raw features and targets.
    /// Each example gets the uniform weight `1 / m`.
    pub fn from_rows(inputs: Vec<Vec<f64>>, targets: Vec<f64>)
        -> Result<Self>
    {
        if inputs.len() != targets.len() {
            return Err(checkers::invalid(format!(
                "{} input rows but {} targets",
                inputs.len(), targets.len(),
            )));
        }

        let n_sample = inputs.len();
        let weight = 1f64 / n_sample.max(1) as f64;
        let examples = inputs.into_iter()
            .zip(targets)
            .map(|(x, y)| TrainingExample::new(x, y, weight))
            .collect::<Vec<_>>();

        Self::new(examples)
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `TrainingSet`.
    /// Every column of `data` becomes a raw feature.
    /// Each example gets the uniform weight `1 / m`.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let n_sample = data.shape().0;
        if target.len() != n_sample {
            return Err(checkers::invalid(format!(
                "{n_sample} rows but {} targets", target.len(),
            )));
        }

        let columns = data.get_columns()
            .iter()
            .map(column_values)
            .collect::<Result<Vec<_>>>()?;
        let targets = column_values(&target)?;

        let inputs = (0..n_sample).map(|i|
                columns.iter()
                    .map(|column| column[i])
                    .collect::<Vec<_>>()
            )
            .collect::<Vec<_>>();

        Self::from_rows(inputs, targets)
    }


    /// Returns the pair of the number of examples and
    /// the number of raw features.
    #[inline(always)]
    pub fn shape(&self) -> (usize, usize) {
        (self.examples.len(), self.n_feature)
    }


    /// Returns the examples as a slice.
    #[inline(always)]
    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples[..]
    }


    /// Input vectors must keep their length and weights stay untouched.
    /// Reweighting goes through [`TrainingSet::set_weights`].
    #[inline(always)]
    pub(crate) fn examples_mut(&mut self) -> &mut [TrainingExample] {
        &mut self.examples[..]
    }


    /// Returns an iterator over the examples.
    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, TrainingExample> {
        self.examples.iter()
    }


    /// Returns the target values.
    pub fn targets(&self) -> Vec<f64> {
        self.examples.iter()
            .map(|example| example.target())
            .collect()
    }


    /// Returns the relative weights.
    pub fn weights(&self) -> Vec<f64> {
        self.examples.iter()
            .map(|example| example.relative_weight())
            .collect()
    }


    /// Replace the relative weights of all examples.
    /// Nothing is modified if `weights` is invalid.
    pub fn set_weights(&mut self, weights: &[f64]) -> Result<()> {
        if weights.len() != self.examples.len() {
            return Err(checkers::invalid(format!(
                "{} weights for {} examples",
                weights.len(), self.examples.len(),
            )));
        }
        weights.iter()
            .enumerate()
            .try_for_each(|(i, &w)| checkers::weight(i, w))?;

        self.examples.iter_mut()
            .zip(weights)
            .for_each(|(example, &w)| example.set_relative_weight(w));
        Ok(())
    }
}


impl<'a> IntoIterator for &'a TrainingSet {
    type Item = &'a TrainingExample;
    type IntoIter = Iter<'a, TrainingExample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


fn column_values(series: &Series) -> Result<Vec<f64>> {
    let name = series.name().to_string();
    let series = series.cast(&DataType::Float64)?;
    series.f64()?
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| LearnerError::InvalidConfiguration(
            format!("the column `{name}` has missing values")
        ))
}

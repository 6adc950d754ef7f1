use crate::common::checkers;
use crate::error::Result;


/// Capabilities a weak learner reads from one training example.
///
/// The boosting driver owns the relative weights and may rewrite them
/// between rounds; weak learners only read them.
pub trait Example {
    /// Raw feature values. The length is fixed across a training set.
    fn input_vector(&self) -> &[f64];


    /// Target value.
    fn target(&self) -> f64;


    /// Non-negative importance of this example in the current round.
    fn relative_weight(&self) -> f64;
}


/// An owned training example.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExample {
    input: Vec<f64>,
    target: f64,
    weight: f64,
}


impl TrainingExample {
    /// Construct a new example.
    #[inline(always)]
    pub fn new(input: Vec<f64>, target: f64, weight: f64) -> Self {
        Self { input, target, weight, }
    }


    /// Overwrite the target value.
    #[inline(always)]
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }


    /// Overwrite the `i`-th raw feature value.
    /// Fails if `i` is not a feature index of this example.
    pub fn set_input(&mut self, i: usize, value: f64) -> Result<()> {
        let n_feature = self.input.len();
        let slot = self.input.get_mut(i)
            .ok_or_else(|| checkers::invalid(format!(
                "feature index {i} is out of range for {n_feature} features"
            )))?;
        *slot = value;
        Ok(())
    }


    /// Overwrite the relative weight.
    /// [`TrainingSet::set_weights`](crate::TrainingSet::set_weights)
    /// is the checked way to do this for a whole set.
    #[inline(always)]
    pub fn set_relative_weight(&mut self, weight: f64) {
        self.weight = weight;
    }


    pub(crate) fn input_mut(&mut self) -> &mut [f64] {
        &mut self.input[..]
    }
}


impl Example for TrainingExample {
    #[inline(always)]
    fn input_vector(&self) -> &[f64] {
        &self.input[..]
    }


    #[inline(always)]
    fn target(&self) -> f64 {
        self.target
    }


    #[inline(always)]
    fn relative_weight(&self) -> f64 {
        self.weight
    }
}

//! The core library for the weak learner in the boosting protocol.
//!
//! In each round of AdaBoost.R, the booster reweights the training
//! examples and asks the weak learner for a hypothesis that fits the
//! weighted examples. The booster then evaluates the hypothesis and
//! assigns its combination coefficient.
use rand::Rng;

use crate::TrainingSet;
use crate::error::Result;


/// A trait that defines the behavior of a weak learner.
/// You only need to implement `name` and `produce` methods.
pub trait WeakLearner {
    /// Returned hypothesis generated by `self`.
    type Hypothesis;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the parameters of the weak learner as key/value pairs.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Returns a hypothesis fitted to the current relative weights
    /// of `sample`. Any randomness is drawn from `rng`.
    fn produce<R>(&self, sample: &TrainingSet, rng: &mut R)
        -> Result<Self::Hypothesis>
        where R: Rng + ?Sized;
}

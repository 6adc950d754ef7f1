//! Training examples and the read-only training-set snapshot
//! handed to weak learners.

// Provides the example trait and its owned implementation.
pub(crate) mod example;
// Provides the training set.
pub(crate) mod training_set;


pub use example::{Example, TrainingExample};
pub use training_set::TrainingSet;

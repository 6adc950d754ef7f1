//! Estimated single-variable linear relations between each raw feature
//! and the target.
//!
//! The estimates serve as a seeding heuristic, e.g. for
//! [`SubsetStrategy::TopCorrelated`](crate::SubsetStrategy::TopCorrelated).
use rayon::prelude::*;

use std::cmp::Ordering;

use crate::{Example, TrainingSet};


/// Estimated relation `y ≈ offset + factor * x[index]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Correlation {
    index: usize,
    offset: f64,
    factor: f64,
}


impl Correlation {
    /// Construct a new estimate.
    pub fn new(index: usize, offset: f64, factor: f64) -> Self {
        Self { index, offset, factor, }
    }


    /// Raw feature index.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.index
    }


    /// Estimated intercept.
    #[inline(always)]
    pub fn offset(&self) -> f64 {
        self.offset
    }


    /// Estimated slope.
    #[inline(always)]
    pub fn factor(&self) -> f64 {
        self.factor
    }
}


/// Returns one [`Correlation`] per raw feature,
/// sorted in non-decreasing order of `factor`.
///
/// The moments are weighted by the relative weights but not divided by
/// their total, so they are means only when the weights sum to `1`.
/// A feature with zero weighted variance gets `factor = 0`.
pub fn estimate_correlations(sample: &TrainingSet) -> Vec<Correlation> {
    let n_feature = sample.shape().1;

    let ymean = sample.iter()
        .map(|example| example.target() * example.relative_weight())
        .sum::<f64>();

    let mut estimated = (0..n_feature).into_par_iter()
        .map(|i| {
            let (mut xmean, mut x2mean, mut xymean) = (0f64, 0f64, 0f64);
            for example in sample {
                let x = example.input_vector()[i];
                let y = example.target();
                let w = example.relative_weight();
                xmean += x * w;
                x2mean += x * x * w;
                xymean += x * y * w;
            }

            let dev = xmean * xmean - x2mean;
            let factor = if dev != 0f64 {
                (xmean * ymean - xymean) / dev
            } else {
                0f64
            };
            Correlation::new(i, ymean - factor * xmean, factor)
        })
        .collect::<Vec<_>>();

    estimated.sort_by(|a, b|
        a.factor.partial_cmp(&b.factor).unwrap_or(Ordering::Equal)
    );
    estimated
}

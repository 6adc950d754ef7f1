//! Affine normalization of a training set.
//!
//! Every raw feature `x_i` and the target `y` are written as
//! ```text
//! x_i = offset_i + scale_i * v_i,
//! y   = offset_t + scale_t * w,
//! ```
//! where `v_i` and `w` range over `[lower, upper]` on the training set.
use crate::{Example, TrainingSet};
use crate::common::checkers;
use crate::error::Result;


/// Lower end of the default target interval.
pub const LOWER_BOUND: f64 = 0.0;
/// Upper end of the default target interval.
pub const UPPER_BOUND: f64 = 3.0;


/// Per-dimension affine maps fitted on a training set.
///
/// A dimension whose values are all equal gets `scale = 0`;
/// its values are shifted by the offset but never divided.
///
/// # Example
/// ```
/// use boostr::prelude::*;
///
/// let mut sample = TrainingSet::from_rows(
///     vec![vec![10.0], vec![40.0]],
///     vec![-1.0, 5.0],
/// ).unwrap();
///
/// let normalizer = Normalizer::new(&sample);
/// normalizer.transform(&mut sample).unwrap();
///
/// let y = sample.examples()[1].target();
/// assert_eq!(y, 3.0);
/// assert_eq!(normalizer.to_real_target(y), 5.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Normalizer {
    input_offsets: Vec<f64>,
    input_scales: Vec<f64>,
    target_offset: f64,
    target_scale: f64,
}


impl Normalizer {
    /// Fit the maps onto `[LOWER_BOUND, UPPER_BOUND]`.
    pub fn new(sample: &TrainingSet) -> Self {
        Self::fit(sample, LOWER_BOUND, UPPER_BOUND)
    }


    /// Fit the maps onto `[lower, upper]`. Requires `lower < upper`.
    pub fn with_range(sample: &TrainingSet, lower: f64, upper: f64)
        -> Result<Self>
    {
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err(checkers::invalid(format!(
                "normalization range must satisfy lower < upper. \
                got [{lower}, {upper}]"
            )));
        }
        Ok(Self::fit(sample, lower, upper))
    }


    fn fit(sample: &TrainingSet, lower: f64, upper: f64) -> Self {
        let n_feature = sample.shape().1;
        let mut input_min = vec![f64::MAX; n_feature];
        let mut input_max = vec![f64::MIN; n_feature];
        let mut target_min = f64::MAX;
        let mut target_max = f64::MIN;

        for example in sample {
            let y = example.target();
            target_min = target_min.min(y);
            target_max = target_max.max(y);

            example.input_vector()
                .iter()
                .zip(input_min.iter_mut().zip(input_max.iter_mut()))
                .for_each(|(&x, (lo, hi))| {
                    *lo = lo.min(x);
                    *hi = hi.max(x);
                });
        }

        let width = upper - lower;
        let (target_offset, target_scale) = affine(
            target_min, target_max, lower, width,
        );
        let (input_offsets, input_scales): (Vec<f64>, Vec<f64>) = input_min
            .into_iter()
            .zip(input_max)
            .map(|(lo, hi)| affine(lo, hi, lower, width))
            .unzip();

        Self { input_offsets, input_scales, target_offset, target_scale, }
    }


    /// Normalize the inputs and targets of every example in place.
    /// Fails without touching `sample` if its feature count differs from
    /// the one the normalizer was fitted on.
    pub fn transform(&self, sample: &mut TrainingSet) -> Result<()> {
        checkers::input_length(self.input_offsets.len(), sample.shape().1)?;

        for example in sample.examples_mut() {
            let y = normalize(
                example.target(), self.target_offset, self.target_scale,
            );
            example.set_target(y);
            self.apply(example.input_mut());
        }
        Ok(())
    }


    /// Normalize a single raw feature vector in place.
    pub fn transform_input(&self, x: &mut [f64]) -> Result<()> {
        checkers::input_length(self.input_offsets.len(), x.len())?;
        self.apply(x);
        Ok(())
    }


    fn apply(&self, x: &mut [f64]) {
        x.iter_mut()
            .zip(self.input_offsets.iter().zip(&self.input_scales))
            .for_each(|(v, (&offset, &scale))| {
                *v = normalize(*v, offset, scale);
            });
    }


    /// Convert a normalized target value to the real value.
    #[inline(always)]
    pub fn to_real_target(&self, normalized: f64) -> f64 {
        self.target_offset + self.target_scale * normalized
    }


    /// Offsets of the raw features.
    pub fn input_offsets(&self) -> &[f64] {
        &self.input_offsets[..]
    }


    /// Scales of the raw features.
    pub fn input_scales(&self) -> &[f64] {
        &self.input_scales[..]
    }


    /// Offset of the target.
    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }


    /// Scale of the target.
    pub fn target_scale(&self) -> f64 {
        self.target_scale
    }
}


/// Returns `(offset, scale)` mapping `[min, max]` onto
/// `[lower, lower + width]`.
#[inline(always)]
fn affine(min: f64, max: f64, lower: f64, width: f64) -> (f64, f64) {
    let scale = (max - min) / width;
    let offset = min - scale * lower;
    (offset, scale)
}


#[inline(always)]
fn normalize(value: f64, offset: f64, scale: f64) -> f64 {
    let value = value - offset;
    if scale > 0f64 { value / scale } else { value }
}

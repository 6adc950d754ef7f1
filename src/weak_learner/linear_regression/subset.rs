//! Feature subset selection.
use rand::Rng;
use rand::seq::index;
use serde::{Serialize, Deserialize};

use std::cmp::Ordering;
use std::fmt;

use crate::TrainingSet;
use crate::common::checkers;
use crate::error::Result;
use crate::preprocess::estimate_correlations;


/// The way a learner picks its raw features.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubsetStrategy {
    /// Draw the features uniformly at random without replacement.
    #[default]
    Random,


    /// Keep the features whose estimated single-variable slope
    /// against the target is largest in absolute value.
    /// See [`estimate_correlations`].
    TopCorrelated,
}


impl fmt::Display for SubsetStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = match self {
            Self::Random => "Random",
            Self::TopCorrelated => "Top correlated",
        };
        write!(f, "{strategy}")
    }
}


impl SubsetStrategy {
    /// Select at most `size` distinct feature indices of `sample`.
    pub(crate) fn select<R>(
        &self,
        sample: &TrainingSet,
        size: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>>
        where R: Rng + ?Sized,
    {
        let n_feature = sample.shape().1;
        match self {
            Self::Random => random_subset(n_feature, size, rng),
            Self::TopCorrelated => top_correlated_subset(sample, size),
        }
    }
}


/// Returns `size` distinct indices drawn uniformly from `0..n_feature`,
/// in the order they were drawn.
/// If `size >= n_feature`, returns `[0, 1, ..., n_feature - 1]`
/// without touching `rng`.
pub fn random_subset<R>(n_feature: usize, size: usize, rng: &mut R)
    -> Result<Vec<usize>>
    where R: Rng + ?Sized,
{
    checkers::nonzero("subset size", size)?;
    checkers::nonzero("raw feature count", n_feature)?;

    if size >= n_feature {
        return Ok((0..n_feature).collect());
    }

    Ok(index::sample(rng, n_feature, size).into_vec())
}


/// Returns the `size` features with the largest `|factor|`
/// reported by [`estimate_correlations`], in increasing index order.
/// Ties are broken by the lower index.
pub fn top_correlated_subset(sample: &TrainingSet, size: usize)
    -> Result<Vec<usize>>
{
    checkers::nonzero("subset size", size)?;
    let n_feature = sample.shape().1;

    if size >= n_feature {
        return Ok((0..n_feature).collect());
    }

    let mut ranking = estimate_correlations(sample);
    ranking.sort_by(|a, b|
        b.factor().abs()
            .partial_cmp(&a.factor().abs())
            .unwrap_or(Ordering::Equal)
            .then(a.index().cmp(&b.index()))
    );

    let mut subset = ranking.into_iter()
        .take(size)
        .map(|correlation| correlation.index())
        .collect::<Vec<_>>();
    subset.sort_unstable();
    Ok(subset)
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn all_features_when_subset_is_large() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_subset(4, 4, &mut rng).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(random_subset(4, 9, &mut rng).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn random_subset_is_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..100 {
            let mut subset = random_subset(10, 4, &mut rng).unwrap();
            assert_eq!(subset.len(), 4);
            assert!(subset.iter().all(|&i| i < 10));
            subset.sort_unstable();
            subset.dedup();
            assert_eq!(subset.len(), 4);
        }
    }

    #[test]
    fn random_subset_is_reproducible() {
        let a = random_subset(50, 5, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = random_subset(50, 5, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_subset_rejects_zero_sizes() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_subset(5, 0, &mut rng).is_err());
        assert!(random_subset(0, 3, &mut rng).is_err());
    }

    #[test]
    fn top_correlated_keeps_the_steepest_features() {
        // y = 5 * x1 - 3 * x2.
        // Estimated slopes: x0 -> -9.5, x1 -> 4.1, x2 -> -1.42.
        let inputs = vec![
            vec![1.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
            vec![1.0, 2.0, 3.0],
            vec![0.0, 3.0, 1.0],
        ];
        let targets = inputs.iter()
            .map(|x| 5.0 * x[1] - 3.0 * x[2])
            .collect();
        let sample = TrainingSet::from_rows(inputs, targets).unwrap();

        let subset = top_correlated_subset(&sample, 2).unwrap();
        assert_eq!(subset, vec![0, 1]);
    }
}

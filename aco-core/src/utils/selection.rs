#[cfg(test)]
#[path = "../../tests/unit/utils/selection_test.rs"]
mod selection_test;

use crate::utils::{Float, Random};

/// Builds a cumulative (prefix sum) distribution from non negative weights, normalized so that
/// its values grow from the first weight share up to one.
///
/// When weights total is zero or not finite, a uniform distribution is returned instead.
/// The last value is always forced to exactly one to absorb floating point drift.
pub fn cumulative_distribution(weights: &[Float]) -> Vec<Float> {
    if weights.is_empty() {
        return vec![];
    }

    let total = weights.iter().sum::<Float>();
    let mut distribution = if total.is_finite() && total > 0. {
        weights
            .iter()
            .scan(0., |acc, weight| {
                *acc += weight / total;
                Some(*acc)
            })
            .collect::<Vec<_>>()
    } else {
        // all zero weights give a uniform pick, not always the first candidate
        let size = weights.len() as Float;
        (1..=weights.len()).map(|idx| idx as Float / size).collect::<Vec<_>>()
    };

    if let Some(last) = distribution.last_mut() {
        *last = 1.;
    }

    distribution
}

/// Returns the first index whose cumulative probability meets or exceeds the draw. The index is
/// clamped to the last one when the draw is above every value.
///
/// Uses binary search, so `cumulative` must be non decreasing and non empty.
pub fn select_cumulative_index(cumulative: &[Float], draw: Float) -> usize {
    assert!(!cumulative.is_empty(), "cannot select from an empty distribution");

    cumulative.partition_point(|&probability| probability < draw).min(cumulative.len() - 1)
}

/// Performs a fitness proportionate (roulette wheel) selection on cumulative distribution.
pub fn roulette_wheel(cumulative: &[Float], random: &dyn Random) -> usize {
    select_cumulative_index(cumulative, random.uniform_real(0., 1.))
}

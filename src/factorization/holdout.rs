use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::errors::{RecommendError, RecommendResult};
use crate::matrix::NormalizedMatrix;

/// A known cell removed from training: (row, column, actual value)
pub type HeldOutCell = (usize, usize, f64);

pub struct HoldoutSplit {
    pub training: Array2<f64>,
    pub training_observed: Array2<bool>,
    pub held_out: Vec<HeldOutCell>,
}

/// Hide a seeded random share of the known cells from training
///
/// At least one known cell always stays in the training matrix.
pub fn split_holdout(
    matrix: &NormalizedMatrix,
    fraction: f64,
    seed: u64,
) -> RecommendResult<HoldoutSplit> {
    let mut known = known_cells(&matrix.observed);
    let count = holdout_count(known.len(), fraction);

    if count == 0 {
        return Err(RecommendError::EmptyHoldout);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    known.shuffle(&mut rng);

    let mut training = matrix.values.clone();
    let mut training_observed = matrix.observed.clone();
    let held_out = known[..count]
        .iter()
        .map(|&(row, col)| {
            let actual = training[[row, col]];
            training[[row, col]] = 0.0;
            training_observed[[row, col]] = false;
            (row, col, actual)
        })
        .collect();

    Ok(HoldoutSplit {
        training,
        training_observed,
        held_out,
    })
}

fn known_cells(observed: &Array2<bool>) -> Vec<(usize, usize)> {
    observed
        .indexed_iter()
        .filter(|(_, known)| **known)
        .map(|(idx, _)| idx)
        .collect()
}

fn holdout_count(known: usize, fraction: f64) -> usize {
    let wanted = (known as f64 * fraction.clamp(0.0, 1.0)).ceil() as usize;
    wanted.min(known.saturating_sub(1))
}

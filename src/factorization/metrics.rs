use ndarray::Array2;
use std::collections::{BTreeMap, HashSet};

use super::holdout::HeldOutCell;

/// (predicted, actual) pairs
pub fn rmse(pairs: &[(f64, f64)]) -> f64 {
    if pairs.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = pairs.iter().map(|(p, a)| (p - a).powi(2)).sum();
    (sum_sq / pairs.len() as f64).sqrt()
}

pub fn mae(pairs: &[(f64, f64)]) -> f64 {
    if pairs.is_empty() {
        return 0.0;
    }
    let sum_abs: f64 = pairs.iter().map(|(p, a)| (p - a).abs()).sum();
    sum_abs / pairs.len() as f64
}

pub struct RecallAtK {
    pub recall: f64,
    pub evaluated_users: usize,
}

/// Mean share of each user's held-out positives found in their top-k
///
/// Items known during training are not candidates for the top-k.
pub fn recall_at_k(
    predicted: &Array2<f64>,
    training_observed: &Array2<bool>,
    held_out: &[HeldOutCell],
    k: usize,
    threshold: f64,
) -> RecallAtK {
    let positives = positives_by_user(held_out, threshold);
    let per_user: Vec<f64> = positives
        .iter()
        .map(|(&user, items)| {
            let top = top_k_unobserved(predicted, training_observed, user, k);
            let hits = items.iter().filter(|&item| top.contains(item)).count();
            hits as f64 / items.len() as f64
        })
        .collect();

    let recall = if per_user.is_empty() {
        0.0
    } else {
        per_user.iter().sum::<f64>() / per_user.len() as f64
    };

    RecallAtK {
        recall,
        evaluated_users: per_user.len(),
    }
}

fn positives_by_user(held_out: &[HeldOutCell], threshold: f64) -> BTreeMap<usize, Vec<usize>> {
    let mut positives: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for &(row, col, actual) in held_out {
        if actual >= threshold {
            positives.entry(row).or_default().push(col);
        }
    }
    positives
}

fn top_k_unobserved(
    predicted: &Array2<f64>,
    training_observed: &Array2<bool>,
    user: usize,
    k: usize,
) -> HashSet<usize> {
    let mut candidates: Vec<(usize, f64)> = predicted
        .row(user)
        .iter()
        .copied()
        .enumerate()
        .filter(|&(col, _)| !training_observed[[user, col]])
        .collect();

    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates.into_iter().take(k).map(|(col, _)| col).collect()
}

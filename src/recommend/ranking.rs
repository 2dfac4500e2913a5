use super::types::Recommendation;
use crate::catalog::Catalog;
use crate::factorization::PredictedMatrix;
use crate::matrix::ActiveSelection;

/// Top `n` unselected items of one user's predicted row
///
/// Scores are sorted descending with a stable sort, so equal scores keep
/// column order. Items missing from the catalog get empty metadata.
pub fn recommend(
    selection: &ActiveSelection,
    catalog: &Catalog,
    predicted: &PredictedMatrix,
    user_index: usize,
    n: usize,
) -> Vec<Recommendation> {
    if selection.is_empty() || n == 0 {
        return Vec::new();
    }
    let Some(row) = predicted.row(user_index) else {
        return Vec::new();
    };

    let mut unrated: Vec<(&String, f64)> = predicted
        .items()
        .iter()
        .zip(row.iter().copied())
        .filter(|(item, _)| !selection.contains(item))
        .collect();

    unrated.sort_by(|a, b| b.1.total_cmp(&a.1));

    unrated
        .into_iter()
        .take(n)
        .map(|(item, score)| Recommendation::new(item.clone(), score, catalog.metadata(item)))
        .collect()
}

use log::debug;
use ndarray::Array2;
use std::collections::{BTreeSet, HashMap};

use super::selection::ActiveSelection;
use super::types::{ACTIVE_USER_LABEL, MatrixAxes, RatingMatrix};
use crate::config::MatrixSettings;
use crate::dataset::InteractionRecord;
use crate::errors::{RecommendError, RecommendResult};

/// Pivots interaction history into a user x item matrix
pub struct RatingMatrixBuilder {
    implicit_rating: f64,
}

impl RatingMatrixBuilder {
    pub fn new(settings: &MatrixSettings) -> Self {
        Self {
            implicit_rating: settings.implicit_rating,
        }
    }

    pub fn implicit_rating(&self) -> f64 {
        self.implicit_rating
    }

    /// History plus one synthetic row rating every selected game
    pub fn build(
        &self,
        history: &[InteractionRecord],
        selection: &ActiveSelection,
    ) -> RecommendResult<RatingMatrix> {
        if selection.is_empty() {
            return Err(RecommendError::EmptySelection);
        }

        let users = collect_users(history);
        let items = collect_items(history, selection);
        let active_row = users.len();

        let mut axes = MatrixAxes {
            users,
            items,
            active_row: Some(active_row),
        };
        axes.users.push(ACTIVE_USER_LABEL.to_string());

        let mut cells = pivot(history, &axes);
        for item in selection.iter() {
            if let Some(col) = axes.item_index(item) {
                cells[[active_row, col]] = Some(self.implicit_rating);
            }
        }

        debug!(
            "Built rating matrix {}x{} with active row {}",
            axes.users.len(),
            axes.items.len(),
            active_row
        );
        Ok(RatingMatrix { axes, cells })
    }

    /// History only, used for offline diagnostics
    pub fn build_history(&self, history: &[InteractionRecord]) -> RatingMatrix {
        let axes = MatrixAxes {
            users: collect_users(history),
            items: collect_items(history, &ActiveSelection::default()),
            active_row: None,
        };
        let cells = pivot(history, &axes);
        RatingMatrix { axes, cells }
    }
}

fn collect_users(history: &[InteractionRecord]) -> Vec<String> {
    history
        .iter()
        .map(|r| r.user_id.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn collect_items(history: &[InteractionRecord], selection: &ActiveSelection) -> Vec<String> {
    history
        .iter()
        .map(|r| r.item_id.as_str())
        .chain(selection.iter())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Average repeated (user, item) ratings into one cell
fn pivot(history: &[InteractionRecord], axes: &MatrixAxes) -> Array2<Option<f64>> {
    let user_idx = index_of(&axes.users);
    let item_idx = index_of(&axes.items);
    let mut sums: HashMap<(usize, usize), (f64, usize)> = HashMap::new();

    for record in history {
        let (Some(&row), Some(&col)) = (
            user_idx.get(record.user_id.as_str()),
            item_idx.get(record.item_id.as_str()),
        ) else {
            continue;
        };
        let cell = sums.entry((row, col)).or_insert((0.0, 0));
        cell.0 += record.rating;
        cell.1 += 1;
    }

    let mut cells = Array2::from_elem(axes.shape(), None);
    for ((row, col), (sum, count)) in sums {
        cells[[row, col]] = Some(sum / count as f64);
    }
    cells
}

fn index_of(labels: &[String]) -> HashMap<&str, usize> {
    labels
        .iter()
        .enumerate()
        .map(|(idx, label)| (label.as_str(), idx))
        .collect()
}

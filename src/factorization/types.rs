use ndarray::{Array2, ArrayView1};
use serde::Serialize;

use crate::matrix::MatrixAxes;

/// Non-negative user (rows x k) and item (columns x k) factors
#[derive(Debug, Clone)]
pub struct LatentFactors {
    pub user_factors: Array2<f64>,
    pub item_factors: Array2<f64>,
}

impl LatentFactors {
    pub fn rank(&self) -> usize {
        self.user_factors.ncols()
    }

    pub fn reconstruct(&self) -> Array2<f64> {
        self.user_factors.dot(&self.item_factors.t())
    }
}

#[derive(Debug, Clone)]
pub struct FitReport {
    pub iterations: usize,
    pub converged: bool,
    /// Frobenius reconstruction error, starting with the initial guess
    pub error_history: Vec<f64>,
}

impl FitReport {
    pub fn final_error(&self) -> f64 {
        self.error_history.last().copied().unwrap_or(0.0)
    }
}

/// Dense U·Vᵗ reconstruction sharing the rating matrix axes
#[derive(Debug, Clone)]
pub struct PredictedMatrix {
    axes: MatrixAxes,
    values: Array2<f64>,
}

impl PredictedMatrix {
    pub fn new(axes: MatrixAxes, values: Array2<f64>) -> Self {
        debug_assert_eq!(axes.shape(), values.dim());
        Self { axes, values }
    }

    pub fn axes(&self) -> &MatrixAxes {
        &self.axes
    }

    pub fn items(&self) -> &[String] {
        &self.axes.items
    }

    pub fn row(&self, user_index: usize) -> Option<ArrayView1<'_, f64>> {
        (user_index < self.values.nrows()).then(|| self.values.row(user_index))
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationMetrics {
    pub rmse: f64,
    pub mae: f64,
    pub recall_at_k: f64,
    pub k: usize,
    pub held_out: usize,
    pub evaluated_users: usize,
}

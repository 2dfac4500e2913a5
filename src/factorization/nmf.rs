use log::{debug, info};
use ndarray::{Array2, Zip};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::convergence::{has_converged, should_continue};
use super::holdout::split_holdout;
use super::metrics::{mae, recall_at_k, rmse};
use super::types::{EvaluationMetrics, FitReport, LatentFactors, PredictedMatrix};
use crate::config::FactorizationSettings;
use crate::errors::{RecommendError, RecommendResult};
use crate::matrix::NormalizedMatrix;

const EPSILON: f64 = 1e-10;

/// Non-negative matrix factorization using Lee-Seung multiplicative updates
///
/// Minimises the Frobenius norm of `X - U·Vᵗ` with `U, V >= 0`. Each update
/// keeps entries non-negative and never increases the reconstruction error.
pub struct FactorizationEngine {
    settings: FactorizationSettings,
}

impl FactorizationEngine {
    pub fn new(settings: &FactorizationSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    pub fn rank(&self) -> usize {
        self.settings.rank
    }

    pub fn validate_shape(&self, rows: usize, columns: usize) -> RecommendResult<()> {
        let rank = self.settings.rank;
        if rows < 2 || columns == 0 || rank == 0 || rank >= rows.min(columns) {
            return Err(RecommendError::InvalidMatrixShape {
                rows,
                columns,
                rank,
            });
        }
        Ok(())
    }

    pub fn fit(&self, matrix: &NormalizedMatrix) -> RecommendResult<(LatentFactors, FitReport)> {
        let (rows, columns) = matrix.shape();
        self.validate_shape(rows, columns)?;
        Ok(self.fit_values(&matrix.values))
    }

    /// Fit and reconstruct the dense predicted-rating matrix
    pub fn predict(&self, matrix: &NormalizedMatrix) -> RecommendResult<PredictedMatrix> {
        let (factors, report) = self.fit(matrix)?;
        info!(
            "NMF rank {} fitted in {} iterations (converged: {}, error: {:.6})",
            factors.rank(),
            report.iterations,
            report.converged,
            report.final_error()
        );
        Ok(PredictedMatrix::new(matrix.axes.clone(), factors.reconstruct()))
    }

    /// Score a fit on a held-out share of the known cells
    pub fn evaluate(&self, matrix: &NormalizedMatrix) -> RecommendResult<EvaluationMetrics> {
        let (rows, columns) = matrix.shape();
        self.validate_shape(rows, columns)?;

        let split = split_holdout(matrix, self.settings.holdout_fraction, self.settings.seed)?;
        let (factors, _) = self.fit_values(&split.training);
        let predicted = factors.reconstruct();

        let pairs: Vec<(f64, f64)> = split
            .held_out
            .iter()
            .map(|&(row, col, actual)| (predicted[[row, col]], actual))
            .collect();
        let recall = recall_at_k(
            &predicted,
            &split.training_observed,
            &split.held_out,
            self.settings.recall_k,
            self.settings.relevance_threshold,
        );

        let metrics = EvaluationMetrics {
            rmse: rmse(&pairs),
            mae: mae(&pairs),
            recall_at_k: recall.recall,
            k: self.settings.recall_k,
            held_out: pairs.len(),
            evaluated_users: recall.evaluated_users,
        };
        info!(
            "Evaluation on {} held-out ratings: RMSE {:.4}, MAE {:.4}, Recall@{} {:.4}",
            metrics.held_out, metrics.rmse, metrics.mae, metrics.k, metrics.recall_at_k
        );
        Ok(metrics)
    }

    fn fit_values(&self, values: &Array2<f64>) -> (LatentFactors, FitReport) {
        let (rows, columns) = values.dim();
        let mut factors = self.initialize_factors(values, rows, columns);
        let report = self.iterate_until_convergence(values, &mut factors);
        (factors, report)
    }

    fn initialize_factors(&self, values: &Array2<f64>, rows: usize, columns: usize) -> LatentFactors {
        let rank = self.settings.rank;
        let mean = values.mean().unwrap_or(0.0).max(0.0);
        let scale = (mean / rank as f64).sqrt();
        let mut rng = StdRng::seed_from_u64(self.settings.seed);

        let user_factors = Array2::from_shape_fn((rows, rank), |_| scale * rng.r#gen::<f64>());
        let item_factors = Array2::from_shape_fn((columns, rank), |_| scale * rng.r#gen::<f64>());

        LatentFactors {
            user_factors,
            item_factors,
        }
    }

    fn iterate_until_convergence(&self, values: &Array2<f64>, factors: &mut LatentFactors) -> FitReport {
        let initial_error = reconstruction_error(values, factors);
        let mut error_history = vec![initial_error];
        let mut previous_error = initial_error;
        let mut iteration = 0;
        let mut converged = false;

        while should_continue(iteration, self.settings.max_iterations) {
            update_item_factors(values, factors);
            update_user_factors(values, factors);
            iteration += 1;

            let error = reconstruction_error(values, factors);
            error_history.push(error);

            if has_converged(initial_error, previous_error, error, self.settings.convergence_tolerance) {
                converged = true;
                debug!("NMF converged in {} iterations", iteration);
                break;
            }
            previous_error = error;
        }

        FitReport {
            iterations: iteration,
            converged,
            error_history,
        }
    }
}

// V <- V * (Xᵗ U) / (V Uᵗ U)
fn update_item_factors(values: &Array2<f64>, factors: &mut LatentFactors) {
    let u = &factors.user_factors;
    let numerator = values.t().dot(u);
    let denominator = factors.item_factors.dot(&u.t().dot(u));

    Zip::from(&mut factors.item_factors)
        .and(&numerator)
        .and(&denominator)
        .for_each(|v, &num, &den| *v *= num / (den + EPSILON));
}

// U <- U * (X V) / (U Vᵗ V)
fn update_user_factors(values: &Array2<f64>, factors: &mut LatentFactors) {
    let v = &factors.item_factors;
    let numerator = values.dot(v);
    let denominator = factors.user_factors.dot(&v.t().dot(v));

    Zip::from(&mut factors.user_factors)
        .and(&numerator)
        .and(&denominator)
        .for_each(|u, &num, &den| *u *= num / (den + EPSILON));
}

fn reconstruction_error(values: &Array2<f64>, factors: &LatentFactors) -> f64 {
    let residual = values - &factors.reconstruct();
    residual.mapv(|r| r * r).sum().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::MatrixAxes;
    use ndarray::array;

    fn settings(rank: usize) -> FactorizationSettings {
        FactorizationSettings {
            rank,
            max_iterations: 300,
            convergence_tolerance: 1e-6,
            ..FactorizationSettings::default()
        }
    }

    fn normalized(values: Array2<f64>) -> NormalizedMatrix {
        let (rows, cols) = values.dim();
        NormalizedMatrix {
            axes: MatrixAxes {
                users: (0..rows).map(|r| format!("u{r}")).collect(),
                items: (0..cols).map(|c| format!("i{c}")).collect(),
                active_row: None,
            },
            observed: values.mapv(|v| v > 0.0),
            values,
        }
    }

    fn sample() -> NormalizedMatrix {
        normalized(array![
            [1.0, 0.8, 0.0, 0.0],
            [0.9, 1.0, 0.1, 0.0],
            [0.0, 0.1, 1.0, 0.9],
            [0.0, 0.0, 0.8, 1.0],
            [1.0, 0.9, 0.0, 0.1],
        ])
    }

    #[test]
    fn test_rejects_single_row() {
        let engine = FactorizationEngine::new(&settings(1));
        let err = engine.fit(&normalized(array![[1.0, 0.5, 0.2]])).unwrap_err();

        assert_eq!(
            err,
            RecommendError::InvalidMatrixShape {
                rows: 1,
                columns: 3,
                rank: 1
            }
        );
    }

    #[test]
    fn test_rejects_rank_not_below_dimensions() {
        let engine = FactorizationEngine::new(&settings(4));

        assert!(matches!(
            engine.predict(&sample()),
            Err(RecommendError::InvalidMatrixShape { rank: 4, .. })
        ));
    }

    #[test]
    fn test_factors_are_non_negative() {
        let engine = FactorizationEngine::new(&settings(2));
        let (factors, _) = engine.fit(&sample()).unwrap();

        assert_eq!(factors.user_factors.dim(), (5, 2));
        assert_eq!(factors.item_factors.dim(), (4, 2));
        assert!(factors.user_factors.iter().all(|&v| v >= 0.0));
        assert!(factors.item_factors.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_error_history_is_non_increasing() {
        let engine = FactorizationEngine::new(&settings(2));
        let (_, report) = engine.fit(&sample()).unwrap();

        assert!(report.iterations > 0);
        assert_eq!(report.error_history.len(), report.iterations + 1);
        for pair in report.error_history.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-9, "error rose from {} to {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_iteration_bound_is_respected() {
        let engine = FactorizationEngine::new(&FactorizationSettings {
            max_iterations: 3,
            convergence_tolerance: 0.0,
            ..settings(2)
        });
        let (_, report) = engine.fit(&sample()).unwrap();

        assert_eq!(report.iterations, 3);
        assert!(!report.converged);
    }

    #[test]
    fn test_predict_recovers_block_structure() {
        let engine = FactorizationEngine::new(&settings(2));
        let predicted = engine.predict(&sample()).unwrap();
        let row = predicted.row(0).unwrap();

        assert_eq!(predicted.items().len(), 4);
        assert!(row[1] > row[2]);
        assert!(row[1] > row[3]);
    }

    #[test]
    fn test_fit_is_deterministic_for_seed() {
        let engine = FactorizationEngine::new(&settings(2));
        let first = engine.predict(&sample()).unwrap();
        let second = engine.predict(&sample()).unwrap();

        assert_eq!(first.values(), second.values());
    }

    #[test]
    fn test_evaluate_reports_bounded_metrics() {
        let engine = FactorizationEngine::new(&settings(2));
        let metrics = engine.evaluate(&sample()).unwrap();

        assert!(metrics.held_out > 0);
        assert!(metrics.rmse.is_finite() && metrics.rmse >= 0.0);
        assert!(metrics.mae >= 0.0 && metrics.mae <= metrics.rmse + 1e-12);
        assert!((0.0..=1.0).contains(&metrics.recall_at_k));
    }
}

use log::{info, warn};
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::settings::AppConfig;
use crate::dataset::InteractionRecord;
use crate::errors::{RecommendError, RecommendResult};
use crate::factorization::{EvaluationMetrics, FactorizationEngine};
use crate::matrix::{self, ActiveSelection, RatingMatrixBuilder};
use crate::recommend::{self, Recommendation, UnpopularRecommendation};

/// Everything one `recommend` request produced
#[derive(Debug, Clone, Default)]
pub struct RecommendationRun {
    pub recommendations: Vec<Recommendation>,
    pub dropped: Vec<String>,
    pub metrics: Option<EvaluationMetrics>,
}

/// Runs the full build, normalize, factorize and rank pipeline per request
///
/// The catalog and history are shared read-only; every request builds its
/// own matrices and factors.
pub struct RecommendationService {
    config: AppConfig,
    catalog: Arc<Catalog>,
    history: Arc<Vec<InteractionRecord>>,
}

impl RecommendationService {
    pub fn new(
        config: AppConfig,
        catalog: Arc<Catalog>,
        history: Arc<Vec<InteractionRecord>>,
    ) -> Self {
        Self {
            config,
            catalog,
            history,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recommend<S: AsRef<str>>(
        &self,
        selection: &[S],
        n: usize,
    ) -> RecommendResult<Vec<Recommendation>> {
        self.recommend_detailed(selection, n)
            .map(|run| run.recommendations)
    }

    pub fn recommend_detailed<S: AsRef<str>>(
        &self,
        selection: &[S],
        n: usize,
    ) -> RecommendResult<RecommendationRun> {
        let resolved = ActiveSelection::resolve(selection, &self.catalog);
        let mut run = RecommendationRun {
            dropped: resolved.dropped,
            ..RecommendationRun::default()
        };

        match self.rank(&resolved.selection, n) {
            Ok((recommendations, metrics)) => {
                run.recommendations = recommendations;
                run.metrics = metrics;
                Ok(run)
            }
            Err(RecommendError::EmptySelection) => {
                info!("No games selected, skipping recommendation");
                Ok(run)
            }
            Err(e) => Err(e),
        }
    }

    pub fn diversify(
        &self,
        recommendations: &[Recommendation],
        n: usize,
    ) -> Vec<UnpopularRecommendation> {
        recommend::diversify(recommendations, &self.catalog, n)
    }

    /// Accuracy of the factorization on the history alone
    pub fn evaluate(&self) -> RecommendResult<EvaluationMetrics> {
        let builder = RatingMatrixBuilder::new(&self.config.matrix);
        let ratings = builder.build_history(&self.history);
        let normalized = matrix::normalize(&ratings);

        FactorizationEngine::new(&self.config.factorization).evaluate(&normalized)
    }

    fn rank(
        &self,
        selection: &ActiveSelection,
        n: usize,
    ) -> RecommendResult<(Vec<Recommendation>, Option<EvaluationMetrics>)> {
        let builder = RatingMatrixBuilder::new(&self.config.matrix);
        let ratings = builder.build(&self.history, selection)?;
        let (rows, columns) = ratings.shape();
        info!("Rating matrix: {} users x {} games", rows, columns);

        if columns <= selection.len() {
            info!("Every game is already selected, nothing left to recommend");
            return Ok((Vec::new(), None));
        }

        let normalized = matrix::normalize(&ratings);
        let engine = FactorizationEngine::new(&self.config.factorization);
        let predicted = engine.predict(&normalized)?;
        let metrics = self.diagnostics(&engine, &normalized);

        let active_row = ratings.active_row().ok_or(RecommendError::EmptySelection)?;
        let recommendations = recommend::recommend(selection, &self.catalog, &predicted, active_row, n);
        info!("Recommending {} games", recommendations.len());

        Ok((recommendations, metrics))
    }

    fn diagnostics(
        &self,
        engine: &FactorizationEngine,
        normalized: &matrix::NormalizedMatrix,
    ) -> Option<EvaluationMetrics> {
        if !self.config.recommendation.evaluate_on_request {
            return None;
        }

        engine
            .evaluate(normalized)
            .inspect_err(|e| warn!("Skipping evaluation: {}", e))
            .ok()
    }
}

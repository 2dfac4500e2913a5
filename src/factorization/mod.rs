mod convergence;
pub mod holdout;
pub mod metrics;
pub mod nmf;
pub mod types;

pub use nmf::FactorizationEngine;
pub use types::{EvaluationMetrics, FitReport, LatentFactors, PredictedMatrix};

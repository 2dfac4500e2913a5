pub mod recommendation;

pub use recommendation::{RecommendationRun, RecommendationService};

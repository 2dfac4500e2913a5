pub mod settings;

pub use settings::{AppConfig, FactorizationSettings, MatrixSettings, RecommendationSettings};

#[derive(Debug, Clone)]
pub struct MatrixSettings {
    pub implicit_rating: f64,
}

impl Default for MatrixSettings {
    fn default() -> Self {
        Self {
            implicit_rating: 5.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FactorizationSettings {
    pub rank: usize,
    pub max_iterations: usize,
    pub convergence_tolerance: f64,
    pub seed: u64,
    pub holdout_fraction: f64,
    pub recall_k: usize,
    pub relevance_threshold: f64,
}

impl Default for FactorizationSettings {
    fn default() -> Self {
        Self {
            rank: 5,
            max_iterations: 200,
            convergence_tolerance: 1e-4,
            seed: 42,
            holdout_fraction: 0.2,
            recall_k: 10,
            relevance_threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecommendationSettings {
    pub default_count: usize,
    pub evaluate_on_request: bool,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            default_count: 5,
            evaluate_on_request: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub matrix: MatrixSettings,
    pub factorization: FactorizationSettings,
    pub recommendation: RecommendationSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            matrix: MatrixSettings::default(),
            factorization: FactorizationSettings::default(),
            recommendation: RecommendationSettings::default(),
        }
    }

    pub fn with_rank(mut self, rank: Option<usize>) -> Self {
        if let Some(rank) = rank {
            self.factorization.rank = rank;
        }
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        if let Some(max_iterations) = max_iterations {
            self.factorization.max_iterations = max_iterations;
        }
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if let Some(seed) = seed {
            self.factorization.seed = seed;
        }
        self
    }
}

pub const DEFAULT_DATASET_PATH: &str = "data/games.json";

pub fn dataset_path(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var("GAME_DATASET_PATH").ok())
        .unwrap_or_else(|| DEFAULT_DATASET_PATH.to_string())
}

use anyhow::Context as _;
use thiserror::Error;

/// Errors surfaced by a single recommendation request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    #[error("No games were selected")]
    EmptySelection,

    #[error("Unknown game: {0}")]
    UnknownItem(String),

    #[error("Cannot factorize a {rows}x{columns} matrix with rank {rank}")]
    InvalidMatrixShape {
        rows: usize,
        columns: usize,
        rank: usize,
    },

    #[error("No known ratings available to hold out for evaluation")]
    EmptyHoldout,
}

pub type RecommendResult<T> = Result<T, RecommendError>;

/// Add context to dataset load errors
pub fn load_context(path: &str) -> String {
    format!("Failed to load dataset from: {}", path)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with load context
pub fn with_load_context<T, E>(result: Result<T, E>, path: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(load_context(path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}

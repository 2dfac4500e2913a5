pub mod builder;
pub mod normalization;
pub mod selection;
pub mod types;

pub use builder::RatingMatrixBuilder;
pub use normalization::normalize;
pub use selection::{ActiveSelection, ResolvedSelection};
pub use types::{ACTIVE_USER_LABEL, MatrixAxes, NormalizedMatrix, RatingMatrix};

pub mod loader;
pub mod models;

pub use loader::{Dataset, build_dataset, load_dataset};
pub use models::{DatasetRow, InteractionRecord};

pub mod collection;
pub mod entry;

pub use collection::Catalog;
pub use entry::{CatalogEntry, GenreSet, ItemId, ItemMetadata, parse_genres};

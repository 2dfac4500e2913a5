use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type ItemId = String;
pub type GenreSet = BTreeSet<String>;

/// Metadata of a single game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub item_id: ItemId,
    pub image_ref: String,
    pub description: String,
    pub genres: GenreSet,
    pub popularity: usize,
}

/// Metadata joined onto ranked items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemMetadata {
    pub image_ref: String,
    pub description: String,
    pub genres: GenreSet,
}

impl CatalogEntry {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.contains(genre)
    }

    pub fn metadata(&self) -> ItemMetadata {
        ItemMetadata {
            image_ref: self.image_ref.clone(),
            description: self.description.clone(),
            genres: self.genres.clone(),
        }
    }
}

/// Split a delimited genre string ("Action,RPG") into a set of tags
pub fn parse_genres(raw: &str) -> GenreSet {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_genres_trims_and_skips_empty() {
        let genres = parse_genres("Action, RPG,,Indie ");

        assert_eq!(genres.len(), 3);
        assert!(genres.contains("Action"));
        assert!(genres.contains("RPG"));
        assert!(genres.contains("Indie"));
    }

    #[test]
    fn test_parse_genres_empty_string() {
        assert!(parse_genres("").is_empty());
    }
}

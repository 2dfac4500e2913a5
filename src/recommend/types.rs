use serde::Serialize;

use crate::catalog::{GenreSet, ItemMetadata};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub item_id: String,
    pub predicted_score: f64,
    pub image_ref: String,
    pub description: String,
    pub genres: GenreSet,
}

/// Long-tail pick sharing a genre with the recommendations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnpopularRecommendation {
    pub item_id: String,
    pub image_ref: String,
    pub description: String,
    pub genres: GenreSet,
}

impl Recommendation {
    pub fn new(item_id: String, predicted_score: f64, metadata: ItemMetadata) -> Self {
        Self {
            item_id,
            predicted_score,
            image_ref: metadata.image_ref,
            description: metadata.description,
            genres: metadata.genres,
        }
    }
}

impl UnpopularRecommendation {
    pub fn new(item_id: String, metadata: ItemMetadata) -> Self {
        Self {
            item_id,
            image_ref: metadata.image_ref,
            description: metadata.description,
            genres: metadata.genres,
        }
    }
}

use anyhow::Result;
use log::info;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::models::{DatasetRow, InteractionRecord};
use crate::catalog::{Catalog, CatalogEntry, parse_genres};
use crate::errors::{with_load_context, with_parse_context};

/// Catalog and interaction history loaded once at startup
pub struct Dataset {
    pub catalog: Catalog,
    pub interactions: Vec<InteractionRecord>,
}

pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let json = with_load_context(fs::read_to_string(path), &path.display().to_string())?;
    let rows: Vec<DatasetRow> = with_parse_context(serde_json::from_str(&json), "dataset rows")?;
    info!("Loaded {} rows from {}", rows.len(), path.display());

    let dataset = build_dataset(&rows);
    info!(
        "  → {} games, {} interactions",
        dataset.catalog.len(),
        dataset.interactions.len()
    );
    Ok(dataset)
}

pub fn build_dataset(rows: &[DatasetRow]) -> Dataset {
    Dataset {
        catalog: build_catalog(rows),
        interactions: rows.iter().map(InteractionRecord::from).collect(),
    }
}

fn build_catalog(rows: &[DatasetRow]) -> Catalog {
    let popularity = count_rows_per_game(rows);
    let mut latest: HashMap<&str, &DatasetRow> = HashMap::new();

    // Later rows overwrite earlier metadata for the same game
    for row in rows {
        latest.insert(row.game_name.as_str(), row);
    }

    Catalog::from_entries(
        latest
            .into_iter()
            .map(|(name, row)| build_entry(name, row, &popularity)),
    )
}

fn count_rows_per_game(rows: &[DatasetRow]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for row in rows {
        *counts.entry(row.game_name.as_str()).or_insert(0) += 1;
    }
    counts
}

fn build_entry(name: &str, row: &DatasetRow, popularity: &HashMap<&str, usize>) -> CatalogEntry {
    CatalogEntry {
        item_id: name.to_string(),
        image_ref: row.header_image.clone().unwrap_or_default(),
        description: row.short_description.clone().unwrap_or_default(),
        genres: row.genres.as_deref().map(parse_genres).unwrap_or_default(),
        popularity: popularity.get(name).copied().unwrap_or(0),
    }
}

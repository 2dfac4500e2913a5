use log::debug;
use std::collections::{BTreeSet, HashSet};

use super::types::{Recommendation, UnpopularRecommendation};
use crate::catalog::{Catalog, CatalogEntry};

/// Least popular games sharing a genre with the recommendations
///
/// Genres are visited in lexicographic order to collect candidates; the
/// candidates are then ordered by ascending popularity, ties by name.
pub fn diversify(
    recommendations: &[Recommendation],
    catalog: &Catalog,
    n: usize,
) -> Vec<UnpopularRecommendation> {
    if recommendations.is_empty() || n == 0 {
        return Vec::new();
    }

    let genres = collect_genres(recommendations);
    let excluded: HashSet<&str> = recommendations.iter().map(|r| r.item_id.as_str()).collect();
    let mut candidates = gather_candidates(&genres, catalog, &excluded);
    debug!(
        "{} long-tail candidates across {} genres",
        candidates.len(),
        genres.len()
    );

    candidates.sort_by_key(|e| e.popularity);

    candidates
        .into_iter()
        .take(n)
        .map(|e| UnpopularRecommendation::new(e.item_id.clone(), e.metadata()))
        .collect()
}

fn collect_genres(recommendations: &[Recommendation]) -> BTreeSet<&str> {
    recommendations
        .iter()
        .flat_map(|r| r.genres.iter().map(String::as_str))
        .collect()
}

fn gather_candidates<'a>(
    genres: &BTreeSet<&str>,
    catalog: &'a Catalog,
    excluded: &HashSet<&str>,
) -> Vec<&'a CatalogEntry> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for genre in genres {
        for entry in catalog.with_genre(genre) {
            if !excluded.contains(entry.item_id.as_str()) && seen.insert(entry.item_id.as_str()) {
                candidates.push(entry);
            }
        }
    }

    // The stable popularity sort in diversify keeps this name order for ties
    candidates.sort_by(|a, b| a.item_id.cmp(&b.item_id));
    candidates
}

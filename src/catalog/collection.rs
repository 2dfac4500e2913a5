use std::collections::BTreeMap;

use super::entry::{CatalogEntry, ItemMetadata};
use crate::errors::{RecommendError, RecommendResult};

/// Read-only catalog of games indexed by name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.add(entry);
        }
        catalog
    }

    pub fn add(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.item_id.clone(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.entries.contains_key(item_id)
    }

    pub fn get(&self, item_id: &str) -> Option<&CatalogEntry> {
        self.entries.get(item_id)
    }

    /// Entry lookup for callers that cannot proceed without it
    pub fn require(&self, item_id: &str) -> RecommendResult<&CatalogEntry> {
        self.get(item_id)
            .ok_or_else(|| RecommendError::UnknownItem(item_id.to_string()))
    }

    /// Metadata for an item, empty when the catalog has no entry for it
    pub fn metadata(&self, item_id: &str) -> ItemMetadata {
        self.get(item_id)
            .map(CatalogEntry::metadata)
            .unwrap_or_default()
    }

    pub fn popularity(&self, item_id: &str) -> usize {
        self.get(item_id).map(|e| e.popularity).unwrap_or(0)
    }

    /// Selectable item ids in lexicographic order
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn with_genre<'a>(&'a self, genre: &str) -> impl Iterator<Item = &'a CatalogEntry> {
        self.entries.values().filter(move |e| e.has_genre(genre))
    }

    /// Most interacted-with games, ties broken by name
    pub fn most_popular(&self, n: usize) -> Vec<&CatalogEntry> {
        let mut entries: Vec<&CatalogEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        entries.truncate(n);
        entries
    }
}

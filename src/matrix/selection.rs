use log::warn;
use std::collections::HashSet;

use crate::catalog::Catalog;

/// Games chosen for the current request, each an implicit top rating
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveSelection {
    items: Vec<String>,
}

/// Outcome of validating raw selected names against the catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedSelection {
    pub selection: ActiveSelection,
    pub dropped: Vec<String>,
}

impl ActiveSelection {
    /// Build a selection from known item ids, keeping first-seen order
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .map(Into::into)
            .filter(|item: &String| seen.insert(item.clone()))
            .collect();
        Self { items }
    }

    /// Keep only catalog items; unknown names are reported and dropped
    pub fn resolve<S: AsRef<str>>(raw: &[S], catalog: &Catalog) -> ResolvedSelection {
        let (known, dropped): (Vec<&str>, Vec<&str>) = raw
            .iter()
            .map(AsRef::as_ref)
            .partition(|item| catalog.contains(item));

        for item in &dropped {
            warn!("Dropping unknown game from selection: {}", item);
        }

        ResolvedSelection {
            selection: Self::new(known),
            dropped: dropped.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.items.iter().any(|i| i == item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, GenreSet};

    fn catalog() -> Catalog {
        Catalog::from_entries(["Portal", "Doom"].into_iter().map(|name| CatalogEntry {
            item_id: name.to_string(),
            image_ref: String::new(),
            description: String::new(),
            genres: GenreSet::new(),
            popularity: 1,
        }))
    }

    #[test]
    fn test_new_dedups_in_order() {
        let selection = ActiveSelection::new(["Doom", "Portal", "Doom"]);
        let items: Vec<&str> = selection.iter().collect();

        assert_eq!(items, vec!["Doom", "Portal"]);
    }

    #[test]
    fn test_resolve_drops_unknown() {
        let resolved = ActiveSelection::resolve(&["Portal", "Nonexistent Game"], &catalog());

        assert_eq!(resolved.selection, ActiveSelection::new(["Portal"]));
        assert_eq!(resolved.dropped, vec!["Nonexistent Game".to_string()]);
    }

    #[test]
    fn test_resolve_all_unknown_is_empty() {
        let resolved = ActiveSelection::resolve(&["Nonexistent Game"], &catalog());

        assert!(resolved.selection.is_empty());
    }
}

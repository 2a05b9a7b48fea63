use std::collections::BTreeSet;

use super::geo::{Bounds, LngLat};

/// An ordered list of conjunctive predicate stages over records of type `T`.
///
/// Stages that would match everything (blank query, empty selection) are not
/// added at all, so an unfiltered pipeline is a plain pass over the slice.
/// Records missing the field a stage needs simply fail that stage; nothing
/// here errors.
pub struct FilterPipeline<'a, T> {
    stages: Vec<Box<dyn Fn(&T) -> bool + 'a>>,
}

impl<'a, T> FilterPipeline<'a, T> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Case-insensitive substring search over the strings `fields` returns
    /// for each record. A blank or whitespace-only query adds no stage.
    pub fn with_search<F>(mut self, query: &str, fields: F) -> Self
    where
        F: Fn(&T) -> Vec<String> + 'a,
    {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self;
        }
        self.stages.push(Box::new(move |item| {
            fields(item)
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        }));
        self
    }

    /// Keeps records whose values intersect the selected set. An empty
    /// selection adds no stage.
    pub fn with_category<F>(mut self, selected: &BTreeSet<String>, values: F) -> Self
    where
        F: Fn(&T) -> Vec<String> + 'a,
    {
        if selected.is_empty() {
            return self;
        }
        let selected = selected.clone();
        self.stages.push(Box::new(move |item| {
            values(item).iter().any(|value| selected.contains(value))
        }));
        self
    }

    /// Keeps records whose coordinates fall inside `bounds`. Records without
    /// coordinates are dropped: a record with no location cannot be judged
    /// to lie inside an area.
    pub fn with_bounds<F>(mut self, bounds: Bounds, coords: F) -> Self
    where
        F: Fn(&T) -> Option<LngLat> + 'a,
    {
        self.stages.push(Box::new(move |item| {
            coords(item).is_some_and(|point| bounds.contains(point))
        }));
        self
    }

    pub fn matches(&self, item: &T) -> bool {
        self.stages.iter().all(|stage| stage(item))
    }

    pub fn apply<'i>(&self, items: &'i [T]) -> Vec<&'i T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

impl<T> Default for FilterPipeline<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot free-text search, see [`FilterPipeline::with_search`].
pub fn by_search<'i, T>(
    items: &'i [T],
    query: &str,
    fields: impl Fn(&T) -> Vec<String>,
) -> Vec<&'i T> {
    FilterPipeline::new().with_search(query, fields).apply(items)
}

/// One-shot categorical filter, see [`FilterPipeline::with_category`].
pub fn by_category<'i, T>(
    items: &'i [T],
    selected: &BTreeSet<String>,
    values: impl Fn(&T) -> Vec<String>,
) -> Vec<&'i T> {
    FilterPipeline::new()
        .with_category(selected, values)
        .apply(items)
}

/// One-shot viewport filter, see [`FilterPipeline::with_bounds`].
pub fn by_bounds<'i, T>(
    items: &'i [T],
    bounds: Bounds,
    coords: impl Fn(&T) -> Option<LngLat>,
) -> Vec<&'i T> {
    FilterPipeline::new().with_bounds(bounds, coords).apply(items)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::DirectoryEntry;

    fn entry(id: &str, name: &str, entry_type: &str, coords: Option<[f64; 2]>) -> DirectoryEntry {
        DirectoryEntry {
            id: id.to_string(),
            name: name.to_string(),
            entry_type: entry_type.to_string(),
            city: None,
            province: None,
            country: Some("Indonesia".to_string()),
            coords,
            topics: vec![],
            verified: false,
            description: None,
        }
    }

    fn test_directory() -> Vec<DirectoryEntry> {
        vec![
            entry("d-1", "Bank Sampah Melati", "waste bank", Some([106.8, -6.2])),
            entry("d-2", "Rumah Kompos Bandung", "composting hub", Some([107.6, -6.9])),
            entry("d-3", "Sahabat Laut", "cleanup community", None),
        ]
    }

    fn search_fields(e: &DirectoryEntry) -> Vec<String> {
        let mut fields = vec![e.name.clone(), e.entry_type.clone()];
        fields.extend(e.topics.iter().cloned());
        fields
    }

    #[test]
    fn empty_query_is_identity() {
        let items = test_directory();

        assert_eq!(by_search(&items, "", search_fields).len(), items.len());
        assert_eq!(by_search(&items, "   ", search_fields).len(), items.len());
    }

    #[test]
    fn search_matches_entry_type_case_insensitively() {
        let items = test_directory();

        let found = by_search(&items, "COMPOST", search_fields);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "d-2");
    }

    #[test]
    fn search_drops_records_without_matching_fields() {
        let items = test_directory();

        assert!(by_search(&items, "incinerator", search_fields).is_empty());
    }

    #[test]
    fn empty_selection_is_identity() {
        let items = test_directory();
        let selected = BTreeSet::new();

        let found = by_category(&items, &selected, |e| vec![e.entry_type.clone()]);

        assert_eq!(found.len(), items.len());
    }

    #[test]
    fn category_keeps_intersecting_records() {
        let items = test_directory();
        let selected: BTreeSet<String> =
            ["waste bank", "composting hub"].iter().map(|s| s.to_string()).collect();

        let found = by_category(&items, &selected, |e| vec![e.entry_type.clone()]);

        assert_eq!(found.len(), 2);
    }

    #[test]
    fn bounds_keep_inside_and_drop_unlocated() {
        let items = test_directory();
        let bounds = Bounds::new(100.0, -10.0, 110.0, 0.0);

        let found = by_bounds(&items, bounds, |e| e.coords.map(LngLat::from));

        // d-1 and d-2 are inside; d-3 has no coordinates and drops.
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn bounds_exclude_points_outside_the_box() {
        let items = vec![entry("d-4", "Papua Hub", "waste bank", Some([150.0, 0.0]))];
        let bounds = Bounds::new(100.0, -5.0, 110.0, 5.0);

        assert!(by_bounds(&items, bounds, |e| e.coords.map(LngLat::from)).is_empty());
    }

    #[test]
    fn stage_order_does_not_change_the_result() {
        let items = test_directory();
        let selected: BTreeSet<String> = ["waste bank"].iter().map(|s| s.to_string()).collect();
        let bounds = Bounds::new(100.0, -10.0, 110.0, 0.0);

        let search_first = FilterPipeline::new()
            .with_search("bank", search_fields)
            .with_category(&selected, |e: &DirectoryEntry| vec![e.entry_type.clone()])
            .with_bounds(bounds, |e: &DirectoryEntry| e.coords.map(LngLat::from))
            .apply(&items);

        let bounds_first = FilterPipeline::new()
            .with_bounds(bounds, |e: &DirectoryEntry| e.coords.map(LngLat::from))
            .with_category(&selected, |e: &DirectoryEntry| vec![e.entry_type.clone()])
            .with_search("bank", search_fields)
            .apply(&items);

        let ids: Vec<&str> = search_first.iter().map(|e| e.id.as_str()).collect();
        let other: Vec<&str> = bounds_first.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, other);
        assert_eq!(ids, vec!["d-1"]);
    }

    #[test]
    fn pipeline_without_stages_returns_everything() {
        let items = test_directory();

        let found = FilterPipeline::<DirectoryEntry>::new().apply(&items);

        assert_eq!(found.len(), items.len());
    }
}

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::filter::Bounds;

/// Per-page filter state: free-text search, multi-select categorical
/// filters keyed by facet name, and an optional map viewport.
///
/// Owned by whichever page is active and reset on navigation; nothing here
/// is persisted across sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub selections: BTreeMap<String, BTreeSet<String>>,
    pub bounds: Option<Bounds>,
}

impl FilterState {
    pub fn toggle(&mut self, key: &str, value: &str) {
        let values = self.selections.entry(key.to_string()).or_default();
        if !values.remove(value) {
            values.insert(value.to_string());
        }
        if values.is_empty() {
            self.selections.remove(key);
        }
    }

    pub fn selected(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.selections.get(key)
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.selections.clear();
        self.bounds = None;
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.selections.is_empty() && self.bounds.is_none()
    }
}

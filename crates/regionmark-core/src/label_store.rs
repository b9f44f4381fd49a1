//! Label Store - annotation text keyed by region id
//!
//! Labels live independently of region objects: a region may be destroyed
//! and recreated by the surface while its label stays under the old key.
//! Nothing here checks whether an id is still listed by the Region Store.

use std::collections::HashMap;

use crate::types::RegionId;

#[derive(Debug, Clone, Default)]
pub struct LabelStore {
    labels: HashMap<RegionId, String>,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label text for a region, or `""` when none was ever set
    pub fn get(&self, id: &RegionId) -> &str {
        self.labels.get(id).map(String::as_str).unwrap_or("")
    }

    /// Store text for a region. Accepted for unknown or already-removed ids.
    pub fn set(&mut self, id: RegionId, text: impl Into<String>) {
        self.labels.insert(id, text.into());
    }

    /// Drop the label for a region. Returns the previous text, if any.
    pub fn delete(&mut self, id: &RegionId) -> Option<String> {
        self.labels.remove(id)
    }

    pub fn contains(&self, id: &RegionId) -> bool {
        self.labels.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }
}

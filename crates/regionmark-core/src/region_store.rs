//! Region Store - the committed regions of the loaded file
//!
//! Entries are kept in insertion order. The ordering by start time that the
//! rest of the engine sees is a projection computed on every [`RegionStore::list`]
//! call, never stored state, so ties on `start` fall back to insertion order.

use crate::types::{Region, RegionId, Time};

/// Authoritative collection of regions as last reported by the surface
#[derive(Debug, Clone, Default)]
pub struct RegionStore {
    /// Regions in the order they were first seen
    entries: Vec<Region>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regions sorted by start ascending (stable on ties)
    pub fn list(&self) -> Vec<Region> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| a.start.total_cmp(&b.start));
        sorted
    }

    /// Insert a region, or overwrite the bounds of an existing one
    ///
    /// The last reported bounds always win; an existing entry keeps its
    /// insertion slot so tie-breaking stays stable across drag updates.
    pub fn upsert(&mut self, region: Region) {
        match self.entries.iter_mut().find(|r| r.id == region.id) {
            Some(existing) => *existing = region,
            None => self.entries.push(region),
        }
    }

    /// Remove a region by id. Unknown ids are ignored.
    ///
    /// Returns the removed region, if any.
    pub fn remove(&mut self, id: &RegionId) -> Option<Region> {
        let index = self.entries.iter().position(|r| &r.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Replace the whole collection with the surface's current listing
    ///
    /// The iterator order becomes the new insertion order.
    pub fn sync<I>(&mut self, regions: I)
    where
        I: IntoIterator<Item = Region>,
    {
        self.entries.clear();
        for region in regions {
            self.upsert(region);
        }
    }

    pub fn get(&self, id: &RegionId) -> Option<&Region> {
        self.entries.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &RegionId) -> bool {
        self.get(id).is_some()
    }

    /// First region in list order whose interval contains `time`
    pub fn first_containing(&self, time: Time) -> Option<Region> {
        self.list().into_iter().find(|r| r.contains(time))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

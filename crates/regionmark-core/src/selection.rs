//! Selection Tracker - which region the label editor is bound to
//!
//! Two sources feed the active region:
//! - pointer hover (`RegionEnter` / `RegionLeave`), which wins while the
//!   playhead stays inside the hovered region's span
//! - playhead seeks, which pick the first region in Region Store order whose
//!   inclusive interval contains the new time (earliest start on overlap)
//!
//! Every seek re-derives from the store; the previous selection is never
//! trusted because regions may have moved since.

use crate::region_store::RegionStore;
use crate::types::{Region, RegionId, Time};

/// Reported whenever the active region changes
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange {
    pub previous: Option<RegionId>,
    pub current: Option<RegionId>,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    active: Option<RegionId>,
    hovered: Option<RegionId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&RegionId> {
        self.active.as_ref()
    }

    pub fn hovered(&self) -> Option<&RegionId> {
        self.hovered.as_ref()
    }

    /// Pointer entered a region
    pub fn on_enter(&mut self, region: &Region) -> Option<SelectionChange> {
        self.hovered = Some(region.id.clone());
        self.set_active(Some(region.id.clone()))
    }

    /// Pointer left a region
    ///
    /// A leave for a region that is neither hovered nor active is stale and
    /// leaves the selection alone.
    pub fn on_leave(&mut self, region: &Region) -> Option<SelectionChange> {
        if self.hovered.as_ref() == Some(&region.id) {
            self.hovered = None;
        }
        if self.active.as_ref() == Some(&region.id) {
            self.set_active(None)
        } else {
            None
        }
    }

    /// Playhead moved to `time`
    pub fn on_seek(&mut self, time: Time, store: &RegionStore) -> Option<SelectionChange> {
        let hovered_still_covers = self
            .hovered
            .as_ref()
            .and_then(|id| store.get(id))
            .is_some_and(|r| r.contains(time));

        let next = if hovered_still_covers {
            self.hovered.clone()
        } else {
            self.hovered = None;
            store.first_containing(time).map(|r| r.id)
        };
        self.set_active(next)
    }

    /// A region disappeared from the surface
    pub fn on_region_removed(&mut self, id: &RegionId) -> Option<SelectionChange> {
        if self.hovered.as_ref() == Some(id) {
            self.hovered = None;
        }
        if self.active.as_ref() == Some(id) {
            self.set_active(None)
        } else {
            None
        }
    }

    /// Clear both sources
    pub fn clear(&mut self) -> Option<SelectionChange> {
        self.hovered = None;
        self.set_active(None)
    }

    fn set_active(&mut self, next: Option<RegionId>) -> Option<SelectionChange> {
        if self.active == next {
            return None;
        }
        let previous = std::mem::replace(&mut self.active, next.clone());
        log::debug!("selection: {:?} -> {:?}", previous, next);
        Some(SelectionChange {
            previous,
            current: next,
        })
    }
}

//! Pending-Region Builder - two-press region creation
//!
//! The first trigger anchors one endpoint at the playhead and puts a
//! zero-length provisional region on the surface. The second trigger removes
//! the provisional region and asks the surface for the final one, with the
//! endpoints ordered regardless of which direction the playhead moved.
//!
//! The final region is never inserted into the Region Store from here; it
//! arrives through the surface's `RegionCreated` event so ids stay
//! surface-assigned.

use crate::surface::Surface;
use crate::types::{Region, RegionBounds, RegionId, Time};

/// A region under construction
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRegion {
    /// Playhead time of the first trigger
    pub anchor: Time,
    /// Zero-length marker shown on the surface while anchored
    pub provisional_region_id: Option<RegionId>,
}

/// Result of one trigger
#[derive(Debug, Clone, PartialEq)]
pub enum PendingOutcome {
    /// Idle → Anchored
    Anchored(PendingRegion),
    /// Anchored → Idle, with the region the surface created
    Committed(Region),
}

/// Two-state builder: idle when `pending` is `None`, anchored otherwise
#[derive(Debug, Clone, Default)]
pub struct PendingRegionBuilder {
    pending: Option<PendingRegion>,
}

impl PendingRegionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_anchored(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingRegion> {
        self.pending.as_ref()
    }

    /// The start/end region action
    pub fn trigger<S: Surface + ?Sized>(&mut self, surface: &mut S) -> PendingOutcome {
        match self.pending.take() {
            None => {
                let now = surface.current_time();
                let provisional = surface.create_region(RegionBounds::point(now), true);
                let pending = PendingRegion {
                    anchor: now,
                    provisional_region_id: Some(provisional.id),
                };
                log::info!("pending: anchored at {:.3}s", now);
                self.pending = Some(pending.clone());
                PendingOutcome::Anchored(pending)
            }
            Some(pending) => {
                let end = surface.current_time();
                if let Some(id) = pending.provisional_region_id.as_ref() {
                    surface.remove_region(id);
                }
                let region = surface.create_region(RegionBounds::new(pending.anchor, end), true);
                log::info!(
                    "pending: committed {} [{:.3}, {:.3}]",
                    region.id,
                    region.start,
                    region.end
                );
                PendingOutcome::Committed(region)
            }
        }
    }

    /// Explicit commit. A no-op returning `None` while idle.
    pub fn commit<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<Region> {
        if !self.is_anchored() {
            log::debug!("pending: commit ignored, nothing pending");
            return None;
        }
        match self.trigger(surface) {
            PendingOutcome::Committed(region) => Some(region),
            PendingOutcome::Anchored(_) => None,
        }
    }

    /// The surface removed a region on its own
    ///
    /// If it was the provisional region, the gesture is abandoned without
    /// committing anything. Returns whether the builder was reset.
    pub fn on_region_removed(&mut self, id: &RegionId) -> bool {
        let is_provisional = self
            .pending
            .as_ref()
            .and_then(|p| p.provisional_region_id.as_ref())
            .is_some_and(|pid| pid == id);
        if is_provisional {
            log::info!("pending: provisional region {} removed externally, reset", id);
            self.pending = None;
        }
        is_provisional
    }

    /// Drop any pending gesture without touching the surface
    pub fn reset(&mut self) {
        self.pending = None;
    }
}

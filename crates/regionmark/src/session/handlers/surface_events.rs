//! Surface event handlers
//!
//! Handles: RegionCreated, RegionUpdated, RegionUpdateEnd, RegionRemoved,
//! RegionEnter, RegionLeave, Seek, ZoomChanged

use std::time::Instant;

use regionmark_core::selection::SelectionChange;
use regionmark_core::surface::{Surface, SurfaceEvent};

use super::super::AnnotationSession;

impl<S: Surface> AnnotationSession<S> {
    pub(in crate::session) fn handle_surface_event(&mut self, event: SurfaceEvent, now: Instant) {
        let lifecycle = event.is_region_lifecycle();
        match event {
            SurfaceEvent::RegionCreated(region) => {
                self.regions.upsert(region);
            }
            SurfaceEvent::RegionUpdated(region) | SurfaceEvent::RegionUpdateEnd(region) => {
                if !self.regions.contains(&region.id) {
                    log::debug!("late update for unknown region {}, ignored", region.id);
                    return;
                }
                self.regions.upsert(region);
            }
            SurfaceEvent::RegionRemoved(id) => {
                if self.regions.remove(&id).is_none() {
                    log::debug!("region-removed for unknown region {}", id);
                }
                self.pending.on_region_removed(&id);
                let change = self.selection.on_region_removed(&id);
                self.apply_selection_change(change);
            }
            SurfaceEvent::RegionEnter(region) => {
                if !self.regions.contains(&region.id) {
                    log::debug!("late enter for unknown region {}, ignored", region.id);
                    return;
                }
                self.regions.upsert(region.clone());
                let change = self.selection.on_enter(&region);
                self.apply_selection_change(change);
            }
            SurfaceEvent::RegionLeave(region) => {
                let change = self.selection.on_leave(&region);
                self.apply_selection_change(change);
            }
            SurfaceEvent::Seek(time) => {
                // Re-derive from what the surface holds right now
                self.regions.sync(self.surface.regions());
                let change = self.selection.on_seek(time, &self.regions);
                self.apply_selection_change(change);
            }
            SurfaceEvent::ZoomChanged(level) => {
                self.zoom.sync(level);
                self.aux_view_generation += 1;
                log::debug!(
                    "zoom changed to {} px/s, aux views invalidated (generation {})",
                    level,
                    self.aux_view_generation
                );
            }
        }

        if lifecycle {
            self.recompute.schedule(now, ());
        }
    }

    /// Drop a selection whose region is no longer in the store
    pub(in crate::session) fn prune_selection(&mut self) {
        let Some(id) = self.selection.active().cloned() else {
            return;
        };
        if !self.regions.contains(&id) {
            log::debug!("selection: active region {} vanished, clearing", id);
            let change = self.selection.on_region_removed(&id);
            self.apply_selection_change(change);
        }
    }

    /// Rebind the label editor when the active region changed
    pub(in crate::session) fn apply_selection_change(&mut self, change: Option<SelectionChange>) {
        let Some(change) = change else {
            return;
        };
        log::info!("selection: {:?} -> {:?}", change.previous, change.current);
        self.editor.bind(change.current.as_ref(), &self.labels);
    }
}

//! Event pump and debounced work
//!
//! Runs after every message: drains the surface subscription, then fires
//! the region recompute and the settled wheel zoom step once their quiet
//! windows have elapsed.

use std::time::Instant;

use regionmark_core::surface::Surface;
use regionmark_core::zoom::ZoomDirection;

use super::super::AnnotationSession;

impl<S: Surface> AnnotationSession<S> {
    pub(in crate::session) fn pump(&mut self, now: Instant) {
        self.drain_events(now);

        if self.recompute.poll(now).is_some() {
            self.recompute_regions();
        }
        if let Some(direction) = self.input.poll_wheel(now) {
            self.apply_zoom_step(direction);
            // Pick up the ZoomChanged raised by the step
            self.drain_events(now);
        }
    }

    fn drain_events(&mut self, now: Instant) {
        while let Some(event) = self.events.as_ref().and_then(|rx| rx.try_recv().ok()) {
            self.handle_surface_event(event, now);
        }
    }

    /// Rebuild the visible region list from the surface's current regions
    fn recompute_regions(&mut self) {
        self.regions.sync(self.surface.regions());
        self.prune_selection();
        self.visible = self.regions.list();
        self.recompute_count += 1;
        log::debug!(
            "recompute #{}: {} region(s)",
            self.recompute_count,
            self.visible.len()
        );
    }

    fn apply_zoom_step(&mut self, direction: ZoomDirection) {
        if self.loaded_file.is_none() {
            return;
        }
        self.zoom.sync(self.surface.zoom_level());
        if let Some(level) = self.zoom.step(direction) {
            log::info!("zoom: {:?} -> {} px/s", direction, level);
            self.surface.set_zoom(level);
        }
    }
}

//! Label and region editing handlers
//!
//! Handles: EditLabel, SetLabel, DeleteActive, DeleteRegion

use regionmark_core::surface::Surface;
use regionmark_core::RegionId;

use super::super::{AnnotationSession, Outcome};

impl<S: Surface> AnnotationSession<S> {
    /// Handle EditLabel message
    ///
    /// Typing with no active region is inert.
    pub(in crate::session) fn handle_edit_label(&mut self, text: String) -> Outcome {
        let Some(id) = self.selection.active().cloned() else {
            log::debug!("edit label ignored, no active region");
            return Outcome::Ignored;
        };
        self.labels.set(id, text);
        self.editor.refresh(&self.labels);
        Outcome::Handled
    }

    /// Handle SetLabel message
    ///
    /// Accepted for any id, including regions the store no longer lists.
    pub(in crate::session) fn handle_set_label(&mut self, id: RegionId, text: String) -> Outcome {
        if !self.regions.contains(&id) {
            log::debug!("set label for unlisted region {}", id);
        }
        self.labels.set(id, text);
        self.editor.refresh(&self.labels);
        Outcome::Handled
    }

    /// Handle DeleteActive message
    pub(in crate::session) fn handle_delete_active(&mut self) -> Outcome {
        match self.selection.active().cloned() {
            Some(id) => self.handle_delete_region(&id),
            None => Outcome::Ignored,
        }
    }

    /// Handle DeleteRegion message
    ///
    /// Clears the selection if it pointed at the region, removes the region
    /// from the surface and purges its label. The store drops the region
    /// when the surface reports the removal.
    pub(in crate::session) fn handle_delete_region(&mut self, id: &RegionId) -> Outcome {
        let change = self.selection.on_region_removed(id);
        self.apply_selection_change(change);
        self.surface.remove_region(id);
        if self.labels.delete(id).is_some() {
            log::debug!("delete: purged label of {}", id);
        }
        log::info!("delete: region {}", id);
        Outcome::Handled
    }
}

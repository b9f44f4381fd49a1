//! Label editor state
//!
//! Mirrors the text box under the waveform: which region it is bound to,
//! what it shows, and whether it just asked for keyboard focus.

use regionmark_core::label_store::LabelStore;
use regionmark_core::RegionId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelEditor {
    bound: Option<RegionId>,
    text: String,
    focus_requested: bool,
}

impl LabelEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebind to a newly active region (or none) and reload its text
    ///
    /// Focus is only requested when a region becomes active.
    pub fn bind(&mut self, region: Option<&RegionId>, labels: &LabelStore) {
        self.bound = region.cloned();
        self.text = region.map(|id| labels.get(id)).unwrap_or("").to_string();
        self.focus_requested = region.is_some();
    }

    /// Reload the text after the label store changed
    pub fn refresh(&mut self, labels: &LabelStore) {
        if let Some(id) = self.bound.as_ref() {
            self.text = labels.get(id).to_string();
        }
    }

    pub fn bound(&self) -> Option<&RegionId> {
        self.bound.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// No region to write to
    pub fn is_read_only(&self) -> bool {
        self.bound.is_none()
    }

    pub fn focus_requested(&self) -> bool {
        self.focus_requested
    }

    /// Consume the focus request (the UI moved focus)
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

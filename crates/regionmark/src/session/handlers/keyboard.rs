//! Keyboard and wheel handlers
//!
//! Handles: KeyPressed, Wheel

use std::time::Instant;

use regionmark_core::pending::PendingOutcome;
use regionmark_core::surface::Surface;

use super::super::{AnnotationSession, Outcome};
use crate::input::{KeyAction, KeyEvent, WheelEvent};

impl<S: Surface> AnnotationSession<S> {
    /// Handle KeyPressed message
    pub(in crate::session) fn handle_key_pressed(&mut self, event: &KeyEvent) -> Outcome {
        let Some(action) = self.input.dispatch_key(event) else {
            return Outcome::Ignored;
        };
        if self.loaded_file.is_none() {
            log::debug!("key {:?} ignored, no file loaded", event.key);
            return Outcome::Handled;
        }

        match action {
            KeyAction::TogglePlayback => {
                if self.surface.is_playing() {
                    self.surface.pause();
                } else {
                    self.surface.play();
                }
                log::debug!("transport: playing={}", self.surface.is_playing());
            }
            KeyAction::RegionTrigger => match self.pending.trigger(&mut self.surface) {
                PendingOutcome::Anchored(pending) => {
                    log::debug!("region trigger: anchored at {:.3}s", pending.anchor);
                }
                PendingOutcome::Committed(region) => {
                    log::debug!("region trigger: committed {}", region.id);
                }
            },
        }
        Outcome::Handled
    }

    /// Handle Wheel message
    pub(in crate::session) fn handle_wheel(&mut self, event: &WheelEvent, now: Instant) -> Outcome {
        Outcome::from_handled(self.input.dispatch_wheel(event, now))
    }
}

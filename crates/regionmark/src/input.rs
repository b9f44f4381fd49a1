//! Input Dispatcher - keyboard and wheel guards
//!
//! Keyboard: an event counts only with no modifier held, when it is not an
//! auto-repeat, and when it matches the play/pause or region binding. Only
//! those handled keys suppress the platform default action.
//!
//! Wheel: an event counts only when it originates on the waveform or on a
//! region and carries a non-zero vertical delta. Accepted events are
//! coalesced; one zoom step is released per settled gesture.

use std::time::{Duration, Instant};

use regionmark_core::debounce::Debouncer;
use regionmark_core::zoom::ZoomDirection;
use serde::{Deserialize, Serialize};

use crate::keybindings::{key_to_string, AnnotateKeybindings};

/// Modifier keys held during a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.ctrl || self.shift || self.alt
    }
}

/// A key press as delivered by the windowing layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Key name, e.g. "Space", "Enter", "a"
    pub key: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Auto-repeat while the key is held down
    #[serde(default)]
    pub repeat: bool,
}

impl KeyEvent {
    /// A plain, first press of `key`
    pub fn press(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            repeat: false,
        }
    }
}

/// Engine action bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    TogglePlayback,
    /// Begin, or commit, the pending region
    RegionTrigger,
}

/// Visual element a wheel event originated on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WheelTarget {
    Waveform,
    Region,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    pub target: WheelTarget,
    pub delta_y: f64,
}

pub struct InputDispatcher {
    bindings: AnnotateKeybindings,
    wheel: Debouncer<ZoomDirection>,
}

impl InputDispatcher {
    pub fn new(bindings: AnnotateKeybindings, wheel_window: Duration) -> Self {
        Self {
            bindings,
            wheel: Debouncer::new(wheel_window),
        }
    }

    pub fn bindings(&self) -> &AnnotateKeybindings {
        &self.bindings
    }

    /// Translate a key press. `Some` means handled: suppress the default action.
    pub fn dispatch_key(&self, event: &KeyEvent) -> Option<KeyAction> {
        if event.modifiers.any() || event.repeat {
            return None;
        }
        let key_str = key_to_string(&event.key, &event.modifiers);
        if key_str.is_empty() {
            return None;
        }

        if self.bindings.match_play_pause(&key_str) {
            Some(KeyAction::TogglePlayback)
        } else if self.bindings.match_region(&key_str) {
            Some(KeyAction::RegionTrigger)
        } else {
            None
        }
    }

    /// Feed a wheel event into the zoom debouncer
    ///
    /// Returns whether the event passed the target and delta guards.
    pub fn dispatch_wheel(&mut self, event: &WheelEvent, now: Instant) -> bool {
        if !matches!(event.target, WheelTarget::Waveform | WheelTarget::Region) {
            return false;
        }
        let Some(direction) = ZoomDirection::from_wheel_delta(event.delta_y) else {
            return false;
        };
        self.wheel.schedule(now, direction);
        true
    }

    /// Zoom step from the last settled wheel gesture, if its window elapsed
    pub fn poll_wheel(&mut self, now: Instant) -> Option<ZoomDirection> {
        self.wheel.poll(now)
    }

    pub fn wheel_pending(&self) -> bool {
        self.wheel.is_pending()
    }

    /// Forget any wheel gesture still settling
    pub fn reset(&mut self) {
        self.wheel.cancel();
    }
}

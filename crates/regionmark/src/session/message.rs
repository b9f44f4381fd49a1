//! Session messages
//!
//! Every input the annotation session reacts to, whether it comes from the
//! keyboard, the wheel, the label editor or the waveform surface.

use regionmark_core::surface::SurfaceEvent;
use regionmark_core::RegionId;

use crate::input::{KeyEvent, WheelEvent};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Input
    KeyPressed(KeyEvent),
    Wheel(WheelEvent),

    // Label editor
    /// Text typed into the label editor (applies to the active region)
    EditLabel(String),
    /// Set a label for any region id, listed or not
    SetLabel { id: RegionId, text: String },

    // Region list
    /// Delete the active region, if any
    DeleteActive,
    DeleteRegion(RegionId),

    /// Event from a surface that is not wired through a subscription channel
    Surface(SurfaceEvent),

    /// Time passed; fire any debounced work that has settled
    Tick,
}

/// Whether a message was consumed
///
/// For key presses, `Handled` means the platform default action must be
/// suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    Ignored,
}

impl Outcome {
    pub fn from_handled(handled: bool) -> Self {
        if handled {
            Outcome::Handled
        } else {
            Outcome::Ignored
        }
    }

    pub fn is_handled(self) -> bool {
        self == Outcome::Handled
    }
}

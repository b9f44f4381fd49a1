//! Surface Adapter - boundary to the waveform renderer
//!
//! The renderer owns the visual regions, the transport and the zoom level.
//! The engine drives it through [`Surface`] and hears back through a
//! [`SurfaceEvent`] channel obtained from [`Surface::subscribe`]. Bounds carried
//! by events are authoritative over anything the engine cached earlier.

mod sim;

use std::path::Path;

use crossbeam::channel::Receiver;

use crate::error::Result;
use crate::types::{Region, RegionBounds, RegionId, Time};

pub use sim::SimSurface;

/// Lifecycle and transport events raised by the surface
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// A region was added (by the engine or by a user gesture on the waveform)
    RegionCreated(Region),
    /// Intermediate bounds during a drag or resize
    RegionUpdated(Region),
    /// Final bounds once a drag or resize gesture is released
    RegionUpdateEnd(Region),
    RegionRemoved(RegionId),
    /// Pointer entered a region's span
    RegionEnter(Region),
    /// Pointer left a region's span
    RegionLeave(Region),
    /// Playback cursor moved to a new position
    Seek(Time),
    /// Zoom level changed (pixels per second)
    ZoomChanged(f64),
}

impl SurfaceEvent {
    /// Whether this event changes the set or bounds of regions
    pub fn is_region_lifecycle(&self) -> bool {
        matches!(
            self,
            SurfaceEvent::RegionCreated(_)
                | SurfaceEvent::RegionUpdated(_)
                | SurfaceEvent::RegionUpdateEnd(_)
                | SurfaceEvent::RegionRemoved(_)
        )
    }
}

/// Capabilities the engine needs from a waveform renderer
pub trait Surface {
    /// Load an audio file, discarding any regions from a previous file
    fn load(&mut self, path: &Path) -> Result<()>;

    /// Open a new event subscription
    ///
    /// Dropping the receiver releases the subscription.
    fn subscribe(&mut self) -> Receiver<SurfaceEvent>;

    /// Release every subscription and visual region
    fn destroy(&mut self);

    /// Create a region and return it with its surface-assigned id
    fn create_region(&mut self, bounds: RegionBounds, editable: bool) -> Region;

    /// Remove a region. Unknown ids are ignored.
    fn remove_region(&mut self, id: &RegionId);

    /// Every region currently on the surface, in creation order
    fn regions(&self) -> Vec<Region>;

    fn current_time(&self) -> Time;

    fn is_playing(&self) -> bool;

    fn play(&mut self);

    fn pause(&mut self);

    /// Current zoom level in pixels per second
    fn zoom_level(&self) -> f64;

    fn set_zoom(&mut self, px_per_sec: f64);
}

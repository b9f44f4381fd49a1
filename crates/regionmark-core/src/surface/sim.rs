//! In-memory waveform surface
//!
//! Keeps regions, transport and zoom without rendering anything. Besides the
//! [`Surface`] calls made by the engine, it exposes the gestures a user would
//! perform on a real waveform (drag, hover, drag-select, seek) so that a whole
//! session can be replayed headless.

use std::path::{Path, PathBuf};

use crossbeam::channel::{self, Receiver, Sender};

use super::{Surface, SurfaceEvent};
use crate::error::{Result, SurfaceError};
use crate::types::{Region, RegionBounds, RegionId, Time};

/// Default zoom of a freshly created waveform (pixels per second)
pub const DEFAULT_PX_PER_SEC: f64 = 20.0;

#[derive(Debug, Clone)]
struct SimRegion {
    region: Region,
    editable: bool,
}

/// Headless [`Surface`] implementation
#[derive(Debug)]
pub struct SimSurface {
    loaded: Option<PathBuf>,
    duration: Time,
    position: Time,
    playing: bool,
    zoom: f64,
    /// Regions in creation order
    regions: Vec<SimRegion>,
    next_id: u64,
    subscribers: Vec<Sender<SurfaceEvent>>,
}

impl SimSurface {
    /// Create a surface whose loaded audio lasts `duration` seconds
    pub fn new(duration: Time) -> Self {
        Self {
            loaded: None,
            duration: duration.max(0.0),
            position: 0.0,
            playing: false,
            zoom: DEFAULT_PX_PER_SEC,
            regions: Vec::new(),
            next_id: 1,
            subscribers: Vec::new(),
        }
    }

    pub fn loaded_file(&self) -> Option<&Path> {
        self.loaded.as_deref()
    }

    pub fn duration(&self) -> Time {
        self.duration
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether a region was created draggable/resizable
    pub fn is_editable(&self, id: &RegionId) -> Option<bool> {
        self.find(id).map(|r| r.editable)
    }

    /// Advance the playhead while playing, without raising a seek
    pub fn advance(&mut self, seconds: Time) {
        if !self.playing {
            return;
        }
        self.position = (self.position + seconds.max(0.0)).min(self.duration);
        if self.position >= self.duration {
            self.playing = false;
        }
    }

    /// Move the playhead (user click on the waveform)
    pub fn seek(&mut self, time: Time) {
        self.position = time.clamp(0.0, self.duration);
        self.emit(SurfaceEvent::Seek(self.position));
    }

    /// Drag-select a new region directly on the waveform
    pub fn user_create_region(&mut self, bounds: RegionBounds) -> Region {
        self.create_region(bounds, true)
    }

    /// One intermediate step of a drag or resize gesture
    ///
    /// Returns `false` for unknown or locked regions.
    pub fn drag_region(&mut self, id: &RegionId, bounds: RegionBounds) -> bool {
        let Some(entry) = self.find_mut(id) else {
            return false;
        };
        if !entry.editable {
            return false;
        }
        entry.region = Region::new(id.clone(), bounds);
        let region = entry.region.clone();
        self.emit(SurfaceEvent::RegionUpdated(region));
        true
    }

    /// Release a drag or resize gesture
    pub fn finish_drag(&mut self, id: &RegionId) -> bool {
        let Some(region) = self.find(id).map(|r| r.region.clone()) else {
            return false;
        };
        self.emit(SurfaceEvent::RegionUpdateEnd(region));
        true
    }

    /// Pointer enters a region
    pub fn hover_enter(&mut self, id: &RegionId) -> bool {
        let Some(region) = self.find(id).map(|r| r.region.clone()) else {
            return false;
        };
        self.emit(SurfaceEvent::RegionEnter(region));
        true
    }

    /// Pointer leaves a region
    pub fn hover_leave(&mut self, id: &RegionId) -> bool {
        let Some(region) = self.find(id).map(|r| r.region.clone()) else {
            return false;
        };
        self.emit(SurfaceEvent::RegionLeave(region));
        true
    }

    fn find(&self, id: &RegionId) -> Option<&SimRegion> {
        self.regions.iter().find(|r| &r.region.id == id)
    }

    fn find_mut(&mut self, id: &RegionId) -> Option<&mut SimRegion> {
        self.regions.iter_mut().find(|r| &r.region.id == id)
    }

    fn emit(&mut self, event: SurfaceEvent) {
        // Senders whose receiver was dropped are unsubscribed here
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for SimSurface {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Surface for SimSurface {
    fn load(&mut self, path: &Path) -> Result<()> {
        if path.file_name().is_none() {
            return Err(SurfaceError::Load {
                path: path.to_path_buf(),
                reason: "path does not name a file".to_string(),
            });
        }
        log::debug!("SimSurface::load: {:?} ({:.3}s)", path, self.duration);
        self.loaded = Some(path.to_path_buf());
        self.regions.clear();
        self.position = 0.0;
        self.playing = false;
        self.zoom = DEFAULT_PX_PER_SEC;
        Ok(())
    }

    fn subscribe(&mut self) -> Receiver<SurfaceEvent> {
        let (tx, rx) = channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn destroy(&mut self) {
        self.subscribers.clear();
        self.regions.clear();
        self.playing = false;
        self.loaded = None;
    }

    fn create_region(&mut self, bounds: RegionBounds, editable: bool) -> Region {
        let id = RegionId::new(format!("region-{}", self.next_id));
        self.next_id += 1;
        let region = Region::new(id, bounds);
        self.regions.push(SimRegion {
            region: region.clone(),
            editable,
        });
        self.emit(SurfaceEvent::RegionCreated(region.clone()));
        region
    }

    fn remove_region(&mut self, id: &RegionId) {
        let Some(index) = self.regions.iter().position(|r| &r.region.id == id) else {
            return;
        };
        self.regions.remove(index);
        self.emit(SurfaceEvent::RegionRemoved(id.clone()));
    }

    fn regions(&self) -> Vec<Region> {
        self.regions.iter().map(|r| r.region.clone()).collect()
    }

    fn current_time(&self) -> Time {
        self.position
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn play(&mut self) {
        if self.position < self.duration {
            self.playing = true;
        }
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn zoom_level(&self) -> f64 {
        self.zoom
    }

    fn set_zoom(&mut self, px_per_sec: f64) {
        self.zoom = px_per_sec;
        self.emit(SurfaceEvent::ZoomChanged(px_per_sec));
    }
}

//! Zoom Controller - pixels-per-second stepping with a floor
//!
//! Zoom has no effect on regions or selection. The surface is only told about
//! levels that actually differ from the current one.

/// Smallest zoom level the waveform may reach (pixels per second)
pub const MIN_PX_PER_SEC: f64 = 20.0;

/// Change applied per wheel step (pixels per second)
pub const ZOOM_INCREMENT: f64 = 50.0;

/// Direction of one zoom step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// +1 for zoom in, -1 for zoom out
    pub fn sign(self) -> f64 {
        match self {
            ZoomDirection::In => 1.0,
            ZoomDirection::Out => -1.0,
        }
    }

    /// Map a vertical wheel delta to a direction
    ///
    /// The sign is inverted: scrolling up (negative delta) zooms in.
    /// Zero delta carries no direction.
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(ZoomDirection::In)
        } else if delta_y > 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoomController {
    level: f64,
    minimum: f64,
    increment: f64,
}

impl ZoomController {
    pub fn new(initial: f64, minimum: f64, increment: f64) -> Self {
        Self {
            level: initial.max(minimum),
            minimum,
            increment,
        }
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Take one step. Returns the new level, or `None` when clamped to the
    /// current level (the surface must not be notified then).
    pub fn step(&mut self, direction: ZoomDirection) -> Option<f64> {
        let next = (self.level + direction.sign() * self.increment).max(self.minimum);
        if next == self.level {
            log::debug!("zoom: step {:?} clamped at {}", direction, self.level);
            return None;
        }
        self.level = next;
        Some(next)
    }

    /// Adopt a level reported by the surface
    pub fn sync(&mut self, level: f64) {
        self.level = level;
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(MIN_PX_PER_SEC, MIN_PX_PER_SEC, ZOOM_INCREMENT)
    }
}

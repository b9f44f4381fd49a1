//! Common types for Regionmark
//!
//! Time is measured in seconds from the start of the loaded audio file.
//! Region identifiers are opaque strings handed out by the waveform surface;
//! the engine never orders or compares them beyond equality.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position on the audio timeline in seconds (non-negative)
pub type Time = f64;

/// Opaque region identifier, assigned by the surface when a region is created
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    /// Wrap a surface-assigned identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Start/end pair for a region, always normalized so that `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    pub start: Time,
    pub end: Time,
}

impl RegionBounds {
    /// Build bounds from two endpoints in any order
    ///
    /// Negative inputs (including `-0.0` and NaN) are clamped to `+0.0`.
    pub fn new(a: Time, b: Time) -> Self {
        let a = clamp_non_negative(a);
        let b = clamp_non_negative(b);
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Zero-length bounds at a single point (an unset endpoint)
    pub fn point(at: Time) -> Self {
        Self::new(at, at)
    }

    /// Length in seconds
    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    /// Inclusive containment on both bounds
    pub fn contains(&self, time: Time) -> bool {
        self.start <= time && time <= self.end
    }
}

fn clamp_non_negative(t: Time) -> Time {
    if t > 0.0 {
        t
    } else {
        0.0
    }
}

/// A committed time interval on the waveform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub start: Time,
    pub end: Time,
}

impl Region {
    /// Create a region, normalizing the endpoint order
    pub fn new(id: RegionId, bounds: RegionBounds) -> Self {
        let bounds = RegionBounds::new(bounds.start, bounds.end);
        Self {
            id,
            start: bounds.start,
            end: bounds.end,
        }
    }

    pub fn bounds(&self) -> RegionBounds {
        RegionBounds {
            start: self.start,
            end: self.end,
        }
    }

    /// Inclusive containment on both bounds
    pub fn contains(&self, time: Time) -> bool {
        self.bounds().contains(time)
    }
}

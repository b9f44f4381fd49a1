//! Surface error types
//!
//! The annotation engine itself never fails on bad input (late events,
//! unknown ids and out-of-range zoom steps all degrade to no-ops). Only
//! loading a file onto the waveform surface can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the surface boundary
#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("No audio file was provided")]
    NoFile,

    #[error("Failed to load audio file: {path}: {reason}")]
    Load { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, SurfaceError>;

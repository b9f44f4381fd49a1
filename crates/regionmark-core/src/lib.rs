//! Regionmark Core - region and label annotation engine
//!
//! Pure state for marking time intervals on an audio waveform and labelling
//! them. Rendering, audio decoding and file export stay outside; the engine
//! talks to the renderer through the [`surface::Surface`] trait.

pub mod debounce;
pub mod error;
pub mod export;
pub mod label_store;
pub mod pending;
pub mod region_store;
pub mod selection;
pub mod surface;
pub mod types;
pub mod zoom;

pub use types::*;

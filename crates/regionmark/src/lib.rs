//! Regionmark - mark time regions on an audio waveform and label them
//!
//! This crate wires the annotation engine from `regionmark-core` to user
//! input:
//!
//! 1. **Input**: keyboard shortcuts (play/pause, start/end region) and wheel
//!    zoom, with modifier/repeat/target guards and debouncing.
//!
//! 2. **Session**: one loaded file's annotation state, updated one message
//!    at a time, rendering the `[start, end, "label"]` listing.
//!
//! 3. **Script**: headless replay of a recorded annotation pass.

pub mod config;
pub mod input;
pub mod keybindings;
pub mod script;
pub mod session;

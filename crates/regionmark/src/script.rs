//! Scripted session replay
//!
//! A script is a YAML document describing an audio file and a list of timed
//! steps. Each step is applied to an [`AnnotationSession`] over a
//! [`SimSurface`] at its timestamp, so a full annotation pass (playback,
//! key presses, wheel zooming, drags, label typing) can be reproduced
//! without a display.
//!
//! ```yaml
//! duration: 30.0
//! files: [take1.wav]
//! steps:
//!   - { at_ms: 0, do: key, key: Space }
//!   - { at_ms: 0, do: advance, seconds: 2.0 }
//!   - { at_ms: 10, do: key, key: Enter }
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use regionmark_core::error::SurfaceError;
use regionmark_core::surface::SimSurface;
use regionmark_core::{RegionBounds, RegionId, Time};
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;
use crate::input::{KeyEvent, Modifiers, WheelEvent, WheelTarget};
use crate::keybindings::AnnotateKeybindings;
use crate::session::{AnnotationSession, Message};

/// Extra time after the last step so pending debounces settle
const SETTLE_MS: u64 = 1000;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to read script: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid script: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Step timestamp out of range: {0} ms")]
    Timestamp(u64),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

pub type Result<T> = std::result::Result<T, ScriptError>;

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// Length of the simulated audio in seconds
    pub duration: Time,
    /// Dropped files; the first one is loaded
    pub files: Vec<PathBuf>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    /// Milliseconds since the script started
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: StepAction,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "do", rename_all = "snake_case")]
pub enum StepAction {
    /// Let playback run for a while (no effect while paused)
    Advance { seconds: Time },
    /// Click on the waveform at `time`
    Seek { time: Time },
    Key {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
        #[serde(default)]
        repeat: bool,
    },
    Wheel { target: WheelTarget, delta_y: f64 },
    /// Replace the label editor text
    Type { text: String },
    Hover { region: RegionId },
    Leave { region: RegionId },
    /// Drag-select a new region on the waveform
    Select { start: Time, end: Time },
    /// One intermediate drag/resize step
    Drag { region: RegionId, start: Time, end: Time },
    /// Release a drag/resize gesture
    Release { region: RegionId },
    /// Delete the active region
    Delete,
    /// Nothing happens; lets debounce windows elapse
    Wait,
}

/// Read and parse a script file
pub fn load_script(path: &Path) -> Result<Script> {
    log::info!("load_script: Loading from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&contents)
}

pub fn parse_script(contents: &str) -> Result<Script> {
    Ok(serde_yaml::from_str(contents)?)
}

/// Replay a script and return the settled session
pub fn run_script(
    script: &Script,
    config: Config,
    bindings: AnnotateKeybindings,
) -> Result<AnnotationSession<SimSurface>> {
    let start = Instant::now();
    let mut session = AnnotationSession::new(SimSurface::new(script.duration), config, bindings);
    session.load(&script.files)?;

    let mut last_ms: u64 = 0;
    for step in &script.steps {
        let now = offset(start, step.at_ms)?;
        last_ms = last_ms.max(step.at_ms);
        apply_step(&mut session, &step.action, now);
    }

    session.tick(offset(start, last_ms.saturating_add(SETTLE_MS))?);
    Ok(session)
}

fn offset(start: Instant, at_ms: u64) -> Result<Instant> {
    start
        .checked_add(Duration::from_millis(at_ms))
        .ok_or(ScriptError::Timestamp(at_ms))
}

fn apply_step(session: &mut AnnotationSession<SimSurface>, action: &StepAction, now: Instant) {
    log::debug!("step: {:?}", action);
    match action {
        StepAction::Advance { seconds } => {
            session.surface_mut().advance(*seconds);
            session.tick(now);
        }
        StepAction::Seek { time } => {
            session.surface_mut().seek(*time);
            session.tick(now);
        }
        StepAction::Key {
            key,
            modifiers,
            repeat,
        } => {
            let event = KeyEvent {
                key: key.clone(),
                modifiers: *modifiers,
                repeat: *repeat,
            };
            session.update(Message::KeyPressed(event), now);
        }
        StepAction::Wheel { target, delta_y } => {
            let event = WheelEvent {
                target: *target,
                delta_y: *delta_y,
            };
            session.update(Message::Wheel(event), now);
        }
        StepAction::Type { text } => {
            session.update(Message::EditLabel(text.clone()), now);
        }
        StepAction::Hover { region } => {
            if !session.surface_mut().hover_enter(region) {
                log::warn!("step: hover on unknown region {}", region);
            }
            session.tick(now);
        }
        StepAction::Leave { region } => {
            session.surface_mut().hover_leave(region);
            session.tick(now);
        }
        StepAction::Select { start, end } => {
            session
                .surface_mut()
                .user_create_region(RegionBounds::new(*start, *end));
            session.tick(now);
        }
        StepAction::Drag { region, start, end } => {
            if !session
                .surface_mut()
                .drag_region(region, RegionBounds::new(*start, *end))
            {
                log::warn!("step: cannot drag region {}", region);
            }
            session.tick(now);
        }
        StepAction::Release { region } => {
            session.surface_mut().finish_drag(region);
            session.tick(now);
        }
        StepAction::Delete => {
            session.update(Message::DeleteActive, now);
        }
        StepAction::Wait => session.tick(now),
    }
}

//! Annotation session for one loaded audio file
//!
//! The session owns every piece of annotation state (Region Store, Label
//! Store, pending region, selection, zoom) together with the surface it
//! drives. All mutation goes through [`AnnotationSession::update`], one
//! [`Message`] at a time, with the caller supplying the current time so
//! debounced work is deterministic:
//!
//! 1. The message is handled (see `handlers`)
//! 2. Surface events queued on the subscription are drained and applied
//! 3. Debounced work whose quiet window has elapsed is run
//!
//! Loading a new file tears the previous state down and starts from empty.

mod editor;
mod handlers;
mod message;

use std::path::{Path, PathBuf};
use std::time::Instant;

use crossbeam::channel::Receiver;
use regionmark_core::debounce::Debouncer;
use regionmark_core::error::{Result, SurfaceError};
use regionmark_core::export::{annotation_entries, format_regions, AnnotationEntry};
use regionmark_core::label_store::LabelStore;
use regionmark_core::pending::{PendingRegion, PendingRegionBuilder};
use regionmark_core::region_store::RegionStore;
use regionmark_core::selection::SelectionTracker;
use regionmark_core::surface::{Surface, SurfaceEvent};
use regionmark_core::zoom::ZoomController;
use regionmark_core::{Region, RegionId};

use crate::config::Config;
use crate::input::InputDispatcher;
use crate::keybindings::AnnotateKeybindings;

pub use editor::LabelEditor;
pub use message::{Message, Outcome};

pub struct AnnotationSession<S: Surface> {
    // ═══════════════════════════════════════════════════════════════════════
    // Surface
    // ═══════════════════════════════════════════════════════════════════════

    surface: S,

    /// Subscription to the surface's events (None until a file is loaded)
    events: Option<Receiver<SurfaceEvent>>,

    loaded_file: Option<PathBuf>,

    config: Config,

    // ═══════════════════════════════════════════════════════════════════════
    // Annotation State
    // ═══════════════════════════════════════════════════════════════════════

    regions: RegionStore,

    /// Region list as of the last settled recompute (what the UI shows)
    visible: Vec<Region>,

    labels: LabelStore,

    pending: PendingRegionBuilder,

    selection: SelectionTracker,

    zoom: ZoomController,

    editor: LabelEditor,

    // ═══════════════════════════════════════════════════════════════════════
    // Input & Debouncing
    // ═══════════════════════════════════════════════════════════════════════

    input: InputDispatcher,

    /// Region list recompute after lifecycle bursts
    recompute: Debouncer<()>,

    recompute_count: u64,

    /// Bumped on every zoom change; aux views keyed on it must re-initialize
    aux_view_generation: u64,
}

impl<S: Surface> AnnotationSession<S> {
    // ═══════════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a session around a surface. Nothing is loaded yet.
    pub fn new(surface: S, mut config: Config, bindings: AnnotateKeybindings) -> Self {
        config.validate();
        let input = InputDispatcher::new(bindings, config.debounce.wheel_window());
        let recompute = Debouncer::new(config.debounce.regions_window());
        let zoom = Self::zoom_from_config(&config);

        Self {
            surface,
            events: None,
            loaded_file: None,
            config,
            regions: RegionStore::new(),
            visible: Vec::new(),
            labels: LabelStore::new(),
            pending: PendingRegionBuilder::new(),
            selection: SelectionTracker::new(),
            zoom,
            editor: LabelEditor::new(),
            input,
            recompute,
            recompute_count: 0,
            aux_view_generation: 0,
        }
    }

    /// Load the first of the dropped files, resetting all annotation state
    ///
    /// Only one file per session is supported; extra paths are ignored.
    pub fn load(&mut self, files: &[PathBuf]) -> Result<PathBuf> {
        let Some(path) = files.first() else {
            return Err(SurfaceError::NoFile);
        };
        if files.len() > 1 {
            log::debug!("load: ignoring {} extra file(s)", files.len() - 1);
        }
        log::info!("load: {:?}", path);

        self.teardown();
        self.surface.load(path)?;
        self.events = Some(self.surface.subscribe());
        self.loaded_file = Some(path.clone());

        if self.surface.zoom_level() != self.zoom.level() {
            let level = self.zoom.level();
            self.surface.set_zoom(level);
        }

        Ok(path.clone())
    }

    /// Release the surface subscription and reset every state object
    fn teardown(&mut self) {
        // Dropping the receiver releases the subscription
        self.events = None;
        self.surface.destroy();
        self.loaded_file = None;
        self.regions.clear();
        self.visible.clear();
        self.labels.clear();
        self.pending.reset();
        self.selection.clear();
        self.zoom = Self::zoom_from_config(&self.config);
        self.editor = LabelEditor::new();
        self.input.reset();
        self.recompute.cancel();
        self.recompute_count = 0;
        self.aux_view_generation = 0;
    }

    fn zoom_from_config(config: &Config) -> ZoomController {
        ZoomController::new(
            config.zoom.initial_px_per_sec,
            config.zoom.minimum_px_per_sec,
            config.zoom.increment_px_per_sec,
        )
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Update
    // ═══════════════════════════════════════════════════════════════════════

    /// Apply one message at time `now`
    pub fn update(&mut self, message: Message, now: Instant) -> Outcome {
        let outcome = match message {
            Message::KeyPressed(event) => self.handle_key_pressed(&event),
            Message::Wheel(event) => self.handle_wheel(&event, now),
            Message::EditLabel(text) => self.handle_edit_label(text),
            Message::SetLabel { id, text } => self.handle_set_label(id, text),
            Message::DeleteActive => self.handle_delete_active(),
            Message::DeleteRegion(id) => self.handle_delete_region(&id),
            Message::Surface(event) => {
                self.handle_surface_event(event, now);
                Outcome::Handled
            }
            Message::Tick => Outcome::Handled,
        };
        self.pump(now);
        outcome
    }

    /// Shorthand for `update(Message::Tick, now)`
    pub fn tick(&mut self, now: Instant) {
        self.update(Message::Tick, now);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct access for user gestures on the waveform
    ///
    /// Events raised through it are picked up on the next `update`/`tick`.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn loaded_file(&self) -> Option<&Path> {
        self.loaded_file.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Region list as of the last settled recompute, sorted by start
    pub fn regions(&self) -> &[Region] {
        &self.visible
    }

    /// The Region Store, current as of the last drained event
    pub fn region_store(&self) -> &RegionStore {
        &self.regions
    }

    pub fn labels(&self) -> &LabelStore {
        &self.labels
    }

    pub fn label(&self, id: &RegionId) -> &str {
        self.labels.get(id)
    }

    pub fn active_region_id(&self) -> Option<&RegionId> {
        self.selection.active()
    }

    /// Bounds of the active region, looked up fresh
    pub fn current_region(&self) -> Option<Region> {
        self.selection
            .active()
            .and_then(|id| self.regions.get(id))
            .cloned()
    }

    pub fn pending(&self) -> Option<&PendingRegion> {
        self.pending.pending()
    }

    pub fn editor(&self) -> &LabelEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut LabelEditor {
        &mut self.editor
    }

    pub fn zoom_level(&self) -> f64 {
        self.zoom.level()
    }

    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    pub fn aux_view_generation(&self) -> u64 {
        self.aux_view_generation
    }

    /// Whether debounced work is still waiting for its quiet window
    pub fn is_settling(&self) -> bool {
        self.recompute.is_pending() || self.input.wheel_pending()
    }

    pub fn help_lines(&self) -> Vec<String> {
        self.input.bindings().help_lines()
    }

    /// Label triples for the visible region list
    pub fn entries(&self) -> Vec<AnnotationEntry> {
        annotation_entries(&self.visible, &self.labels)
    }

    /// Bracketed `[start, end, "label"]` listing of the visible regions
    pub fn formatted_output(&self) -> String {
        format_regions(&self.visible, &self.labels)
    }
}

impl<S: Surface> Drop for AnnotationSession<S> {
    fn drop(&mut self) {
        self.events = None;
        self.surface.destroy();
    }
}

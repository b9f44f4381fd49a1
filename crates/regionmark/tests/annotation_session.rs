//! Session-level scenarios driven through a headless surface

use std::path::PathBuf;
use std::time::{Duration, Instant};

use regionmark::config::Config;
use regionmark::input::{KeyEvent, Modifiers, WheelEvent, WheelTarget};
use regionmark::keybindings::AnnotateKeybindings;
use regionmark::session::{AnnotationSession, Message, Outcome};
use regionmark_core::error::SurfaceError;
use regionmark_core::surface::{SimSurface, Surface, SurfaceEvent};
use regionmark_core::{Region, RegionBounds, RegionId};

const MS: Duration = Duration::from_millis(1);

fn loaded_session(duration: f64) -> (AnnotationSession<SimSurface>, Instant) {
    let mut session = AnnotationSession::new(
        SimSurface::new(duration),
        Config::default(),
        AnnotateKeybindings::default(),
    );
    session.load(&[PathBuf::from("take1.wav")]).unwrap();
    (session, Instant::now())
}

fn press(session: &mut AnnotationSession<SimSurface>, key: &str, now: Instant) -> Outcome {
    session.update(Message::KeyPressed(KeyEvent::press(key)), now)
}

fn wheel(session: &mut AnnotationSession<SimSurface>, delta_y: f64, now: Instant) -> Outcome {
    let event = WheelEvent {
        target: WheelTarget::Waveform,
        delta_y,
    };
    session.update(Message::Wheel(event), now)
}

#[test]
fn test_end_to_end_enter_play_enter_label() {
    let (mut session, t0) = loaded_session(30.0);

    assert!(press(&mut session, "Space", t0).is_handled());
    session.surface_mut().advance(2.0);
    press(&mut session, "Enter", t0 + 10 * MS);
    assert!(session.pending().is_some());

    session.surface_mut().advance(4.5);
    press(&mut session, "Enter", t0 + 20 * MS);
    assert!(session.pending().is_none());

    let listed = session.region_store().list();
    assert_eq!(listed.len(), 1);
    assert_eq!((listed[0].start, listed[0].end), (2.0, 6.5));
    let id = listed[0].id.clone();

    // Playhead sits at the region end, inside the inclusive span
    press(&mut session, "Space", t0 + 30 * MS);
    session.surface_mut().seek(6.5);
    session.tick(t0 + 100 * MS);
    assert_eq!(session.active_region_id(), Some(&id));
    assert!(session.editor().focus_requested());

    session.update(Message::EditLabel("cough".into()), t0 + 110 * MS);
    assert_eq!(session.label(&id), "cough");
    assert_eq!(session.editor().text(), "cough");

    let entries = session.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, id);
    assert_eq!(entries[0].label, "cough");

    let output = session.formatted_output();
    assert!(output.lines().any(|l| l.trim() == "[2, 6.5, \"cough\"]"));
}

#[test]
fn test_backwards_gesture_is_normalized() {
    let (mut session, t0) = loaded_session(30.0);
    session.surface_mut().seek(8.0);
    press(&mut session, "Enter", t0);
    session.surface_mut().seek(3.0);
    press(&mut session, "Enter", t0 + 10 * MS);
    session.tick(t0 + 100 * MS);

    let regions = session.regions();
    assert_eq!(regions.len(), 1);
    assert_eq!((regions[0].start, regions[0].end), (3.0, 8.0));
}

#[test]
fn test_region_list_sorted_by_start() {
    let (mut session, t0) = loaded_session(60.0);
    for (start, end) in [(40.0, 45.0), (5.0, 9.0), (20.0, 21.0)] {
        session
            .surface_mut()
            .user_create_region(RegionBounds::new(start, end));
    }
    session.tick(t0);
    session.tick(t0 + 100 * MS);

    let starts: Vec<f64> = session.regions().iter().map(|r| r.start).collect();
    assert_eq!(starts, vec![5.0, 20.0, 40.0]);
}

#[test]
fn test_drag_burst_recomputes_once_with_last_bounds() {
    let (mut session, t0) = loaded_session(30.0);
    let region = session
        .surface_mut()
        .user_create_region(RegionBounds::new(1.0, 2.0));
    session.tick(t0);
    session.tick(t0 + 100 * MS);
    let baseline = session.recompute_count();

    let steps = [(1.5, 2.5), (2.0, 3.0), (2.5, 4.0)];
    for (i, (start, end)) in steps.into_iter().enumerate() {
        session
            .surface_mut()
            .drag_region(&region.id, RegionBounds::new(start, end));
        session.tick(t0 + 200 * MS + (i as u32) * 10 * MS);
    }
    assert_eq!(session.recompute_count(), baseline);
    assert!(session.is_settling());

    session.tick(t0 + 300 * MS);
    assert!(!session.is_settling());
    assert_eq!(session.recompute_count(), baseline + 1);
    let shown = &session.regions()[0];
    assert_eq!((shown.start, shown.end), (2.5, 4.0));
}

#[test]
fn test_seek_selection_on_shared_boundary_and_outside() {
    let (mut session, t0) = loaded_session(30.0);
    let later = session
        .surface_mut()
        .user_create_region(RegionBounds::new(5.0, 10.0));
    let earlier = session
        .surface_mut()
        .user_create_region(RegionBounds::new(0.0, 5.0));
    session.tick(t0);

    session.surface_mut().seek(5.0);
    session.tick(t0 + 10 * MS);
    assert_eq!(session.active_region_id(), Some(&earlier.id));

    session.surface_mut().seek(7.0);
    session.tick(t0 + 20 * MS);
    assert_eq!(session.active_region_id(), Some(&later.id));

    session.surface_mut().seek(12.0);
    session.tick(t0 + 30 * MS);
    assert_eq!(session.active_region_id(), None);
    assert!(session.editor().is_read_only());
    assert_eq!(session.editor().text(), "");
}

#[test]
fn test_label_not_transferred_to_recreated_region() {
    let (mut session, t0) = loaded_session(30.0);
    let x = session
        .surface_mut()
        .user_create_region(RegionBounds::new(1.0, 4.0));
    session.tick(t0);
    session.update(
        Message::SetLabel {
            id: x.id.clone(),
            text: "door slam".into(),
        },
        t0,
    );

    // The surface drops X and a new region Y covers the same span
    session.surface_mut().remove_region(&x.id);
    let y = session
        .surface_mut()
        .user_create_region(RegionBounds::new(1.0, 4.0));
    session.tick(t0 + 100 * MS);
    session.tick(t0 + 200 * MS);

    assert_ne!(x.id, y.id);
    assert_eq!(session.label(&y.id), "");
    assert_eq!(session.label(&x.id), "door slam");
    assert!(session.formatted_output().contains("[1, 4, \"\"]"));
}

#[test]
fn test_zoom_floor_is_idempotent_without_notifications() {
    let (mut session, t0) = loaded_session(30.0);
    let generation = session.aux_view_generation();

    for i in 0..3u32 {
        let at = t0 + i * 500 * MS;
        wheel(&mut session, 1.0, at);
        session.tick(at + 200 * MS);
    }

    assert_eq!(session.zoom_level(), 20.0);
    assert_eq!(session.surface().zoom_level(), 20.0);
    assert_eq!(session.aux_view_generation(), generation);
}

#[test]
fn test_wheel_burst_is_one_zoom_step() {
    let (mut session, t0) = loaded_session(30.0);
    for i in 0..5u32 {
        assert!(wheel(&mut session, -1.0, t0 + i * 20 * MS).is_handled());
    }
    session.tick(t0 + 150 * MS);
    assert_eq!(session.surface().zoom_level(), 20.0);

    session.tick(t0 + 181 * MS);
    assert_eq!(session.surface().zoom_level(), 70.0);
    assert_eq!(session.zoom_level(), 70.0);
    assert_eq!(session.aux_view_generation(), 1);
}

#[test]
fn test_wheel_outside_waveform_ignored() {
    let (mut session, t0) = loaded_session(30.0);
    let event = WheelEvent {
        target: WheelTarget::Other,
        delta_y: -1.0,
    };
    assert_eq!(session.update(Message::Wheel(event), t0), Outcome::Ignored);
    session.tick(t0 + 500 * MS);
    assert_eq!(session.zoom_level(), 20.0);
}

#[test]
fn test_guarded_keys_do_nothing() {
    let (mut session, t0) = loaded_session(30.0);
    let shifted = KeyEvent {
        key: "Enter".into(),
        modifiers: Modifiers {
            shift: true,
            ..Default::default()
        },
        repeat: false,
    };
    let repeated = KeyEvent {
        key: "Space".into(),
        modifiers: Modifiers::default(),
        repeat: true,
    };

    assert_eq!(session.update(Message::KeyPressed(shifted), t0), Outcome::Ignored);
    assert_eq!(session.update(Message::KeyPressed(repeated), t0), Outcome::Ignored);
    assert_eq!(press(&mut session, "x", t0), Outcome::Ignored);
    assert!(session.pending().is_none());
    assert!(!session.surface().is_playing());
}

#[test]
fn test_external_removal_of_provisional_resets_builder() {
    let (mut session, t0) = loaded_session(30.0);
    session.surface_mut().seek(4.0);
    press(&mut session, "Enter", t0);
    let provisional = session
        .pending()
        .and_then(|p| p.provisional_region_id.clone())
        .unwrap();

    session.surface_mut().remove_region(&provisional);
    session.tick(t0 + 10 * MS);
    assert!(session.pending().is_none());

    // The next press anchors again rather than committing
    press(&mut session, "Enter", t0 + 20 * MS);
    assert!(session.pending().is_some());
    session.tick(t0 + 100 * MS);
    assert_eq!(session.regions().len(), 1);
    assert_eq!(session.regions()[0].start, session.regions()[0].end);
}

#[test]
fn test_hover_selects_and_leave_clears() {
    let (mut session, t0) = loaded_session(30.0);
    let region = session
        .surface_mut()
        .user_create_region(RegionBounds::new(10.0, 12.0));
    session.tick(t0);

    session.surface_mut().hover_enter(&region.id);
    session.tick(t0 + 10 * MS);
    assert_eq!(session.active_region_id(), Some(&region.id));
    assert_eq!(session.current_region().map(|r| r.start), Some(10.0));

    session.surface_mut().hover_leave(&region.id);
    session.tick(t0 + 20 * MS);
    assert_eq!(session.active_region_id(), None);
}

#[test]
fn test_delete_active_purges_label_and_region() {
    let (mut session, t0) = loaded_session(30.0);
    let region = session
        .surface_mut()
        .user_create_region(RegionBounds::new(1.0, 3.0));
    session.tick(t0);
    session.surface_mut().seek(2.0);
    session.tick(t0 + 10 * MS);
    session.update(Message::EditLabel("breath".into()), t0 + 20 * MS);

    assert!(session.update(Message::DeleteActive, t0 + 30 * MS).is_handled());
    session.tick(t0 + 100 * MS);

    assert!(session.active_region_id().is_none());
    assert!(session.regions().is_empty());
    assert!(!session.labels().contains(&region.id));
    assert_eq!(session.formatted_output(), "[\n\n]");
    assert_eq!(session.update(Message::DeleteActive, t0 + 200 * MS), Outcome::Ignored);
}

#[test]
fn test_late_events_are_inert() {
    let (mut session, t0) = loaded_session(30.0);
    let ghost = RegionId::new("ghost");
    let ghost_region = Region::new(ghost.clone(), RegionBounds::new(1.0, 2.0));

    let late = [
        SurfaceEvent::RegionRemoved(ghost.clone()),
        SurfaceEvent::RegionUpdated(ghost_region.clone()),
        SurfaceEvent::RegionUpdateEnd(ghost_region.clone()),
        SurfaceEvent::RegionEnter(ghost_region.clone()),
        SurfaceEvent::RegionLeave(ghost_region),
    ];
    for event in late {
        session.update(Message::Surface(event), t0);
        assert!(!session.region_store().contains(&ghost));
        assert_eq!(session.active_region_id(), None);
    }

    session.update(
        Message::SetLabel {
            id: ghost.clone(),
            text: "late".into(),
        },
        t0,
    );
    assert_eq!(
        session.update(Message::EditLabel("nobody".into()), t0),
        Outcome::Ignored
    );
    session.tick(t0 + 100 * MS);

    assert_eq!(session.label(&ghost), "late");
    assert!(session.regions().is_empty());
    assert_eq!(session.active_region_id(), None);
    assert!(session.editor().is_read_only());
}

#[test]
fn test_selection_cleared_when_region_vanishes_on_recompute() {
    let (mut session, t0) = loaded_session(30.0);
    // Known to the store but never to the surface
    let stray = Region::new(RegionId::new("stray"), RegionBounds::new(1.0, 2.0));
    session.update(Message::Surface(SurfaceEvent::RegionCreated(stray.clone())), t0);
    session.update(Message::Surface(SurfaceEvent::RegionEnter(stray.clone())), t0);
    assert_eq!(session.active_region_id(), Some(&stray.id));
    assert!(session.editor_mut().take_focus_request());

    session.tick(t0 + 100 * MS);
    assert!(!session.region_store().contains(&stray.id));
    assert_eq!(session.active_region_id(), None);
    assert!(session.editor().is_read_only());
    assert!(!session.editor().focus_requested());
}

#[test]
fn test_load_resets_state_and_requires_a_file() {
    let (mut session, t0) = loaded_session(30.0);
    let region = session
        .surface_mut()
        .user_create_region(RegionBounds::new(1.0, 3.0));
    session.tick(t0 + 100 * MS);
    session.update(
        Message::SetLabel {
            id: region.id.clone(),
            text: "old".into(),
        },
        t0 + 100 * MS,
    );

    assert!(matches!(session.load(&[]), Err(SurfaceError::NoFile)));

    session
        .load(&[PathBuf::from("take2.wav"), PathBuf::from("take3.wav")])
        .unwrap();
    assert_eq!(session.loaded_file(), Some(std::path::Path::new("take2.wav")));
    assert!(session.regions().is_empty());
    assert!(session.region_store().is_empty());
    assert!(session.labels().is_empty());
    assert_eq!(session.surface().subscriber_count(), 1);
}

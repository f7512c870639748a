//! Producer/renderer handoff semantics.

use std::sync::Arc;
use std::thread;

use rtview_core::{DisplayMode, DisplaySettings, FramePlane, PlanarYuvFrame, ViewState};

fn test_frame(width: u32, height: u32, sequence: u64) -> PlanarYuvFrame {
    let luma = FramePlane::new(
        vec![0u8; (width * height) as usize].into(),
        width as usize,
        width,
        height,
    )
    .unwrap();
    let chroma = FramePlane::new(
        vec![0u8; (width * height / 2) as usize].into(),
        width as usize,
        width / 2,
        height / 2,
    )
    .unwrap();
    PlanarYuvFrame::new(luma, chroma, sequence).unwrap()
}

#[test]
fn only_the_latest_frame_is_ever_seen() {
    let state = ViewState::new();
    state.set_frame(test_frame(64, 64, 1));
    state.set_frame(test_frame(64, 64, 2));
    state.set_frame(test_frame(64, 64, 3));

    // No queueing: the draw that never happened for frames 1 and 2 is
    // not owed to anyone.
    assert_eq!(state.frame().unwrap().sequence, 3);
    assert_eq!(state.frame().unwrap().sequence, 3);
}

#[test]
fn frames_survive_the_producer_thread() {
    let state = Arc::new(ViewState::new());

    let writer = {
        let state = state.clone();
        thread::spawn(move || {
            for sequence in 0..100 {
                state.set_frame(test_frame(32, 32, sequence));
            }
        })
    };
    writer.join().unwrap();

    assert_eq!(state.frame().unwrap().sequence, 99);
}

#[test]
fn settings_snapshot_is_consistent_per_read() {
    let state = ViewState::new();
    state.set_settings(DisplaySettings {
        mirror_horizontally: true,
        rotation_degrees: 270.0,
        display_mode: DisplayMode::AspectFill,
    });

    let snapshot = state.settings();
    assert!(snapshot.mirror_horizontally);
    assert_eq!(snapshot.rotation_degrees, 270.0);
    assert_eq!(snapshot.display_mode, DisplayMode::AspectFill);
}

#[test]
fn snapshot_outlives_a_replacement() {
    // A renderer mid-draw holds its frame even if the producer swaps in
    // a new one; the shared planes stay alive through the Arc.
    let state = ViewState::new();
    state.set_frame(test_frame(64, 64, 1));
    let in_flight = state.frame().unwrap();
    state.set_frame(test_frame(64, 64, 2));

    assert_eq!(in_flight.sequence, 1);
    assert_eq!(in_flight.dimensions(), (64, 64));
    assert_eq!(state.frame().unwrap().sequence, 2);
}

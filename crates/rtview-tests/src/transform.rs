//! End-to-end checks of the composed model-view transform.

use glam::Vec4;
use rtview_core::{compose, fit_fill_scale, DisplayMode, DisplaySettings};

const TOLERANCE: f32 = 1e-4;

fn settings(mirror: bool, rotation: f32, mode: DisplayMode) -> DisplaySettings {
    DisplaySettings {
        mirror_horizontally: mirror,
        rotation_degrees: rotation,
        display_mode: mode,
    }
}

#[test]
fn right_angles_collapse_the_blend_for_both_modes() {
    // At exact right angles the |cos|/|sin| blend must reduce to a single
    // term: the direct pair at 0/180, the inverse pair at 90/270.
    let (fw, fh, dw, dh) = (800.0, 600.0, 1024.0, 768.0);

    for mode in [DisplayMode::AspectFit, DisplayMode::AspectFill] {
        let pick = |a: f32, b: f32| match mode {
            DisplayMode::AspectFit => a.min(b),
            DisplayMode::AspectFill => a.max(b),
        };
        let direct = pick(dh / fh, dw / fw);
        let inverse = pick(dw / fh, dh / fw);

        for deg in [0.0f32, 180.0] {
            let s = fit_fill_scale(&settings(false, deg, mode), fw, fh, dw, dh);
            assert!((s - direct).abs() < TOLERANCE, "{mode:?}@{deg}: {s}");
        }
        for deg in [90.0f32, 270.0] {
            let s = fit_fill_scale(&settings(false, deg, mode), fw, fh, dw, dh);
            assert!((s - inverse).abs() < TOLERANCE, "{mode:?}@{deg}: {s}");
        }
    }
}

#[test]
fn reference_fit_and_fill_scales() {
    // 640x480 into 1280x720: fit = min(720/480, 1280/640) = 1.5,
    // fill = max(1.5, 2.0) = 2.0.
    let fit = fit_fill_scale(
        &settings(false, 0.0, DisplayMode::AspectFit),
        640.0,
        480.0,
        1280.0,
        720.0,
    );
    let fill = fit_fill_scale(
        &settings(false, 0.0, DisplayMode::AspectFill),
        640.0,
        480.0,
        1280.0,
        720.0,
    );
    assert!((fit - 1.5).abs() < TOLERANCE);
    assert!((fill - 2.0).abs() < TOLERANCE);
}

#[test]
fn mirroring_twice_restores_screen_positions() {
    let plain = settings(false, 45.0, DisplayMode::AspectFill);
    let mirrored = settings(true, 45.0, DisplayMode::AspectFill);

    let t = compose(&plain, 1920.0, 1080.0, 800.0, 480.0);
    let t_m = compose(&mirrored, 1920.0, 1080.0, 800.0, 480.0);

    let flip = t_m * t.inverse();
    for p in [
        Vec4::new(1.0, 1.0, 0.0, 1.0),
        Vec4::new(-0.25, 0.6, 0.0, 1.0),
    ] {
        let restored = flip * (flip * p);
        assert!((restored - p).length() < TOLERANCE, "{p:?} -> {restored:?}");
    }
}

#[test]
fn mirror_only_changes_the_x_axis() {
    let plain = settings(false, 0.0, DisplayMode::AspectFit);
    let mirrored = settings(true, 0.0, DisplayMode::AspectFit);

    let t = compose(&plain, 640.0, 480.0, 640.0, 480.0);
    let t_m = compose(&mirrored, 640.0, 480.0, 640.0, 480.0);

    let p = Vec4::new(0.5, 0.25, 0.0, 1.0);
    let a = t * p;
    let b = t_m * p;
    assert!((a.y - b.y).abs() < TOLERANCE);
    assert!((a.x - b.x).abs() > TOLERANCE);
}

#[test]
fn ninety_degree_rotation_swaps_quad_extents() {
    // A square drawable keeps the arithmetic transparent: rotating a
    // landscape frame a quarter turn swaps which axis carries the long
    // side.
    let upright = compose(
        &settings(false, 0.0, DisplayMode::AspectFit),
        640.0,
        480.0,
        1000.0,
        1000.0,
    );
    let turned = compose(
        &settings(false, 90.0, DisplayMode::AspectFit),
        640.0,
        480.0,
        1000.0,
        1000.0,
    );

    let corner = Vec4::new(1.0, 1.0, 0.0, 1.0);
    let a = upright * corner;
    let b = turned * corner;
    assert!((a.x.abs() - b.y.abs()).abs() < TOLERANCE);
    assert!((a.y.abs() - b.x.abs()).abs() < TOLERANCE);
}

//! CPU fallback renderer behavior.

use std::sync::Arc;

use rtview_core::{
    DisplaySettings, DrawableSize, FramePlane, FrameRenderer, PlanarYuvFrame, RenderError,
    RenderOutcome, ViewState,
};
use rtview_view::CpuRenderer;

/// A solid-color 4:2:0 frame.
fn solid_frame(width: u32, height: u32, y: u8, cb: u8, cr: u8) -> PlanarYuvFrame {
    let luma = FramePlane::new(
        vec![y; (width * height) as usize].into(),
        width as usize,
        width,
        height,
    )
    .unwrap();
    let mut chroma_bytes = Vec::with_capacity((width * height / 2) as usize);
    for _ in 0..(width / 2 * height / 2) {
        chroma_bytes.push(cb);
        chroma_bytes.push(cr);
    }
    let chroma = FramePlane::new(chroma_bytes.into(), width as usize, width / 2, height / 2)
        .unwrap();
    PlanarYuvFrame::new(luma, chroma, 0).unwrap()
}

/// A frame whose left half is black and right half is white.
fn split_frame(width: u32, height: u32) -> PlanarYuvFrame {
    let mut luma_bytes = vec![16u8; (width * height) as usize];
    for y in 0..height as usize {
        for x in (width / 2) as usize..width as usize {
            luma_bytes[y * width as usize + x] = 235;
        }
    }
    let luma = FramePlane::new(luma_bytes.into(), width as usize, width, height).unwrap();
    let chroma = FramePlane::new(
        vec![128u8; (width * height / 2) as usize].into(),
        width as usize,
        width / 2,
        height / 2,
    )
    .unwrap();
    PlanarYuvFrame::new(luma, chroma, 0).unwrap()
}

fn renderer(state: Arc<ViewState>, size: (u32, u32)) -> CpuRenderer {
    CpuRenderer::new(state, Arc::new(size) as Arc<dyn DrawableSize>)
}

fn pixel(r: &CpuRenderer, x: u32, y: u32) -> [u8; 4] {
    let bitmap = r.bitmap().expect("bitmap rendered");
    let i = ((y * bitmap.width + x) * 4) as usize;
    bitmap.pixels[i..i + 4].try_into().unwrap()
}

#[test]
fn no_frame_is_a_cheap_no_op() {
    let state = Arc::new(ViewState::new());
    let mut r = renderer(state, (64, 64));
    assert_eq!(r.render_frame().unwrap(), RenderOutcome::NoFrame);
    assert!(r.bitmap().is_none());
}

#[test]
fn zero_sized_drawable_skips_the_frame() {
    let state = Arc::new(ViewState::new());
    state.set_frame(solid_frame(32, 32, 128, 128, 128));
    let mut r = renderer(state, (0, 0));
    assert_eq!(r.render_frame().unwrap(), RenderOutcome::SurfaceLost);
}

#[test]
fn solid_gray_frame_renders_gray() {
    let state = Arc::new(ViewState::new());
    state.set_frame(solid_frame(32, 32, 180, 128, 128));
    let mut r = renderer(state, (64, 48));

    assert_eq!(r.render_frame().unwrap(), RenderOutcome::Rendered);
    let [red, green, blue, alpha] = pixel(&r, 32, 24);
    assert_eq!(alpha, 255);
    for c in [red, green, blue] {
        assert!((c as i32 - 191).abs() <= 1, "channel = {c}");
    }
}

#[test]
fn bitmap_stretches_to_the_drawable_bounds() {
    let state = Arc::new(ViewState::new());
    state.set_frame(solid_frame(32, 32, 235, 128, 128));
    let mut r = renderer(state, (100, 70));

    r.render_frame().unwrap();
    let bitmap = r.bitmap().unwrap();
    assert_eq!((bitmap.width, bitmap.height), (100, 70));
    // Corners are covered: the blit fills the bounds, no letterboxing.
    assert_eq!(pixel(&r, 0, 0)[0], 255);
    assert_eq!(pixel(&r, 99, 69)[0], 255);
}

#[test]
fn mirroring_flips_left_and_right() {
    let state = Arc::new(ViewState::new());
    state.set_frame(split_frame(64, 64));
    let mut r = renderer(state.clone(), (64, 64));

    r.render_frame().unwrap();
    assert_eq!(pixel(&r, 4, 32)[0], 0, "left starts black");
    assert_eq!(pixel(&r, 60, 32)[0], 255, "right starts white");

    state.set_settings(DisplaySettings {
        mirror_horizontally: true,
        ..Default::default()
    });
    r.render_frame().unwrap();
    assert_eq!(pixel(&r, 4, 32)[0], 255, "left is white after mirror");
    assert_eq!(pixel(&r, 60, 32)[0], 0, "right is black after mirror");
}

#[test]
fn bad_chroma_width_drops_the_frame() {
    let state = Arc::new(ViewState::new());

    // Chroma at 3/4 of the luma width is not a biplanar shape this view
    // accepts at upload time.
    let luma = FramePlane::new(vec![0u8; 64 * 64].into(), 64, 64, 64).unwrap();
    let chroma = FramePlane::new(vec![128u8; 96 * 32].into(), 96, 48, 32).unwrap();
    state.set_frame(PlanarYuvFrame::new(luma, chroma, 0).unwrap());

    let mut r = renderer(state, (64, 64));
    let result = r.render_frame();
    assert!(matches!(result, Err(RenderError::UnsupportedFormat(_))));
    assert!(r.bitmap().is_none(), "no partial output for a bad frame");
}

#[test]
fn rendering_resumes_after_a_dropped_frame() {
    let state = Arc::new(ViewState::new());

    let luma = FramePlane::new(vec![0u8; 64 * 64].into(), 64, 64, 64).unwrap();
    let chroma = FramePlane::new(vec![128u8; 96 * 32].into(), 96, 48, 32).unwrap();
    state.set_frame(PlanarYuvFrame::new(luma, chroma, 0).unwrap());

    let mut r = renderer(state.clone(), (64, 64));
    assert!(r.render_frame().is_err());

    // The natural retry: the next good frame draws.
    state.set_frame(solid_frame(64, 64, 180, 128, 128));
    assert_eq!(r.render_frame().unwrap(), RenderOutcome::Rendered);
}

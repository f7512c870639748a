//! CPU fallback renderer.
//!
//! Used only when no GPU renderer could be constructed. Converts the
//! current frame to an interleaved RGBA bitmap and stretch-blits it into
//! the drawable bounds, honoring only the horizontal mirror and keeping
//! the buffer's top-left origin upright. Rotation and aspect-mode
//! refinements are intentionally ignored on this path.

use std::sync::Arc;

use rtview_core::{
    Backend, DrawableSize, FrameRenderer, PlanarYuvFrame, RenderError, RenderOutcome, Result,
    ViewState,
};

/// An interleaved RGBA8 bitmap sized to the drawable.
#[derive(Debug, Default)]
pub struct RgbaBitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbaBitmap {
    fn resize(&mut self, width: u32, height: u32) {
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.pixels = vec![0u8; (width * height * 4) as usize];
        }
    }
}

// Same BT.709 video-range conversion as the fragment shader, in byte
// domain.
#[inline]
fn yuv_to_rgba(y: u8, cb: u8, cr: u8) -> [u8; 4] {
    let yc = (y as f32 - 16.0) * 1.164;
    let u = cb as f32 - 128.0;
    let v = cr as f32 - 128.0;

    let r = yc + 1.793 * v;
    let g = yc - 0.213 * u - 0.533 * v;
    let b = yc + 2.112 * u;

    [
        r.clamp(0.0, 255.0).round() as u8,
        g.clamp(0.0, 255.0).round() as u8,
        b.clamp(0.0, 255.0).round() as u8,
        255,
    ]
}

/// Software renderer drawing into an owned bitmap.
///
/// The host presents the bitmap; this core never touches a platform
/// drawing API.
pub struct CpuRenderer {
    state: Arc<ViewState>,
    size_source: Arc<dyn DrawableSize>,
    bitmap: RgbaBitmap,
}

impl CpuRenderer {
    pub fn new(state: Arc<ViewState>, size_source: Arc<dyn DrawableSize>) -> Self {
        Self {
            state,
            size_source,
            bitmap: RgbaBitmap::default(),
        }
    }

    /// The most recently rendered bitmap, if any frame has been drawn.
    pub fn bitmap(&self) -> Option<&RgbaBitmap> {
        (!self.bitmap.pixels.is_empty()).then_some(&self.bitmap)
    }

    fn blit(&mut self, frame: &PlanarYuvFrame, mirror: bool) {
        let (dw, dh) = (self.bitmap.width, self.bitmap.height);
        let (fw, fh) = frame.dimensions();
        let (cw, ch) = (frame.chroma.width, frame.chroma.height);

        for dy in 0..dh {
            // Rows are written top-down, preserving the source buffer's
            // top-left origin.
            let sy = (dy as u64 * fh as u64 / dh as u64) as u32;
            let cy = (sy as u64 * ch as u64 / fh as u64).min(ch as u64 - 1) as u32;
            let luma_row = frame.luma.row(sy, 1);
            let chroma_row = frame.chroma.row(cy, 2);
            let dst_base = (dy * dw * 4) as usize;

            for dx in 0..dw {
                let mut sx = (dx as u64 * fw as u64 / dw as u64) as u32;
                if mirror {
                    sx = fw - 1 - sx;
                }
                let cx = (sx / 2).min(cw - 1) as usize;

                let rgba = yuv_to_rgba(
                    luma_row[sx as usize],
                    chroma_row[cx * 2],
                    chroma_row[cx * 2 + 1],
                );
                let dst = dst_base + dx as usize * 4;
                self.bitmap.pixels[dst..dst + 4].copy_from_slice(&rgba);
            }
        }
    }
}

impl FrameRenderer for CpuRenderer {
    fn render_frame(&mut self) -> Result<RenderOutcome> {
        let (width, height) = self.size_source.drawable_size();
        if width == 0 || height == 0 {
            return Ok(RenderOutcome::SurfaceLost);
        }

        let Some(frame) = self.state.frame() else {
            return Ok(RenderOutcome::NoFrame);
        };

        if !frame.has_half_width_chroma() {
            return Err(RenderError::UnsupportedFormat(format!(
                "chroma plane width {} is not half the luma plane width {}",
                frame.chroma.width, frame.luma.width
            )));
        }

        let mirror = self.state.settings().mirror_horizontally;
        self.bitmap.resize(width, height);
        self.blit(&frame, mirror);

        Ok(RenderOutcome::Rendered)
    }

    fn backend(&self) -> Backend {
        Backend::Cpu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_converts_to_gray() {
        // Mid-gray luma with neutral chroma: (180 - 16) * 1.164 = 190.9
        let [r, g, b, a] = yuv_to_rgba(180, 128, 128);
        assert_eq!(a, 255);
        for c in [r, g, b] {
            assert!((c as i32 - 191).abs() <= 1, "channel = {c}");
        }
    }

    #[test]
    fn black_and_white_clamp() {
        assert_eq!(yuv_to_rgba(16, 128, 128), [0, 0, 0, 255]);
        assert_eq!(yuv_to_rgba(235, 128, 128), [255, 255, 255, 255]);
        // Values outside video range clamp rather than wrap.
        assert_eq!(yuv_to_rgba(0, 128, 128), [0, 0, 0, 255]);
        assert_eq!(yuv_to_rgba(255, 128, 128), [255, 255, 255, 255]);
    }
}

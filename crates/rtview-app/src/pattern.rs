//! Synthetic biplanar test frames.
//!
//! Stands in for a capture session: generates scrolling color bars as
//! 4:2:0 biplanar YUV so every part of the upload and conversion path is
//! exercised without a camera.

use rtview_core::{FramePlane, PlanarYuvFrame};

// 75% color bars as BT.709 video-range (Y, Cb, Cr) triplets:
// white, yellow, cyan, green, magenta, red, blue, black.
const BARS: [[u8; 3]; 8] = [
    [180, 128, 128],
    [168, 44, 136],
    [145, 147, 44],
    [133, 63, 52],
    [63, 193, 204],
    [51, 109, 212],
    [28, 212, 120],
    [16, 128, 128],
];

#[inline]
fn bar_at(x: u32, width: u32, offset: u32) -> [u8; 3] {
    let index = ((x + offset) * 8 / width) % 8;
    BARS[index as usize]
}

/// Generate one frame of scrolling color bars.
///
/// `t` is seconds since the producer started; the bars drift one full
/// pattern width every eight seconds.
pub fn color_bars(width: u32, height: u32, t: f32, sequence: u64) -> PlanarYuvFrame {
    let offset = ((t * width as f32 / 8.0) as u32) % width;

    let luma_stride = width as usize;
    let mut luma = vec![0u8; luma_stride * height as usize];
    for y in 0..height as usize {
        let row = &mut luma[y * luma_stride..(y + 1) * luma_stride];
        for (x, px) in row.iter_mut().enumerate() {
            *px = bar_at(x as u32, width, offset)[0];
        }
    }

    let (cw, ch) = (width / 2, height / 2);
    let chroma_stride = cw as usize * 2;
    let mut chroma = vec![0u8; chroma_stride * ch as usize];
    for y in 0..ch as usize {
        let row = &mut chroma[y * chroma_stride..(y + 1) * chroma_stride];
        for cx in 0..cw as usize {
            let [_, cb, cr] = bar_at(cx as u32 * 2, width, offset);
            row[cx * 2] = cb;
            row[cx * 2 + 1] = cr;
        }
    }

    let luma = FramePlane::new(luma.into(), luma_stride, width, height)
        .expect("luma plane dimensions are consistent");
    let chroma = FramePlane::new(chroma.into(), chroma_stride, cw, ch)
        .expect("chroma plane dimensions are consistent");
    PlanarYuvFrame::new(luma, chroma, sequence).expect("generated planes are biplanar")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_a_valid_420_frame() {
        let frame = color_bars(640, 360, 0.0, 1);
        assert_eq!(frame.dimensions(), (640, 360));
        assert!(frame.has_half_width_chroma());
        assert_eq!(frame.chroma.height, 180);
        assert_eq!(frame.sequence, 1);
    }

    #[test]
    fn bars_scroll_over_time() {
        let a = color_bars(640, 360, 0.0, 0);
        let b = color_bars(640, 360, 4.0, 1);
        assert_ne!(a.luma.row(0, 1), b.luma.row(0, 1));
    }
}
